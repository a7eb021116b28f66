//! Gather configuration

/// How index values are checked before they are used to address the input.
///
/// # Policies
///
/// | Policy        | Negative index | Index `>= input.dimension(axis)` |
/// |---------------|----------------|----------------------------------|
/// | **Unchecked** | rejected       | not detected                     |
/// | **Strict**    | rejected       | rejected                         |
///
/// `Unchecked` trusts the caller for the upper bound. An out-of-range index
/// is linearised like any other coordinate, so it reads an element of a
/// neighbouring row or slice; an address past the end of the input buffer
/// panics instead of reading foreign memory.
///
/// # Default
///
/// `Unchecked`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum IndexBounds {
    /// Only reject negative indices
    #[default]
    Unchecked,
    /// Reject negative indices and indices past the gathered dimension
    Strict,
}

/// Options applied by [`GatherKernel`](super::GatherKernel) at run time
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GatherOptions {
    /// Index validation policy
    pub index_bounds: IndexBounds,
}

impl GatherOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with [`IndexBounds::Strict`]
    pub fn strict() -> Self {
        Self::new().with_index_bounds(IndexBounds::Strict)
    }

    /// Set the index validation policy
    pub fn with_index_bounds(mut self, index_bounds: IndexBounds) -> Self {
        self.index_bounds = index_bounds;
        self
    }
}
