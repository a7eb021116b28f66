//! Coordinates: a position in an up-to-`MAX_DIMS` dimensional space

use super::MAX_DIMS;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A multi-dimensional position.
///
/// Always carries `MAX_DIMS` entries; dimensions beyond a tensor's rank stay 0.
/// Dimension 0 is the innermost (fastest varying, contiguous) dimension.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Coordinates([usize; MAX_DIMS]);

impl Coordinates {
    /// The origin (all zeros)
    pub const fn origin() -> Self {
        Self([0; MAX_DIMS])
    }

    /// Build coordinates from a leading slice of values.
    ///
    /// # Panics
    /// If `values` has more than `MAX_DIMS` entries.
    pub fn from_slice(values: &[usize]) -> Self {
        assert!(
            values.len() <= MAX_DIMS,
            "coordinates support at most {MAX_DIMS} dimensions, got {}",
            values.len()
        );
        let mut coords = Self::origin();
        coords.0[..values.len()].copy_from_slice(values);
        coords
    }

    /// Set the value of one dimension
    #[inline]
    pub fn set(&mut self, dim: usize, value: usize) {
        self.0[dim] = value;
    }

    /// View all `MAX_DIMS` values
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of dimensions up to and including the last non-zero value
    pub fn num_dimensions(&self) -> usize {
        self.0.iter().rposition(|&v| v != 0).map_or(0, |p| p + 1)
    }
}

impl Index<usize> for Coordinates {
    type Output = usize;

    #[inline]
    fn index(&self, dim: usize) -> &usize {
        &self.0[dim]
    }
}

impl IndexMut<usize> for Coordinates {
    #[inline]
    fn index_mut(&mut self, dim: usize) -> &mut usize {
        &mut self.0[dim]
    }
}

impl fmt::Debug for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<const N: usize> From<[usize; N]> for Coordinates {
    fn from(value: [usize; N]) -> Self {
        Self::from_slice(&value)
    }
}
