//! Execution windows over a tensor's coordinate space
//!
//! A [`Window`] is a per-dimension `(start, end, step)` range specification.
//! Iterating a window yields every [`Coordinates`] it covers with dimension 0
//! varying fastest. Kernels derive one maximal window covering their whole
//! output at configure time; schedulers carve disjoint sub-windows out of it
//! with [`Window::split_window`] and hand one to each worker.
//!
//! Fixing a dimension to a single step (`Dimension::new(0, 1, 1)`) turns an
//! element traversal into a row traversal: the visitor is called once per row
//! and processes the row's contiguous elements itself.

mod coordinates;
mod iter;

pub use coordinates::Coordinates;
pub use iter::WindowIter;

use crate::error::{Error, Result};

/// Maximum number of dimensions a window or coordinate can describe
pub const MAX_DIMS: usize = 6;

/// Index of the innermost (contiguous) dimension
pub const DIM_X: usize = 0;

/// One dimension of a window: the half-open range `[start, end)` walked in `step` increments
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dimension {
    start: usize,
    end: usize,
    step: usize,
}

impl Dimension {
    /// Create a dimension range
    ///
    /// # Panics
    /// If `step` is zero.
    pub const fn new(start: usize, end: usize, step: usize) -> Self {
        assert!(step > 0, "window step must be non-zero");
        Self { start, end, step }
    }

    /// A dimension visited exactly once, at position 0
    pub const fn single() -> Self {
        Self::new(0, 1, 1)
    }

    /// First position
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// One past the last position
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Distance between visited positions
    #[inline]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Number of positions visited along this dimension
    #[inline]
    pub const fn num_iterations(&self) -> usize {
        if self.end <= self.start {
            0
        } else {
            (self.end - self.start).div_ceil(self.step)
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::single()
    }
}

/// Per-dimension traversal specification
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Window {
    dims: [Dimension; MAX_DIMS],
}

impl Window {
    /// Create a window that visits only the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the canonical maximal window for a shape: every dimension
    /// spans `[0, shape[d])` with step 1, unused dimensions are single-step.
    ///
    /// # Panics
    /// If `shape` has more than `MAX_DIMS` dimensions.
    pub fn from_shape(shape: &[usize]) -> Self {
        assert!(
            shape.len() <= MAX_DIMS,
            "window supports at most {MAX_DIMS} dimensions, got {}",
            shape.len()
        );
        let mut window = Self::default();
        for (d, &extent) in shape.iter().enumerate() {
            window.dims[d] = Dimension::new(0, extent, 1);
        }
        window
    }

    /// Replace one dimension
    #[inline]
    pub fn set(&mut self, dim: usize, dimension: Dimension) {
        self.dims[dim] = dimension;
    }

    /// Builder form of [`Window::set`]
    #[inline]
    pub fn with_dimension(mut self, dim: usize, dimension: Dimension) -> Self {
        self.dims[dim] = dimension;
        self
    }

    /// Get one dimension
    #[inline]
    pub fn dimension(&self, dim: usize) -> Dimension {
        self.dims[dim]
    }

    /// Number of positions visited along one dimension
    #[inline]
    pub fn num_iterations(&self, dim: usize) -> usize {
        self.dims[dim].num_iterations()
    }

    /// Total number of coordinates the window yields
    pub fn num_iterations_total(&self) -> usize {
        self.dims.iter().map(Dimension::num_iterations).product()
    }

    /// True when the window yields no coordinates
    pub fn is_empty(&self) -> bool {
        self.dims.iter().any(|d| d.num_iterations() == 0)
    }

    /// True when every dimension's range lies inside `outer`'s range
    pub fn is_within(&self, outer: &Window) -> bool {
        self.check_within(outer).is_ok()
    }

    /// Like [`Window::is_within`], reporting the first offending dimension
    pub fn check_within(&self, outer: &Window) -> Result<()> {
        for (dim, (inner, bound)) in self.dims.iter().zip(outer.dims.iter()).enumerate() {
            if inner.start < bound.start || inner.end > bound.end {
                return Err(Error::WindowOutOfRange {
                    dim,
                    start: inner.start,
                    end: inner.end,
                    max_start: bound.start,
                    max_end: bound.end,
                });
            }
        }
        Ok(())
    }

    /// Split one dimension into `total` balanced, disjoint parts and return part `id`.
    ///
    /// The parts together cover exactly the positions of the original
    /// dimension; earlier parts receive the remainder. A part can be empty
    /// when `total` exceeds the number of iterations.
    ///
    /// # Panics
    /// If `total` is zero or `id >= total`.
    pub fn split_window(&self, dim: usize, id: usize, total: usize) -> Window {
        assert!(total > 0 && id < total, "invalid split {id} of {total}");

        let d = self.dims[dim];
        let n = d.num_iterations();
        let base = n / total;
        let rem = n % total;
        let first = id * base + id.min(rem);
        let count = base + usize::from(id < rem);

        let start = d.start + first * d.step;
        let end = if count == 0 {
            start
        } else {
            (start + count * d.step).min(d.end)
        };

        self.with_dimension(dim, Dimension::new(start, end, d.step))
    }

    /// Iterate every coordinate covered by the window, dimension 0 fastest
    pub fn iter(&self) -> WindowIter {
        WindowIter::new(*self)
    }
}

impl IntoIterator for &Window {
    type Item = Coordinates;
    type IntoIter = WindowIter;

    fn into_iter(self) -> WindowIter {
        self.iter()
    }
}
