//! Shape type: dimensions of a tensor
//!
//! Dimension 0 is the innermost dimension: consecutive elements along it are
//! adjacent in memory, and dimension `i` advances by `shape[0] * ... * shape[i-1]`
//! elements.

use crate::window::{Coordinates, MAX_DIMS};
use smallvec::SmallVec;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

/// Stack allocation threshold for dimensions
pub(crate) const STACK_DIMS: usize = MAX_DIMS;

/// Shape type: dimensions of a tensor
#[derive(Clone, PartialEq, Eq, Default, Hash)]
pub struct Shape(SmallVec<[usize; STACK_DIMS]>);

impl Shape {
    /// Create an empty shape.
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// View shape as a slice.
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }

    /// Number of dimensions in this shape.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Total number of elements (0 for a shape with no dimensions).
    #[inline]
    pub fn num_elements(&self) -> usize {
        num_elements(&self.0)
    }

    /// Linear element index of a coordinate; coordinates past `ndim` are ignored.
    #[inline]
    pub fn element_index(&self, id: &Coordinates) -> usize {
        element_index(&self.0, id)
    }
}

/// Total number of elements of a dimension list (0 when it has no dimensions).
#[inline]
pub fn num_elements(dims: &[usize]) -> usize {
    if dims.is_empty() {
        0
    } else {
        dims.iter().product()
    }
}

/// Linear element index of `id` in a dense tensor with dimension 0 innermost.
///
/// The coordinate is not bounds-checked: a value past a dimension's extent
/// spills into the next dimension exactly as the linear formula dictates.
#[inline]
pub fn element_index(dims: &[usize], id: &Coordinates) -> usize {
    let mut index = 0;
    let mut stride = 1;
    for (d, &extent) in dims.iter().enumerate() {
        index += id[d] * stride;
        stride *= extent;
    }
    index
}

impl Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl DerefMut for Shape {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.as_mut_slice()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        self.0.as_slice()
    }
}

impl From<Vec<usize>> for Shape {
    fn from(value: Vec<usize>) -> Self {
        Self(value.into_iter().collect())
    }
}

impl From<&[usize]> for Shape {
    fn from(value: &[usize]) -> Self {
        Self(value.iter().copied().collect())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(value: [usize; N]) -> Self {
        Self(value.into_iter().collect())
    }
}

impl FromIterator<usize> for Shape {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
