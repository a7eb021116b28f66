//! Scalar reference gather used to cross-check [`GatherKernel`](crate::ops::GatherKernel).
//!
//! The oracle walks the output one coordinate at a time with no windows split
//! and no byte-level copies. It supports rank-1 indices on any axis and
//! rank-2/3 indices on axis 1; anything else is [`Error::NotImplemented`].

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::gather::compute_gather_shape;
use crate::tensor::Shape;
use crate::window::{Coordinates, DIM_X, Dimension, MAX_DIMS, Window};

/// Minimal typed host tensor, dimension 0 innermost
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleTensor<T: Element> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: Element> SimpleTensor<T> {
    /// Zero-filled tensor of `shape`
    pub fn new(shape: impl Into<Shape>) -> Self {
        let shape = shape.into();
        let data = vec![T::zero(); shape.num_elements()];
        Self { shape, data }
    }

    /// Wrap existing data
    pub fn from_vec(data: Vec<T>, shape: impl Into<Shape>) -> Result<Self> {
        let shape = shape.into();
        if shape.ndim() > MAX_DIMS {
            return Err(Error::invalid_argument(
                "shape",
                format!("rank {} exceeds {MAX_DIMS}", shape.ndim()),
            ));
        }
        if data.len() != shape.num_elements() {
            return Err(Error::shape_mismatch(&shape, &[data.len()]));
        }
        Ok(Self { shape, data })
    }

    /// Dimensions
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Elements in memory order
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Element at `id`, `None` if the linear position is past the data
    pub fn get(&self, id: &Coordinates) -> Option<T> {
        self.data.get(self.shape.element_index(id)).copied()
    }

    fn slice(&self, id: &Coordinates, len: usize) -> Result<&[T]> {
        let start = self.shape.element_index(id);
        self.data
            .get(start..start + len)
            .ok_or(Error::IndexOutOfBounds {
                index: start + len,
                size: self.data.len(),
            })
    }
}

fn read_index(indices: &SimpleTensor<u32>, id: &Coordinates) -> Result<usize> {
    indices
        .get(id)
        .map(|v| v as usize)
        .ok_or_else(|| Error::Internal(format!("index coordinate {id:?} outside index tensor")))
}

/// Gather `src` along `axis` with unsigned indices.
///
/// `axis` must already be normalised.
pub fn gather<T: Element>(
    src: &SimpleTensor<T>,
    indices: &SimpleTensor<u32>,
    axis: usize,
) -> Result<SimpleTensor<T>> {
    if axis >= src.shape.ndim() {
        return Err(Error::InvalidDimension {
            dim: axis as isize,
            ndim: src.shape.ndim(),
        });
    }
    let dst_shape = compute_gather_shape(&src.shape, &indices.shape, axis);
    let mut dst = SimpleTensor::<T>::new(dst_shape.clone());
    let window = Window::from_shape(&dst_shape);
    let index_rank = indices.shape.ndim();

    if index_rank == 1 {
        for id in &window {
            let mut offset = id;
            offset.set(axis, read_index(indices, &Coordinates::from([id[axis]]))?);
            let value = src.slice(&offset, 1)?[0];
            let at = dst.shape.element_index(&id);
            dst.data[at] = value;
        }
        return Ok(dst);
    }

    if axis != 1 {
        return Err(Error::NotImplemented {
            feature: "reference gather with multi-dimensional indices outside axis 1",
        });
    }

    let row_len = src.shape[0];
    let rows = window.with_dimension(DIM_X, Dimension::single());
    for id in &rows {
        let mut index_offset = Coordinates::origin();
        for k in 0..index_rank {
            index_offset.set(k, id[k + 1]);
        }
        let row = read_index(indices, &index_offset)?;

        let mut src_offset = Coordinates::origin();
        src_offset.set(1, row);
        for j in 2..src.shape.ndim() {
            src_offset.set(j, id[1 + index_rank + (j - 2)]);
        }

        let at = dst.shape.element_index(&id);
        dst.data[at..at + row_len].copy_from_slice(src.slice(&src_offset, row_len)?);
    }
    Ok(dst)
}
