//! Index tensor access and the pre-run validation pass

use crate::dtype::{DType, IndexElement};
use crate::error::{Error, Result};
use crate::tensor::Tensor;
use crate::window::{Coordinates, Window};

/// Interpretation of the stored 32-bit index values
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexType {
    /// Unsigned 32-bit indices
    U32,
    /// Signed 32-bit indices
    S32,
}

impl IndexType {
    /// Map an index tensor's dtype, `None` for anything but U32/I32
    pub const fn from_dtype(dtype: DType) -> Option<Self> {
        match dtype {
            DType::U32 => Some(Self::U32),
            DType::I32 => Some(Self::S32),
            _ => None,
        }
    }
}

/// Read the index stored at `id` as a position.
#[inline]
pub(crate) fn read_index<U: IndexElement>(indices: &Tensor, id: &Coordinates) -> Result<usize> {
    let raw: U = bytemuck::pod_read_unaligned(indices.element_bytes(id, 1)?);
    raw.to_position().ok_or_else(|| Error::NegativeIndex {
        value: raw.to_i64(),
        position: id.as_slice()[..indices.info().num_dimensions()].to_vec(),
    })
}

/// Scan every value of the index tensor once.
///
/// Fails on the first negative value; with `limit` set, also on the first
/// value `>= limit`.
pub(crate) fn check_indices(
    indices: &Tensor,
    index_type: IndexType,
    limit: Option<usize>,
) -> Result<()> {
    match index_type {
        IndexType::U32 => scan::<u32>(indices, limit),
        IndexType::S32 => scan::<i32>(indices, limit),
    }
}

fn scan<U: IndexElement>(indices: &Tensor, limit: Option<usize>) -> Result<()> {
    let window = Window::from_shape(indices.shape());
    for id in &window {
        let index = read_index::<U>(indices, &id)?;
        if let Some(size) = limit.filter(|&size| index >= size) {
            return Err(Error::IndexOutOfBounds { index, size });
        }
    }
    Ok(())
}
