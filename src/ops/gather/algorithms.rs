//! Gather addressing algorithms
//!
//! Each algorithm maps an output coordinate to the input coordinate it copies
//! from. All of them assume the index tensor has already been scanned for
//! negative values; a negative value read here is still reported rather than
//! wrapped.

use super::indices::read_index;
use crate::dtype::IndexElement;
use crate::error::{Error, Result};
use crate::tensor::Tensor;
use crate::window::{Coordinates, DIM_X, Dimension, Window};

/// Tensors and axis a configured gather operates on
#[derive(Copy, Clone, Debug)]
pub(crate) struct GatherOperands<'a> {
    pub input: &'a Tensor,
    pub indices: &'a Tensor,
    pub output: &'a Tensor,
    pub axis: usize,
}

/// Signature shared by every addressing function
pub(crate) type GatherFn = fn(&GatherOperands<'_>, &Window) -> Result<()>;

/// Element-wise gather along axis 0.
///
/// `output[id] = input[id with id[0] := indices[id[0]]]`
pub(crate) fn gather_0_axis<U: IndexElement>(ops: &GatherOperands<'_>, window: &Window) -> Result<()> {
    for id in window {
        let mut gather_id = id;
        gather_id.set(0, read_index::<U>(ops.indices, &Coordinates::from([id[0]]))?);

        let src = ops.input.element_bytes(&gather_id, 1)?;
        // SAFETY: `id` is visited once per window and windows handed to
        // concurrent runs are disjoint; `src` borrows a different tensor.
        unsafe { ops.output.write_element_bytes(&id, src) };
    }
    Ok(())
}

/// Row-wise gather along a non-zero axis with rank-1 indices.
///
/// Dimension 0 is fixed to a single step; each visited coordinate copies one
/// full input row, so `window` must span all of dimension 0:
/// `output[id][..] = input[id with id[axis] := indices[id[axis]]][..]`
pub(crate) fn gather_n_axis<U: IndexElement>(ops: &GatherOperands<'_>, window: &Window) -> Result<()> {
    let axis = ops.axis;
    let row_len = ops.input.info().dimension(0);
    let rows = window.with_dimension(DIM_X, Dimension::single());

    for id in &rows {
        let mut gather_id = id;
        gather_id.set(axis, read_index::<U>(ops.indices, &Coordinates::from([id[axis]]))?);

        let src = ops.input.element_bytes(&gather_id, row_len)?;
        // SAFETY: the row at `id` belongs to this window alone because
        // concurrent windows are disjoint above dimension 0.
        unsafe { ops.output.write_element_bytes(&id, src) };
    }
    Ok(())
}

/// Row-wise gather along axis 1 with a rank-2 or rank-3 index tensor.
///
/// For output coordinate `id` with index rank `R`:
/// - the index is read at `id[1..=R]`,
/// - the selected input row is `[0, index, id[R + 1], id[R + 2], ...]`.
///
/// As with [`gather_n_axis`], `window` must span all of dimension 0.
pub(crate) fn gather_multi_indices_1_axis<U: IndexElement>(
    ops: &GatherOperands<'_>,
    window: &Window,
) -> Result<()> {
    let index_rank = ops.indices.info().num_dimensions();
    if !(2..=3).contains(&index_rank) {
        return Err(Error::invalid_argument(
            "indices",
            format!("multi-index gather expects rank 2 or 3, got {index_rank}"),
        ));
    }
    let input_rank = ops.input.info().num_dimensions();
    let row_len = ops.input.info().dimension(0);
    let rows = window.with_dimension(DIM_X, Dimension::single());

    for id in &rows {
        let mut index_id = Coordinates::origin();
        for k in 0..index_rank {
            index_id.set(k, id[k + 1]);
        }
        let row = read_index::<U>(ops.indices, &index_id)?;

        let mut src_id = Coordinates::origin();
        src_id.set(1, row);
        for j in 2..input_rank {
            src_id.set(j, id[1 + index_rank + (j - 2)]);
        }

        let src = ops.input.element_bytes(&src_id, row_len)?;
        // SAFETY: see `gather_n_axis`.
        unsafe { ops.output.write_element_bytes(&id, src) };
    }
    Ok(())
}
