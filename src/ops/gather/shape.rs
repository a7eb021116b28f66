//! Output shape of a gather

use crate::tensor::Shape;

/// Compute the shape produced by gathering `input` with `indices` along `axis`.
///
/// The input's `axis` dimension is replaced by the full shape of the index
/// tensor; every other input dimension keeps its relative order:
///
/// `out = input[..axis] ++ indices ++ input[axis + 1..]`
///
/// With a rank-1 index tensor this simply replaces the extent of `axis` by the
/// number of indices. `axis` must already be normalised and in range.
pub fn compute_gather_shape(input: &[usize], indices: &[usize], axis: usize) -> Shape {
    debug_assert!(axis < input.len(), "axis {axis} out of range for rank {}", input.len());

    input[..axis]
        .iter()
        .chain(indices)
        .chain(&input[axis + 1..])
        .copied()
        .collect()
}
