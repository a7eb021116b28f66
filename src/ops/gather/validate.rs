//! Argument validation shared by `validate` and `configure`

use super::shape::compute_gather_shape;
use crate::dtype::DTypeSet;
use crate::error::{Error, Result};
use crate::tensor::TensorInfo;

/// Maximum rank of the input tensor
pub const MAX_INPUT_DIMS: usize = 4;

/// Maximum rank of a multi-index tensor
pub const MAX_INDEX_DIMS: usize = 3;

/// Resolve a possibly negative axis against a rank.
pub(crate) fn normalize_axis(axis: isize, ndim: usize) -> Result<usize> {
    let resolved = if axis < 0 { axis + ndim as isize } else { axis };
    if resolved < 0 || resolved >= ndim as isize {
        return Err(Error::InvalidDimension { dim: axis, ndim });
    }
    Ok(resolved as usize)
}

/// Check gather arguments, returning the normalised axis.
pub(crate) fn validate_arguments(
    input: Option<&TensorInfo>,
    indices: Option<&TensorInfo>,
    output: Option<&TensorInfo>,
    axis: isize,
) -> Result<usize> {
    let input = input.ok_or(Error::MissingTensor { arg: "input" })?;
    let indices = indices.ok_or(Error::MissingTensor { arg: "indices" })?;
    let output = output.ok_or(Error::MissingTensor { arg: "output" })?;

    if input.num_dimensions() > MAX_INPUT_DIMS {
        return Err(Error::invalid_argument(
            "input",
            format!(
                "rank {} exceeds {MAX_INPUT_DIMS}",
                input.num_dimensions()
            ),
        ));
    }

    let axis = normalize_axis(axis, input.num_dimensions())?;

    let index_rank = indices.num_dimensions();
    if axis != 1 && index_rank > 1 {
        return Err(Error::invalid_argument(
            "indices",
            format!("rank {index_rank} indices are only supported along axis 1, got axis {axis}"),
        ));
    }
    if index_rank == 0 || index_rank > MAX_INDEX_DIMS {
        return Err(Error::invalid_argument(
            "indices",
            format!("rank must be between 1 and {MAX_INDEX_DIMS}, got {index_rank}"),
        ));
    }

    let Some(input_dtype) = input.data_type() else {
        return Err(Error::invalid_argument("input", "data type is not set"));
    };

    if output.total_size() != 0 {
        if output.data_type() != Some(input_dtype) {
            return Err(Error::DTypeMismatch {
                lhs: Some(input_dtype),
                rhs: output.data_type(),
            });
        }
        if output.quantization_info() != input.quantization_info() {
            return Err(Error::QuantizationMismatch {
                lhs: "input",
                rhs: "output",
            });
        }
        let expected = compute_gather_shape(input.tensor_shape(), indices.tensor_shape(), axis);
        if expected.num_elements() != output.num_elements() {
            return Err(Error::shape_mismatch(&expected, output.tensor_shape()));
        }
    }

    match indices.data_type() {
        Some(dtype) if DTypeSet::GATHER_INDICES.contains(dtype) => Ok(axis),
        Some(dtype) => Err(Error::unsupported_dtype(dtype, "gather indices")),
        None => Err(Error::invalid_argument("indices", "data type is not set")),
    }
}
