//! Gather: select slices of a tensor along one axis by index.
//!
//! ```text
//! input  [4]      = [10, 20, 30, 40]
//! indices[4]      = [ 3,  0,  0,  2]
//! output [4]      = [40, 10, 10, 30]
//! ```
//!
//! The output shape is the input shape with the gathered axis replaced by
//! the full shape of the index tensor (see [`compute_gather_shape`]).
//! Dimension 0 is the innermost, contiguous dimension throughout.

mod algorithms;
mod indices;
mod kernel;
mod options;
mod shape;
mod validate;

pub use indices::IndexType;
pub use kernel::{GatherAlgorithm, GatherKernel};
pub use options::{GatherOptions, IndexBounds};
pub use shape::compute_gather_shape;
pub use validate::{MAX_INDEX_DIMS, MAX_INPUT_DIMS};

use crate::error::Result;
use crate::runtime::CpuScheduler;
use crate::tensor::Tensor;

/// Gather `input` along `axis` with default options.
///
/// Allocates the output, configures a [`GatherKernel`] and runs it on a
/// [`CpuScheduler`]. A negative `axis` counts from the last dimension.
pub fn gather(input: &Tensor, indices: &Tensor, axis: isize) -> Result<Tensor> {
    gather_with_options(input, indices, axis, GatherOptions::default())
}

/// Gather `input` along `axis` with explicit options.
pub fn gather_with_options(
    input: &Tensor,
    indices: &Tensor,
    axis: isize,
    options: GatherOptions,
) -> Result<Tensor> {
    let mut output = Tensor::empty();
    {
        let mut kernel = GatherKernel::with_options(options);
        kernel.try_configure(input, indices, &mut output, axis)?;
        CpuScheduler::new().schedule(&kernel)?;
    }
    Ok(output)
}
