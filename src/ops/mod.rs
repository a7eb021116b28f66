//! Tensor operations
//!
//! Each operation is a kernel that is validated and configured once, then
//! run over windows of its output:
//!
//! ```text
//! Kernel::validate(infos)          descriptor checks only
//! Kernel::configure(tensors)       validate, size output, pick algorithm
//! CpuScheduler::schedule(&kernel)  run over the split output window
//! ```
//!
//! Free functions such as [`gather`] wrap all three steps.

pub mod gather;

pub use gather::{
    GatherAlgorithm, GatherKernel, GatherOptions, IndexBounds, IndexType, compute_gather_shape,
    gather, gather_with_options,
};
