//! # numr-gather
//!
//! **Windowed gather kernels for dense host tensors.**
//!
//! numr-gather selects slices of a tensor along one axis using a tensor of
//! 32-bit indices. Kernels are validated and configured once, then run over
//! disjoint sub-windows of their output, optionally in parallel.
//!
//! ## Layout
//!
//! Dimension 0 is the innermost, contiguous dimension. A tensor of shape
//! `[2, 3]` holds three rows of two elements each.
//!
//! ## Quick Start
//!
//! ```rust
//! use numr_gather::prelude::*;
//!
//! let input = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
//! let indices = Tensor::from_slice(&[2u32, 0], &[2]);
//!
//! let out = gather(&input, &indices, 1)?;
//! assert_eq!(out.shape(), &[2, 2]);
//! assert_eq!(out.to_vec::<f32>(), [5.0, 6.0, 1.0, 2.0]);
//! # Ok::<(), numr_gather::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): run scheduled windows on the rayon thread pool
//! - `f16` (default): half-precision elements (F16, BF16)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod ops;
pub mod reference;
pub mod runtime;
pub mod tensor;
pub mod window;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::DType;
    pub use crate::error::{Error, Result};
    pub use crate::ops::{GatherKernel, GatherOptions, IndexBounds, gather, gather_with_options};
    pub use crate::runtime::{CpuScheduler, ThreadInfo};
    pub use crate::tensor::{Tensor, TensorInfo};
    pub use crate::window::{Coordinates, Window};
}
