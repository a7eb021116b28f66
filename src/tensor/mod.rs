//! Tensor types
//!
//! This module provides the [`TensorInfo`] descriptor and the host-backed
//! [`Tensor`] that kernels read from and write into.

mod core;
mod info;
mod shape;
mod storage;

pub use core::Tensor;
pub use info::TensorInfo;
pub use shape::{Shape, element_index, num_elements};
pub use storage::Storage;
