//! CPU runtime
//!
//! Kernels are configured once and then run over sub-windows of their
//! maximal window. With the `rayon` feature the sub-windows execute on the
//! global rayon pool.

mod scheduler;

pub use scheduler::{CpuKernel, CpuScheduler, ThreadInfo};
