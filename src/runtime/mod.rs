//! Execution runtime for configured kernels
//!
//! ```text
//! CpuScheduler
//! └── splits Window into disjoint parts
//!       └── CpuKernel::try_run(part, ThreadInfo)   (one call per part)
//! ```

pub mod cpu;

pub use cpu::{CpuKernel, CpuScheduler, ThreadInfo};
