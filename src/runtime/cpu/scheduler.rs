//! Window-splitting CPU scheduler

use crate::error::Result;
use crate::window::{DIM_X, MAX_DIMS, Window};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Identity of one run of a kernel among its concurrent siblings
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ThreadInfo {
    /// Zero-based id of this part
    pub thread_id: usize,
    /// Number of parts the window was split into
    pub num_threads: usize,
}

impl ThreadInfo {
    /// Create thread info for part `thread_id` of `num_threads`
    pub const fn new(thread_id: usize, num_threads: usize) -> Self {
        Self {
            thread_id,
            num_threads,
        }
    }
}

impl Default for ThreadInfo {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

/// A configured CPU kernel that can run over sub-windows of its window.
///
/// # Safety
///
/// Implementors guarantee that runs over sub-windows of [`CpuKernel::window`]
/// that span its full dimension 0 and are disjoint in some dimension above 0
/// write disjoint memory and only read memory no run writes, so they may
/// execute concurrently from different threads. [`CpuScheduler`] only hands
/// out such sub-windows.
pub unsafe trait CpuKernel {
    /// Kernel name used in logs
    fn name(&self) -> &'static str;

    /// Maximum execution window, `None` while unconfigured
    fn window(&self) -> Option<&Window>;

    /// Execute over `window`, a sub-window of [`CpuKernel::window`]
    fn try_run(&self, window: &Window, info: &ThreadInfo) -> Result<()>;
}

/// Runs a [`CpuKernel`] over its whole window, split across threads.
///
/// The window is split along the dimension (other than dimension 0) with the
/// most iterations. Without the `rayon` feature the parts run in order on the
/// calling thread.
#[derive(Clone, Debug)]
pub struct CpuScheduler {
    num_threads: usize,
}

impl CpuScheduler {
    /// Scheduler using the global thread pool's size
    pub fn new() -> Self {
        #[cfg(feature = "rayon")]
        let num_threads = rayon::current_num_threads();
        #[cfg(not(feature = "rayon"))]
        let num_threads = 1;
        Self::with_threads(num_threads)
    }

    /// Scheduler splitting work into at most `num_threads` parts
    pub fn with_threads(num_threads: usize) -> Self {
        Self {
            num_threads: num_threads.max(1),
        }
    }

    /// Maximum number of parts
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Run `kernel` over its configured window.
    ///
    /// Returns the first error reported by any part.
    pub fn schedule<K: CpuKernel>(&self, kernel: &K) -> Result<()> {
        let Some(&window) = kernel.window() else {
            return Err(crate::error::Error::NotConfigured {
                kernel: kernel.name(),
            });
        };

        let (split_dim, iterations) = split_dimension(&window);
        let parts = self.num_threads.min(iterations).max(1);
        tracing::debug!(
            kernel = kernel.name(),
            parts,
            split_dim,
            total = window.num_iterations_total(),
            "scheduling"
        );

        if parts == 1 {
            return kernel.try_run(&window, &ThreadInfo::default());
        }

        let shared = SharedKernel(kernel);
        let run_part = |id: usize| {
            let part = window.split_window(split_dim, id, parts);
            shared.kernel().try_run(&part, &ThreadInfo::new(id, parts))
        };

        #[cfg(feature = "rayon")]
        let result = (0..parts).into_par_iter().try_for_each(run_part);
        #[cfg(not(feature = "rayon"))]
        let result = (0..parts).try_for_each(run_part);

        result
    }
}

impl Default for CpuScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the dimension to split: the one above dimension 0 with most iterations.
///
/// Ties go to the lower dimension. Returns `(DIM_X + 1, 1)` when nothing above
/// dimension 0 can be split.
fn split_dimension(window: &Window) -> (usize, usize) {
    (DIM_X + 1..MAX_DIMS)
        .map(|d| (d, window.num_iterations(d)))
        .fold((DIM_X + 1, 1), |best, cur| if cur.1 > best.1 { cur } else { best })
}

/// Shares a kernel reference across the thread pool.
struct SharedKernel<'k, K>(&'k K);

// SAFETY: parts come from `split_window` on a dimension above 0, so they keep
// the full dimension 0 and are disjoint, which is what `CpuKernel` requires.
unsafe impl<K: CpuKernel> Sync for SharedKernel<'_, K> {}

impl<'k, K> SharedKernel<'k, K> {
    fn kernel(&self) -> &'k K {
        self.0
    }
}
