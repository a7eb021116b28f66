//! Configurable gather kernel

use super::algorithms::{
    GatherFn, GatherOperands, gather_0_axis, gather_multi_indices_1_axis, gather_n_axis,
};
use super::indices::{IndexType, check_indices};
use super::options::{GatherOptions, IndexBounds};
use super::shape::compute_gather_shape;
use super::validate::validate_arguments;
use crate::error::{Error, Result};
use crate::runtime::{CpuKernel, ThreadInfo};
use crate::tensor::{Tensor, TensorInfo};
use crate::window::{DIM_X, Window};

/// Addressing strategy chosen at configuration time
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GatherAlgorithm {
    /// Rank-1 indices along axis 0, one element per output coordinate
    Axis0,
    /// Rank-1 indices along any other axis, one row per output coordinate
    NAxis,
    /// Rank-2 or rank-3 indices along axis 1
    MultiIndexAxis1,
}

impl GatherAlgorithm {
    /// Pick the algorithm for an index rank and a normalised axis
    pub fn select(index_rank: usize, axis: usize) -> Result<Self> {
        match (axis, index_rank) {
            (0, 1) => Ok(Self::Axis0),
            (_, 1) => Ok(Self::NAxis),
            (1, 2..=3) => Ok(Self::MultiIndexAxis1),
            _ => Err(Error::NotImplemented {
                feature: "gather with multi-dimensional indices outside axis 1",
            }),
        }
    }
}

const fn select_fn(algorithm: GatherAlgorithm, index_type: IndexType) -> GatherFn {
    match (algorithm, index_type) {
        (GatherAlgorithm::Axis0, IndexType::U32) => gather_0_axis::<u32>,
        (GatherAlgorithm::Axis0, IndexType::S32) => gather_0_axis::<i32>,
        (GatherAlgorithm::NAxis, IndexType::U32) => gather_n_axis::<u32>,
        (GatherAlgorithm::NAxis, IndexType::S32) => gather_n_axis::<i32>,
        (GatherAlgorithm::MultiIndexAxis1, IndexType::U32) => gather_multi_indices_1_axis::<u32>,
        (GatherAlgorithm::MultiIndexAxis1, IndexType::S32) => gather_multi_indices_1_axis::<i32>,
    }
}

struct Configured<'a> {
    operands: GatherOperands<'a>,
    window: Window,
    algorithm: GatherAlgorithm,
    index_type: IndexType,
    func: GatherFn,
}

/// Gather kernel: copies slices of `input` selected by `indices` along one axis.
///
/// The kernel is configured once with its tensors and then run over any
/// sub-window of [`GatherKernel::window`]. Runs over disjoint sub-windows may
/// execute concurrently (see [`CpuScheduler`](crate::runtime::CpuScheduler)).
///
/// # Example
///
/// ```
/// use numr_gather::ops::GatherKernel;
/// use numr_gather::runtime::CpuScheduler;
/// use numr_gather::tensor::Tensor;
///
/// let input = Tensor::from_slice(&[10.0f32, 20.0, 30.0, 40.0], &[4]);
/// let indices = Tensor::from_slice(&[3u32, 0, 0, 2], &[4]);
/// let mut output = Tensor::empty();
///
/// let mut kernel = GatherKernel::new();
/// kernel.configure(&input, &indices, &mut output, 0);
/// CpuScheduler::new().schedule(&kernel).unwrap();
/// drop(kernel);
///
/// assert_eq!(output.to_vec::<f32>(), [40.0, 10.0, 10.0, 30.0]);
/// ```
pub struct GatherKernel<'a> {
    options: GatherOptions,
    state: Option<Configured<'a>>,
}

impl<'a> GatherKernel<'a> {
    /// Unconfigured kernel with default options
    pub fn new() -> Self {
        Self::with_options(GatherOptions::default())
    }

    /// Unconfigured kernel with explicit options
    pub fn with_options(options: GatherOptions) -> Self {
        Self {
            options,
            state: None,
        }
    }

    /// Check whether a gather with these descriptors would be accepted.
    ///
    /// `output` may be empty, in which case only the input and index
    /// descriptors are checked. A sized `output` must match the input's
    /// element type and quantization and have as many elements as the
    /// computed output shape.
    pub fn validate(
        input: Option<&TensorInfo>,
        indices: Option<&TensorInfo>,
        output: Option<&TensorInfo>,
        axis: isize,
    ) -> Result<()> {
        validate_arguments(input, indices, output, axis).map(|_| ())
    }

    /// Configure the kernel, initialising `output` if it is empty.
    ///
    /// A negative `axis` counts from the last input dimension. A sized output
    /// with the right element count but another shape is re-described with
    /// the computed shape.
    pub fn try_configure(
        &mut self,
        input: &'a Tensor,
        indices: &'a Tensor,
        output: &'a mut Tensor,
        axis: isize,
    ) -> Result<()> {
        let axis = validate_arguments(
            Some(input.info()),
            Some(indices.info()),
            Some(output.info()),
            axis,
        )?;

        let out_shape = compute_gather_shape(input.shape(), indices.shape(), axis);
        output.auto_init_if_empty(input.info().clone_with_shape(out_shape.clone()));
        if output.shape() != out_shape.as_slice() {
            output.set_shape(out_shape);
        }

        let index_type = indices
            .dtype()
            .and_then(IndexType::from_dtype)
            .ok_or_else(|| Error::Internal("index type not resolved after validation".into()))?;
        let algorithm = GatherAlgorithm::select(indices.info().num_dimensions(), axis)?;
        let window = Window::from_shape(output.shape());

        tracing::debug!(
            ?algorithm,
            ?index_type,
            axis,
            input = ?input.shape(),
            indices = ?indices.shape(),
            output = ?output.shape(),
            "configured gather"
        );

        let output: &'a Tensor = output;
        self.state = Some(Configured {
            operands: GatherOperands {
                input,
                indices,
                output,
                axis,
            },
            window,
            algorithm,
            index_type,
            func: select_fn(algorithm, index_type),
        });
        Ok(())
    }

    /// Configure the kernel.
    ///
    /// # Panics
    ///
    /// Panics if the arguments are rejected. For a fallible alternative, use
    /// [`Self::try_configure`].
    pub fn configure(
        &mut self,
        input: &'a Tensor,
        indices: &'a Tensor,
        output: &'a mut Tensor,
        axis: isize,
    ) {
        if let Err(e) = self.try_configure(input, indices, output, axis) {
            panic!("GatherKernel::configure failed: {e}");
        }
    }

    /// Execute the gather over `window`.
    ///
    /// The index tensor is scanned first: any negative index fails the run
    /// before anything is written. Under [`IndexBounds::Strict`] an index past
    /// the gathered dimension fails the run as well. Under
    /// [`IndexBounds::Unchecked`] an index whose row or element lies past the
    /// end of the input fails with [`Error::IndexOutOfBounds`] when it is
    /// reached; coordinates visited before it have already been written.
    ///
    /// The row algorithms copy whole rows, so for them `window` must keep the
    /// configured dimension 0.
    pub fn try_run(&self, window: &Window, info: &ThreadInfo) -> Result<()> {
        let state = self.state.as_ref().ok_or(Error::NotConfigured {
            kernel: "GatherKernel",
        })?;
        window.check_within(&state.window)?;
        if state.algorithm != GatherAlgorithm::Axis0 {
            let (inner, full) = (window.dimension(DIM_X), state.window.dimension(DIM_X));
            if inner != full {
                return Err(Error::WindowOutOfRange {
                    dim: DIM_X,
                    start: inner.start(),
                    end: inner.end(),
                    max_start: full.start(),
                    max_end: full.end(),
                });
            }
        }

        tracing::trace!(
            thread = info.thread_id,
            of = info.num_threads,
            iterations = window.num_iterations_total(),
            "gather run"
        );

        let ops = &state.operands;
        let limit = match self.options.index_bounds {
            IndexBounds::Unchecked => None,
            IndexBounds::Strict => Some(ops.input.info().dimension(ops.axis)),
        };
        check_indices(ops.indices, state.index_type, limit)?;

        (state.func)(ops, window)
    }

    /// Execute the gather over `window`.
    ///
    /// # Panics
    ///
    /// Panics on any error [`Self::try_run`] would return, including a
    /// negative index.
    pub fn run(&self, window: &Window, info: &ThreadInfo) {
        if let Err(e) = self.try_run(window, info) {
            panic!("GatherKernel::run failed: {e}");
        }
    }

    /// Options the kernel was created with
    pub fn options(&self) -> &GatherOptions {
        &self.options
    }

    /// True once configuration succeeded
    pub fn is_configured(&self) -> bool {
        self.state.is_some()
    }

    /// Selected algorithm
    pub fn algorithm(&self) -> Option<GatherAlgorithm> {
        self.state.as_ref().map(|s| s.algorithm)
    }

    /// Selected index interpretation
    pub fn index_type(&self) -> Option<IndexType> {
        self.state.as_ref().map(|s| s.index_type)
    }

    /// Normalised gather axis
    pub fn axis(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.operands.axis)
    }

    /// Maximal execution window, the full output shape
    pub fn window(&self) -> Option<&Window> {
        self.state.as_ref().map(|s| &s.window)
    }
}

impl Default for GatherKernel<'_> {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY: the axis-0 algorithm writes exactly the elements of its window. The
// row algorithms write whole rows for the coordinates above dimension 0, and
// `try_run` rejects windows that do not span dimension 0, so windows disjoint
// above dimension 0 write disjoint bytes. Input and indices are never written.
unsafe impl CpuKernel for GatherKernel<'_> {
    fn name(&self) -> &'static str {
        "GatherKernel"
    }

    fn window(&self) -> Option<&Window> {
        GatherKernel::window(self)
    }

    fn try_run(&self, window: &Window, info: &ThreadInfo) -> Result<()> {
        GatherKernel::try_run(self, window, info)
    }
}
