//! Error types for numr-gather

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using numr-gather's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating, configuring or running a gather
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Invalid dimension index
    #[error("Invalid dimension {dim} for tensor with {ndim} dimensions")]
    InvalidDimension {
        /// The invalid dimension
        dim: isize,
        /// Number of dimensions
        ndim: usize,
    },

    /// Unsupported dtype for an operation
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// DType mismatch between operands
    #[error("DType mismatch: {lhs:?} vs {rhs:?}")]
    DTypeMismatch {
        /// Left-hand side dtype
        lhs: Option<DType>,
        /// Right-hand side dtype
        rhs: Option<DType>,
    },

    /// Quantization metadata differs between operands
    #[error("Quantization info mismatch between '{lhs}' and '{rhs}'")]
    QuantizationMismatch {
        /// Left-hand side operand name
        lhs: &'static str,
        /// Right-hand side operand name
        rhs: &'static str,
    },

    /// A required tensor descriptor was not provided
    #[error("Missing tensor '{arg}'")]
    MissingTensor {
        /// The argument name
        arg: &'static str,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A negative value was found in an index tensor
    #[error("Negative index {value} at position {position:?}")]
    NegativeIndex {
        /// The offending value
        value: i64,
        /// Coordinates of the value inside the index tensor
        position: Vec<usize>,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Kernel used before a successful configure
    #[error("Kernel '{kernel}' is not configured")]
    NotConfigured {
        /// The kernel name
        kernel: &'static str,
    },

    /// Execution window reaches outside the configured window
    #[error("Window dimension {dim} [{start}, {end}) exceeds configured range [{max_start}, {max_end})")]
    WindowOutOfRange {
        /// Offending dimension
        dim: usize,
        /// Requested start
        start: usize,
        /// Requested end
        end: usize,
        /// Configured start
        max_start: usize,
        /// Configured end
        max_end: usize,
    },

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Feature not yet implemented
    #[error("Not implemented: {feature}")]
    NotImplemented {
        /// Description of the unimplemented feature
        feature: &'static str,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
