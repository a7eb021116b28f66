//! TensorInfo: the descriptor half of a tensor

use super::shape::Shape;
use crate::dtype::{DType, QuantizationInfo};
use crate::window::{Coordinates, MAX_DIMS};

/// Describes a tensor without owning its memory: shape, element type and
/// quantization metadata.
///
/// A descriptor with no dimensions or no data type is *empty*
/// (`total_size() == 0`); kernels are allowed to initialise such a
/// descriptor from the shape they compute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TensorInfo {
    shape: Shape,
    dtype: Option<DType>,
    quantization: QuantizationInfo,
}

impl TensorInfo {
    /// Create a descriptor for a dense tensor
    ///
    /// # Panics
    /// If `shape` has more than `MAX_DIMS` dimensions.
    pub fn new(shape: impl Into<Shape>, dtype: DType) -> Self {
        let shape = shape.into();
        assert!(
            shape.ndim() <= MAX_DIMS,
            "tensor rank {} exceeds {MAX_DIMS}",
            shape.ndim()
        );
        Self {
            shape,
            dtype: Some(dtype),
            quantization: QuantizationInfo::default(),
        }
    }

    /// Create a descriptor with a shape but no known element type
    pub fn untyped(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            dtype: None,
            quantization: QuantizationInfo::default(),
        }
    }

    /// Attach quantization metadata
    pub fn with_quantization(mut self, quantization: QuantizationInfo) -> Self {
        self.quantization = quantization;
        self
    }

    /// Copy of this descriptor with a different shape
    pub fn clone_with_shape(&self, shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            dtype: self.dtype,
            quantization: self.quantization.clone(),
        }
    }

    /// Get the shape
    #[inline]
    pub fn tensor_shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn num_dimensions(&self) -> usize {
        self.shape.ndim()
    }

    /// Extent of one dimension; dimensions past the rank have extent 1
    #[inline]
    pub fn dimension(&self, dim: usize) -> usize {
        self.shape.get(dim).copied().unwrap_or(1)
    }

    /// Element type, `None` while unset
    #[inline]
    pub fn data_type(&self) -> Option<DType> {
        self.dtype
    }

    /// Quantization metadata
    #[inline]
    pub fn quantization_info(&self) -> &QuantizationInfo {
        &self.quantization
    }

    /// Size of one element in bytes (0 while the type is unset)
    #[inline]
    pub fn element_size(&self) -> usize {
        self.dtype.map_or(0, DType::size_in_bytes)
    }

    /// Total number of elements
    #[inline]
    pub fn num_elements(&self) -> usize {
        self.shape.num_elements()
    }

    /// Total size in bytes
    #[inline]
    pub fn total_size(&self) -> usize {
        self.num_elements() * self.element_size()
    }

    /// True when the descriptor has not been sized yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_size() == 0
    }

    /// Byte offset of the element at `id`
    #[inline]
    pub fn offset_element_in_bytes(&self, id: &Coordinates) -> usize {
        self.shape.element_index(id) * self.element_size()
    }

    /// Replace this descriptor with `template` if it is still empty.
    ///
    /// Returns true when the descriptor was initialised.
    pub fn auto_init_if_empty(&mut self, template: TensorInfo) -> bool {
        if self.is_empty() {
            *self = template;
            true
        } else {
            false
        }
    }

    /// Re-describe the same bytes with another shape of equal element count
    pub(crate) fn set_tensor_shape(&mut self, shape: Shape) {
        debug_assert_eq!(shape.num_elements(), self.num_elements());
        self.shape = shape;
    }
}
