//! Core Tensor type

use super::{Shape, Storage, TensorInfo};
use crate::dtype::{DType, Element, QuantizationInfo};
use crate::error::{Error, Result};
use crate::window::{Coordinates, MAX_DIMS};
use std::fmt;

/// Dense host tensor: a [`TensorInfo`] descriptor plus the bytes it describes.
///
/// Elements are laid out with dimension 0 innermost. A tensor created with
/// [`Tensor::empty`] has no shape and no memory; kernels that produce it
/// initialise it during configuration.
///
/// # Example
///
/// ```
/// use numr_gather::tensor::Tensor;
///
/// // Three rows of two elements each.
/// let t = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
/// assert_eq!(t.shape(), &[2, 3]);
/// assert_eq!(t.to_vec::<f32>()[2], 3.0);
/// ```
pub struct Tensor {
    info: TensorInfo,
    storage: Storage,
}

impl Tensor {
    /// Allocate a zero-filled tensor for a descriptor
    pub fn new(info: TensorInfo) -> Self {
        let storage = Storage::zeroed(info.total_size());
        Self { info, storage }
    }

    /// Create a zero-filled tensor
    pub fn zeros(shape: &[usize], dtype: DType) -> Self {
        Self::new(TensorInfo::new(shape, dtype))
    }

    /// Create an unsized, untyped tensor to be initialised by a kernel
    pub fn empty() -> Self {
        Self {
            info: TensorInfo::default(),
            storage: Storage::empty(),
        }
    }

    /// Create a tensor from a slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal the product of the `shape` dimensions.
    /// For a fallible alternative, use [`Self::try_from_slice`].
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize]) -> Self {
        match Self::try_from_slice(data, shape) {
            Ok(tensor) => tensor,
            Err(e) => panic!("Tensor::from_slice failed: {e}"),
        }
    }

    /// Create a tensor from a slice of data (fallible version)
    ///
    /// Returns an error if `data.len()` does not equal the product of the
    /// `shape` dimensions or the rank exceeds `MAX_DIMS`.
    pub fn try_from_slice<T: Element>(data: &[T], shape: &[usize]) -> Result<Self> {
        if shape.len() > MAX_DIMS {
            return Err(Error::invalid_argument(
                "shape",
                format!("rank {} exceeds {MAX_DIMS}", shape.len()),
            ));
        }
        let expected_len: usize = shape.iter().product();
        if data.len() != expected_len {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }

        Ok(Self {
            info: TensorInfo::new(shape, T::DTYPE),
            storage: Storage::from_bytes(bytemuck::cast_slice(data)),
        })
    }

    /// Create a quantized tensor from a slice of data
    pub fn try_from_slice_with_quantization<T: Element>(
        data: &[T],
        shape: &[usize],
        quantization: QuantizationInfo,
    ) -> Result<Self> {
        let mut tensor = Self::try_from_slice(data, shape)?;
        tensor.info = tensor.info.with_quantization(quantization);
        Ok(tensor)
    }

    // ===== Accessors =====

    /// Get the descriptor
    #[inline]
    pub fn info(&self) -> &TensorInfo {
        &self.info
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.info.tensor_shape()
    }

    /// Get the element type, `None` for an uninitialised tensor
    #[inline]
    pub fn dtype(&self) -> Option<DType> {
        self.info.data_type()
    }

    /// Total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.info.num_elements()
    }

    // ===== Data Access =====

    /// Copy tensor data to a Vec
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match the tensor's element type.
    pub fn to_vec<T: Element>(&self) -> Vec<T> {
        assert_eq!(
            self.dtype(),
            Some(T::DTYPE),
            "Tensor::to_vec called with mismatched element type"
        );
        let mut result = vec![T::zeroed(); self.numel()];
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut result);
        bytes.copy_from_slice(&self.storage.as_bytes()[..bytes.len()]);
        result
    }

    /// Read one element
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match the element type or `id` lies past the buffer.
    pub fn get<T: Element>(&self, id: &Coordinates) -> T {
        assert_eq!(self.dtype(), Some(T::DTYPE), "Tensor::get with mismatched element type");
        match self.element_bytes(id, 1) {
            Ok(bytes) => bytemuck::pod_read_unaligned(bytes),
            Err(e) => panic!("Tensor::get failed: {e}"),
        }
    }

    /// Bytes of `count` consecutive elements starting at `id`.
    ///
    /// The coordinate is linearised without per-dimension bounds checks; only
    /// the end of the buffer is enforced, as `Error::IndexOutOfBounds` over
    /// element positions.
    #[inline]
    pub(crate) fn element_bytes(&self, id: &Coordinates, count: usize) -> Result<&[u8]> {
        let offset = self.info.offset_element_in_bytes(id);
        let len = count * self.info.element_size();
        self.storage
            .as_bytes()
            .get(offset..offset + len)
            .ok_or_else(|| Error::IndexOutOfBounds {
                index: self.info.tensor_shape().element_index(id) + count.saturating_sub(1),
                size: self.numel(),
            })
    }

    /// Copy raw element bytes to the position `id`.
    ///
    /// # Safety
    /// No other thread may concurrently access the written bytes, and no
    /// slice obtained from this tensor may be alive.
    #[inline]
    pub(crate) unsafe fn write_element_bytes(&self, id: &Coordinates, src: &[u8]) {
        let offset = self.info.offset_element_in_bytes(id);
        // SAFETY: forwarded from the caller.
        unsafe { self.storage.write_at(offset, src) };
    }

    /// Initialise an empty tensor from a descriptor, allocating its memory.
    ///
    /// Returns false (and changes nothing) if the tensor is already sized.
    pub fn auto_init_if_empty(&mut self, template: TensorInfo) -> bool {
        if !self.info.auto_init_if_empty(template) {
            return false;
        }
        self.storage = Storage::zeroed(self.info.total_size());
        true
    }

    /// Re-describe the tensor with another shape of the same element count.
    pub(crate) fn set_shape(&mut self, shape: Shape) {
        self.info.set_tensor_shape(shape);
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("dtype", &self.dtype())
            .field("bytes", &self.storage.len())
            .finish()
    }
}
