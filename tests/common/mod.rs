//! Common test utilities
#![allow(dead_code)]

use numr_gather::dtype::{DType, Element};
use numr_gather::reference::{self, SimpleTensor};
use numr_gather::tensor::Tensor;

/// Deterministic data: `0, 1, 2, ...` converted to `T`
pub fn iota<T: Element>(n: usize) -> Vec<T> {
    (0..n).map(|i| T::from_f64((i % 251) as f64)).collect()
}

/// Deterministic indices in `0..bound`, scrambled so neighbours differ
pub fn scrambled_indices(n: usize, bound: usize) -> Vec<u32> {
    (0..n).map(|i| ((i * 7 + 3) % bound) as u32).collect()
}

/// Tensor of `shape` holding `iota` data
pub fn iota_tensor<T: Element>(shape: &[usize]) -> Tensor {
    Tensor::from_slice(&iota::<T>(shape.iter().product()), shape)
}

/// Run the reference gather on the same data as a kernel input
pub fn reference_gather<T: Element>(input: &Tensor, indices: &[u32], index_shape: &[usize], axis: usize) -> Vec<T> {
    let src = SimpleTensor::from_vec(input.to_vec::<T>(), input.shape()).unwrap();
    let idx = SimpleTensor::from_vec(indices.to_vec(), index_shape).unwrap();
    reference::gather(&src, &idx, axis).unwrap().data().to_vec()
}

/// Assert shape and dtype of a gather result
pub fn assert_meta(t: &Tensor, shape: &[usize], dtype: DType) {
    assert_eq!(t.shape(), shape, "shape");
    assert_eq!(t.dtype(), Some(dtype), "dtype");
}
