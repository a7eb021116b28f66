//! Gather along axis 1 with rank-2 and rank-3 indices

use crate::common::{iota_tensor, reference_gather, scrambled_indices};
use numr_gather::ops::{GatherAlgorithm, GatherKernel, gather};
use numr_gather::tensor::Tensor;

#[test]
fn test_nested_matches_flat() {
    let input = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
    let flat = Tensor::from_slice(&[2u32, 0], &[2]);
    let nested = Tensor::from_slice(&[2u32, 0], &[1, 2]);

    let a = gather(&input, &flat, 1).unwrap();
    let b = gather(&input, &nested, 1).unwrap();

    assert_eq!(b.shape(), &[2, 1, 2]);
    assert_eq!(a.to_vec::<f32>(), b.to_vec::<f32>());
}

#[test]
fn test_selects_multi_index_algorithm() {
    let input = iota_tensor::<f32>(&[2, 3]);
    let indices = Tensor::from_slice(&[0u32, 1, 2, 0], &[2, 2]);
    let mut output = Tensor::empty();

    let mut kernel = GatherKernel::new();
    kernel.configure(&input, &indices, &mut output, 1);
    assert_eq!(kernel.algorithm(), Some(GatherAlgorithm::MultiIndexAxis1));
    assert_eq!(kernel.axis(), Some(1));
}

#[test]
fn test_rank2_indices_3d_input() {
    let input = iota_tensor::<u8>(&[2, 4, 3]);
    let idx = scrambled_indices(6, 4);
    let indices = Tensor::from_slice(&idx, &[2, 3]);

    let out = gather(&input, &indices, 1).unwrap();

    assert_eq!(out.shape(), &[2, 2, 3, 3]);
    assert_eq!(out.to_vec::<u8>(), reference_gather::<u8>(&input, &idx, &[2, 3], 1));
}

#[test]
fn test_rank3_indices_4d_input() {
    let input = iota_tensor::<i16>(&[3, 5, 2, 2]);
    let idx = scrambled_indices(12, 5);
    let indices = Tensor::from_slice(&idx, &[2, 3, 2]);

    let out = gather(&input, &indices, 1).unwrap();

    assert_eq!(out.shape(), &[3, 2, 3, 2, 2, 2]);
    assert_eq!(out.to_vec::<i16>(), reference_gather::<i16>(&input, &idx, &[2, 3, 2], 1));
}

#[test]
fn test_signed_rank2_indices() {
    let input = Tensor::from_slice(&[1i32, 2, 3, 4, 5, 6], &[2, 3]);
    let indices = Tensor::from_slice(&[1i32, 1, 0, 2], &[2, 2]);

    let out = gather(&input, &indices, 1).unwrap();

    assert_eq!(out.shape(), &[2, 2, 2]);
    assert_eq!(out.to_vec::<i32>(), [3, 4, 3, 4, 1, 2, 5, 6]);
}

#[test]
fn test_identity_nested_indices() {
    let input = iota_tensor::<i16>(&[3, 4, 2]);
    let identity: Vec<u32> = (0..4).collect();

    let rank2 = Tensor::from_slice(&identity, &[1, 4]);
    let out = gather(&input, &rank2, 1).unwrap();
    assert_eq!(out.shape(), &[3, 1, 4, 2]);
    assert_eq!(out.to_vec::<i16>(), input.to_vec::<i16>());

    let rank3 = Tensor::from_slice(&identity, &[1, 1, 4]);
    let out = gather(&input, &rank3, 1).unwrap();
    assert_eq!(out.shape(), &[3, 1, 1, 4, 2]);
    assert_eq!(out.to_vec::<i16>(), input.to_vec::<i16>());
}
