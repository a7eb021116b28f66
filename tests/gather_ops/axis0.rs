//! Gather along axis 0

use crate::common::{assert_meta, iota_tensor, reference_gather};
use numr_gather::dtype::DType;
use numr_gather::ops::gather;
use numr_gather::tensor::Tensor;

#[test]
fn test_gather_1d() {
    let input = Tensor::from_slice(&[10.0f32, 20.0, 30.0, 40.0], &[4]);
    let indices = Tensor::from_slice(&[3u32, 0, 0, 2], &[4]);

    let out = gather(&input, &indices, 0).unwrap();

    assert_meta(&out, &[4], DType::F32);
    assert_eq!(out.to_vec::<f32>(), [40.0, 10.0, 10.0, 30.0]);
}

#[test]
fn test_gather_signed_indices() {
    let input = Tensor::from_slice(&[1u8, 2, 3, 4], &[4]);
    let indices = Tensor::from_slice(&[1i32, 1, 3], &[3]);

    let out = gather(&input, &indices, 0).unwrap();

    assert_meta(&out, &[3], DType::U8);
    assert_eq!(out.to_vec::<u8>(), [2, 2, 4]);
}

#[test]
fn test_gather_columns_of_matrix() {
    // Three rows of four; pick columns 3 and 1 from every row.
    let input = iota_tensor::<i16>(&[4, 3]);
    let indices = Tensor::from_slice(&[3u32, 1], &[2]);

    let out = gather(&input, &indices, 0).unwrap();

    assert_meta(&out, &[2, 3], DType::I16);
    assert_eq!(out.to_vec::<i16>(), [3, 1, 7, 5, 11, 9]);
}

#[test]
fn test_identity_round_trip() {
    let input = iota_tensor::<f32>(&[5, 2, 3]);
    let indices = Tensor::from_slice(&[0u32, 1, 2, 3, 4], &[5]);

    let out = gather(&input, &indices, 0).unwrap();

    assert_eq!(out.shape(), input.shape());
    assert_eq!(out.to_vec::<f32>(), input.to_vec::<f32>());
}

#[test]
fn test_matches_reference_4d() {
    let input = iota_tensor::<u16>(&[6, 2, 3, 2]);
    let idx = [5u32, 0, 2, 2, 1];
    let indices = Tensor::from_slice(&idx, &[5]);

    let out = gather(&input, &indices, 0).unwrap();

    assert_eq!(out.shape(), &[5, 2, 3, 2]);
    assert_eq!(out.to_vec::<u16>(), reference_gather::<u16>(&input, &idx, &[5], 0));
}

#[test]
fn test_empty_indices() {
    let input = Tensor::from_slice(&[1.0f32, 2.0], &[2]);
    let indices = Tensor::from_slice::<u32>(&[], &[0]);

    let out = gather(&input, &indices, 0).unwrap();

    assert_eq!(out.shape(), &[0]);
    assert!(out.to_vec::<f32>().is_empty());
}

#[cfg(feature = "f16")]
#[test]
fn test_gather_half() {
    use half::bf16;

    let data: Vec<bf16> = [0.5f32, 1.5, 2.5].iter().map(|&v| bf16::from_f32(v)).collect();
    let input = Tensor::from_slice(&data, &[3]);
    let indices = Tensor::from_slice(&[2u32, 0], &[2]);

    let out = gather(&input, &indices, 0).unwrap();

    assert_meta(&out, &[2], DType::BF16);
    assert_eq!(out.to_vec::<bf16>(), [bf16::from_f32(2.5), bf16::from_f32(0.5)]);
}
