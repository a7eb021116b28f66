//! Row gather along axes above 0

use crate::common::{assert_meta, iota_tensor, reference_gather, scrambled_indices};
use numr_gather::dtype::DType;
use numr_gather::ops::{GatherAlgorithm, GatherKernel, gather};
use numr_gather::tensor::Tensor;

#[test]
fn test_gather_rows() {
    // Three rows of two: [1, 2], [3, 4], [5, 6].
    let input = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
    let indices = Tensor::from_slice(&[2u32, 0], &[2]);

    let out = gather(&input, &indices, 1).unwrap();

    assert_meta(&out, &[2, 2], DType::F32);
    assert_eq!(out.to_vec::<f32>(), [5.0, 6.0, 1.0, 2.0]);
}

#[test]
fn test_negative_axis_equals_last() {
    let input = iota_tensor::<f32>(&[2, 3, 4]);
    let indices = Tensor::from_slice(&[3i32, 1, 1], &[3]);

    let neg = gather(&input, &indices, -1).unwrap();
    let pos = gather(&input, &indices, 2).unwrap();

    assert_eq!(neg.shape(), &[2, 3, 3]);
    assert_eq!(neg.shape(), pos.shape());
    assert_eq!(neg.to_vec::<f32>(), pos.to_vec::<f32>());
}

#[test]
fn test_selects_n_axis_algorithm() {
    let input = iota_tensor::<u8>(&[2, 3, 4]);
    let indices = Tensor::from_slice(&[0u32], &[1]);
    let mut output = Tensor::empty();

    let mut kernel = GatherKernel::new();
    kernel.configure(&input, &indices, &mut output, 2);
    assert_eq!(kernel.algorithm(), Some(GatherAlgorithm::NAxis));
}

#[test]
fn test_matches_reference_each_axis() {
    let shape = [3, 4, 5, 2];
    let input = iota_tensor::<i32>(&shape);

    for axis in 1..shape.len() {
        let idx = scrambled_indices(6, shape[axis]);
        let indices = Tensor::from_slice(&idx, &[idx.len()]);

        let out = gather(&input, &indices, axis as isize).unwrap();

        let mut expected_shape = shape.to_vec();
        expected_shape[axis] = idx.len();
        assert_eq!(out.shape(), expected_shape.as_slice(), "axis {axis}");
        assert_eq!(
            out.to_vec::<i32>(),
            reference_gather::<i32>(&input, &idx, &[idx.len()], axis),
            "axis {axis}"
        );
    }
}

#[test]
fn test_row_length_one() {
    let input = Tensor::from_slice(&[7u16, 8, 9], &[1, 3]);
    let indices = Tensor::from_slice(&[1u32, 2, 1, 0], &[4]);

    let out = gather(&input, &indices, 1).unwrap();

    assert_meta(&out, &[1, 4], DType::U16);
    assert_eq!(out.to_vec::<u16>(), [8, 9, 8, 7]);
}

#[test]
fn test_identity_indices_every_axis() {
    let shape = [3, 4, 2, 5];
    let input = iota_tensor::<f32>(&shape);

    for axis in 1..shape.len() {
        let identity: Vec<u32> = (0..shape[axis] as u32).collect();
        let indices = Tensor::from_slice(&identity, &[shape[axis]]);

        let out = gather(&input, &indices, axis as isize).unwrap();

        assert_eq!(out.shape(), &shape, "axis {axis}");
        assert_eq!(out.to_vec::<f32>(), input.to_vec::<f32>(), "axis {axis}");
    }
}
