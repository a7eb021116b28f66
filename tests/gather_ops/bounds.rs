//! Negative indices and the index bounds policies

use numr_gather::error::Error;
use numr_gather::ops::{GatherKernel, GatherOptions, IndexBounds, gather, gather_with_options};
use numr_gather::runtime::ThreadInfo;
use numr_gather::tensor::Tensor;
use numr_gather::window::Dimension;

#[test]
fn test_negative_index_is_error() {
    let input = Tensor::from_slice(&[1.0f32, 2.0, 3.0], &[3]);
    let indices = Tensor::from_slice(&[0i32, -2, 1], &[3]);

    let err = gather(&input, &indices, 0).unwrap_err();
    assert_eq!(
        err,
        Error::NegativeIndex {
            value: -2,
            position: vec![1]
        }
    );
}

#[test]
fn test_negative_index_leaves_output_untouched() {
    let input = Tensor::from_slice(&[1u8, 2, 3, 4, 5, 6], &[2, 3]);
    let indices = Tensor::from_slice(&[2i32, -1], &[2]);
    let mut output = Tensor::empty();

    {
        let mut kernel = GatherKernel::new();
        kernel.configure(&input, &indices, &mut output, 1);
        let window = *kernel.window().unwrap();
        assert!(kernel.try_run(&window, &ThreadInfo::default()).is_err());
    }

    assert_eq!(output.to_vec::<u8>(), [0, 0, 0, 0]);
}

#[test]
#[should_panic(expected = "Negative index -7")]
fn test_run_panics_on_negative_index() {
    let input = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2]);
    let indices = Tensor::from_slice(&[-7i32], &[1]);
    let mut output = Tensor::empty();

    let mut kernel = GatherKernel::new();
    kernel.configure(&input, &indices, &mut output, 1);
    let window = *kernel.window().unwrap();
    kernel.run(&window, &ThreadInfo::default());
}

#[test]
fn test_strict_rejects_index_at_extent() {
    let input = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
    let indices = Tensor::from_slice(&[0u32, 3], &[2]);

    let err = gather_with_options(&input, &indices, 1, GatherOptions::strict()).unwrap_err();
    assert_eq!(err, Error::IndexOutOfBounds { index: 3, size: 3 });
}

#[test]
fn test_strict_accepts_in_range() {
    let input = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
    let indices = Tensor::from_slice(&[2u32, 1], &[2]);

    let out = gather_with_options(&input, &indices, 1, GatherOptions::strict()).unwrap();
    assert_eq!(out.to_vec::<f32>(), [5.0, 6.0, 3.0, 4.0]);
}

#[test]
fn test_unchecked_spills_into_next_row() {
    // Two rows of two: [1, 2], [3, 4]. Column 2 of row 0 linearises to row 1, column 0.
    let input = Tensor::from_slice(&[1u16, 2, 3, 4], &[2, 2]);
    let indices = Tensor::from_slice(&[2u32], &[1]);
    let mut output = Tensor::empty();

    {
        let mut kernel =
            GatherKernel::with_options(GatherOptions::new().with_index_bounds(IndexBounds::Unchecked));
        kernel.configure(&input, &indices, &mut output, 0);
        let first_row = kernel
            .window()
            .unwrap()
            .with_dimension(1, Dimension::new(0, 1, 1));
        kernel.run(&first_row, &ThreadInfo::default());
    }

    assert_eq!(output.to_vec::<u16>(), [3, 0]);
}

#[test]
fn test_unchecked_past_buffer_is_error() {
    // Column 2 of the last row lies one element past the input.
    let input = Tensor::from_slice(&[1u16, 2, 3, 4], &[2, 2]);
    let indices = Tensor::from_slice(&[2u32], &[1]);

    let err = gather(&input, &indices, 0).unwrap_err();
    assert_eq!(err, Error::IndexOutOfBounds { index: 4, size: 4 });
}

#[test]
fn test_unchecked_row_past_buffer_is_error() {
    let input = Tensor::from_slice(&[1u8, 2, 3, 4, 5, 6], &[2, 3]);
    let indices = Tensor::from_slice(&[0u32, 3], &[2]);
    assert!(matches!(
        gather(&input, &indices, 1),
        Err(Error::IndexOutOfBounds { size: 6, .. })
    ));
}

#[test]
fn test_strict_rejects_rank2_indices() {
    let input = Tensor::from_slice(&[1u8, 2, 3, 4, 5, 6], &[2, 3]);
    let indices = Tensor::from_slice(&[0u32, 2, 3, 1], &[2, 2]);

    let err = gather_with_options(&input, &indices, 1, GatherOptions::strict()).unwrap_err();
    assert_eq!(err, Error::IndexOutOfBounds { index: 3, size: 3 });
}

#[test]
fn test_strict_rejects_rank3_indices() {
    let input = Tensor::from_slice(&[0.5f32; 8], &[2, 2, 2]);
    let indices = Tensor::from_slice(&[1i32, 0, 0, 1, 1, 1, 0, 5], &[2, 2, 2]);

    let err = gather_with_options(&input, &indices, 1, GatherOptions::strict()).unwrap_err();
    assert_eq!(err, Error::IndexOutOfBounds { index: 5, size: 2 });
}

#[test]
fn test_negative_in_rank2_indices() {
    // Dimension 0 is innermost, so the third value sits at [0, 1].
    let input = Tensor::from_slice(&[1u8, 2, 3, 4, 5, 6], &[2, 3]);
    let indices = Tensor::from_slice(&[0i32, 1, -1, 2], &[2, 2]);

    let err = gather(&input, &indices, 1).unwrap_err();
    assert_eq!(
        err,
        Error::NegativeIndex {
            value: -1,
            position: vec![0, 1]
        }
    );
}
