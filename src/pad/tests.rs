use ndarray::prelude::*;

use super::*;
use crate::{AxisSpec, PadError, PadMode, ReflectStyle};

#[test]
fn constant_1d() {
    let a = array![1, 2, 3, 4, 5];
    assert_eq!(
        pad_constant(&a, (2, 3), (4, 6)).unwrap(),
        array![4, 4, 1, 2, 3, 4, 5, 6, 6, 6]
    );
}

#[test]
fn constant_pads_an_empty_axis() {
    let a = Array1::<i32>::zeros(0);
    assert_eq!(pad_constant(&a, (2, 1), (7, 8)).unwrap(), array![7, 7, 8]);
}

#[test]
fn edge_1d() {
    let a = array![1, 2, 3, 4, 5];
    assert_eq!(
        pad_edge(&a, (2, 3)).unwrap(),
        array![1, 1, 1, 2, 3, 4, 5, 5, 5, 5]
    );
}

#[test]
fn edge_2d_corners_come_from_the_padded_first_axis() {
    let a = array![[1, 2], [3, 4]];
    assert_eq!(
        pad_edge(&a, [[1, 2], [2, 1]]).unwrap(),
        array![
            [1, 1, 1, 2, 2],
            [1, 1, 1, 2, 2],
            [3, 3, 3, 4, 4],
            [3, 3, 3, 4, 4],
            [3, 3, 3, 4, 4]
        ]
    );
}

#[test]
fn linear_ramp_1d_integer_truncation() {
    let a = array![1, 2, 3, 4, 5];
    assert_eq!(
        pad_linear_ramp(&a, (2, 3), (5, -4)).unwrap(),
        array![5, 3, 1, 2, 3, 4, 5, 2, -1, -4]
    );
}

#[test]
fn linear_ramp_1d_float() {
    let a = array![1.0f64, 2.0];
    assert_eq!(
        pad_linear_ramp(&a, (2, 2), (0.0, 0.0)).unwrap(),
        array![0.0, 0.5, 1.0, 2.0, 1.0, 0.0]
    );
}

#[test]
fn reflect_1d() {
    let a = array![1, 2, 3, 4, 5];
    assert_eq!(
        pad_reflect(&a, (2, 3), ReflectStyle::Even).unwrap(),
        array![3, 2, 1, 2, 3, 4, 5, 4, 3, 2]
    );
    assert_eq!(
        pad_reflect(&a, (2, 3), ReflectStyle::Odd).unwrap(),
        array![-1, 0, 1, 2, 3, 4, 5, 6, 7, 8]
    );
}

#[test]
fn reflect_width_exceeding_interior_tiles_cyclically() {
    let a = array![1, 2, 3];
    assert_eq!(
        pad_reflect(&a, (5, 0), ReflectStyle::Even).unwrap(),
        array![2, 1, 2, 3, 2, 1, 2, 3]
    );
}

#[test]
fn reflect_2d() {
    let a = array![[1, 2, 3], [4, 5, 6]];
    assert_eq!(
        pad_reflect(&a, 1, ReflectStyle::Even).unwrap(),
        array![
            [5, 4, 5, 6, 5],
            [2, 1, 2, 3, 2],
            [5, 4, 5, 6, 5],
            [2, 1, 2, 3, 2]
        ]
    );
}

#[test]
fn symmetric_1d() {
    let a = array![1, 2, 3, 4, 5];
    assert_eq!(
        pad_symmetric(&a, (2, 3), ReflectStyle::Even).unwrap(),
        array![2, 1, 1, 2, 3, 4, 5, 5, 4, 3]
    );
    assert_eq!(
        pad_symmetric(&a, (2, 3), ReflectStyle::Odd).unwrap(),
        array![0, 1, 1, 2, 3, 4, 5, 5, 6, 7]
    );
}

#[test]
fn symmetric_width_exceeding_interior_tiles_cyclically() {
    let a = array![1, 2];
    assert_eq!(
        pad_symmetric(&a, (4, 4), ReflectStyle::Even).unwrap(),
        array![1, 2, 2, 1, 1, 2, 2, 1, 1, 2]
    );
}

#[test]
fn wrap_1d() {
    let a = array![1, 2, 3, 4, 5];
    assert_eq!(
        pad_wrap(&a, (2, 3)).unwrap(),
        array![4, 5, 1, 2, 3, 4, 5, 1, 2, 3]
    );
}

#[test]
fn wrap_width_exceeding_interior_tiles_cyclically() {
    let a = array![1, 2, 3];
    assert_eq!(
        pad_wrap(&a, (0, 7)).unwrap(),
        array![1, 2, 3, 1, 2, 3, 1, 2, 3, 1]
    );
}

#[test]
fn wrap_zero_width_returns_the_input() {
    let a = array![[1, 2], [3, 4]];
    assert_eq!(pad_wrap(&a, 0).unwrap(), a);
}

#[test]
fn maximum_1d() {
    let a = array![1, 2, 3, 4, 5];
    assert_eq!(
        pad_maximum(&a, 2, None).unwrap(),
        array![5, 5, 1, 2, 3, 4, 5, 5, 5]
    );
    assert_eq!(
        pad_maximum(&a, (1, 7), None).unwrap(),
        array![5, 1, 2, 3, 4, 5, 5, 5, 5, 5, 5, 5, 5]
    );
}

#[test]
fn maximum_with_stat_length() {
    let a = array![1, 2, 3, 4, 5];
    assert_eq!(
        pad_maximum(&a, (2, 2), Some((2, 1).into())).unwrap(),
        array![2, 2, 1, 2, 3, 4, 5, 5, 5]
    );
}

#[test]
fn minimum_1d() {
    let a = array![1, 2, 3, 4, 5, 6];
    assert_eq!(
        pad_minimum(&a, (4, 2), None).unwrap(),
        array![1, 1, 1, 1, 1, 2, 3, 4, 5, 6, 1, 1]
    );
}

#[test]
fn minimum_2d_second_axis_uses_first_axis_borders() {
    let a = array![[1, 2], [3, 4]];
    assert_eq!(
        pad_minimum(&a, [[3, 2], [2, 3]], None).unwrap(),
        array![
            [1, 1, 1, 2, 1, 1, 1],
            [1, 1, 1, 2, 1, 1, 1],
            [1, 1, 1, 2, 1, 1, 1],
            [1, 1, 1, 2, 1, 1, 1],
            [3, 3, 3, 4, 3, 3, 3],
            [1, 1, 1, 2, 1, 1, 1],
            [1, 1, 1, 2, 1, 1, 1]
        ]
    );
}

#[test]
fn stat_length_clamps_to_the_interior() {
    let a = array![3, 1, 2];
    assert_eq!(
        pad_minimum(&a, (1, 1), Some(10.into())).unwrap(),
        array![1, 3, 1, 2, 1]
    );
}

#[test]
fn mean_1d() {
    let a = array![1, 2, 3, 4, 5];
    assert_eq!(
        pad_mean(&a, 2, None).unwrap(),
        array![3, 3, 1, 2, 3, 4, 5, 3, 3]
    );
    // Integer mean truncates toward zero: mean of [1, 2] is 1.5.
    assert_eq!(pad_mean(&array![1, 2], (1, 1), None).unwrap(), array![1, 1, 2, 1]);
}

#[test]
fn median_1d() {
    let a = array![1, 2, 3, 4, 5];
    assert_eq!(
        pad_median(&a, (4, 0), None).unwrap(),
        array![3, 3, 3, 3, 1, 2, 3, 4, 5]
    );
    // Even-length window: median is the mean of the two middle elements.
    assert_eq!(
        pad_median(&array![1.0, 2.0, 3.0, 4.0], (1, 1), None).unwrap(),
        array![2.5, 1.0, 2.0, 3.0, 4.0, 2.5]
    );
}

#[test]
fn shape_and_interior_preserved_for_every_mode() {
    let a = Array::from_shape_fn((2, 3, 4), |(i, j, k)| (i * 12 + j * 4 + k) as i64);
    let modes: Vec<PadMode<3, i64>> = vec![
        PadMode::Constant(AxisSpec::Scalar(9)),
        PadMode::Edge,
        PadMode::LinearRamp(AxisSpec::Scalar(0)),
        PadMode::Reflect(ReflectStyle::Even),
        PadMode::Reflect(ReflectStyle::Odd),
        PadMode::Symmetric(ReflectStyle::Even),
        PadMode::Wrap,
        PadMode::Minimum(None),
        PadMode::Maximum(None),
        PadMode::Mean(None),
        PadMode::Median(Some(AxisSpec::Scalar(2))),
    ];

    for mode in modes {
        let padded = a.pad(mode, [[1, 2], [0, 3], [2, 1]].into()).unwrap();
        assert_eq!(padded.shape(), &[5, 6, 7]);
        assert_eq!(padded.slice(s![1..3, 0..3, 2..6]), a);
    }
}

#[test]
fn negative_width_fails_before_any_work() {
    let a = array![1, 2, 3];
    assert_eq!(
        pad_edge(&a, (-1, 2)).unwrap_err(),
        PadError::NegativeLength { value: -1 }
    );
}

#[test]
fn per_axis_sequence_of_wrong_length_fails() {
    let a = array![[1, 2], [3, 4]];
    assert_eq!(
        pad_edge(&a, vec![[1, 1], [2, 2], [3, 3]]).unwrap_err(),
        PadError::ShapeMismatch { rank: 2, len: 3 }
    );
}

#[test]
fn empty_axis_fails_for_interior_reading_modes() {
    let a = Array1::<i32>::zeros(0);
    assert_eq!(
        pad_edge(&a, (1, 1)).unwrap_err(),
        PadError::EmptyAxis { axis: 0 }
    );
}

#[test]
fn zero_stat_window_on_a_filled_side_fails() {
    let a = array![1, 2, 3];
    assert_eq!(
        pad_minimum(&a, (2, 0), Some(AxisSpec::Pair(0, 1))).unwrap_err(),
        PadError::EmptyStatWindow { axis: 0 }
    );
}
