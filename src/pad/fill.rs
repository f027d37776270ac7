//! Geometric border fills over one 1-D line of the padded buffer.
//!
//! Every function receives a lane whose interior already holds its final
//! values and whose first `padding[0]` and last `padding[1]` slots are still
//! blank, and writes only those slots. The driver guarantees that at least
//! one side has non-zero width and, for every mode that reads the interior,
//! that the interior is not empty.

use ndarray::{s, ArrayViewMut1};
use num::traits::{FromPrimitive, NumAssign, ToPrimitive};

use crate::ReflectStyle;

pub(super) fn constant<T>(mut lane: ArrayViewMut1<T>, padding: [usize; 2], values: [T; 2])
where
    T: NumAssign + Copy,
{
    let len = lane.len();
    lane.slice_mut(s![..padding[0]]).fill(values[0]);
    lane.slice_mut(s![len - padding[1]..]).fill(values[1]);
}

pub(super) fn edge<T>(mut lane: ArrayViewMut1<T>, padding: [usize; 2])
where
    T: NumAssign + Copy,
{
    let len = lane.len();
    let [before, after] = padding;
    let front = lane[before];
    let back = lane[len - after - 1];
    lane.slice_mut(s![..before]).fill(front);
    lane.slice_mut(s![len - after..]).fill(back);
}

/// Ramps from `end_values` at the outer edge to the interior boundary
/// element. Deltas are computed in `f64` and converted back per slot, so
/// integer elements truncate toward zero.
pub(super) fn linear_ramp<T>(mut lane: ArrayViewMut1<T>, padding: [usize; 2], end_values: [T; 2])
where
    T: NumAssign + Copy + ToPrimitive + FromPrimitive,
{
    let len = lane.len();
    let [before, after] = padding;

    if before > 0 {
        let end = end_values[0].to_f64().unwrap();
        let delta = (lane[before].to_f64().unwrap() - end) / before as f64;
        for j in 0..before {
            lane[j] = T::from_f64(end + j as f64 * delta).unwrap();
        }
    }
    if after > 0 {
        let end = end_values[1].to_f64().unwrap();
        let delta = (lane[len - after - 1].to_f64().unwrap() - end) / after as f64;
        for j in 0..after {
            lane[len - after + j] = T::from_f64(end + (after - 1 - j) as f64 * delta).unwrap();
        }
    }
}

/// Mirror of the interior excluding the boundary elements, tiled cyclically
/// when the width exceeds the mirrored run.
pub(super) fn reflect<T>(mut lane: ArrayViewMut1<T>, padding: [usize; 2], style: ReflectStyle)
where
    T: NumAssign + Copy,
{
    let len = lane.len();
    let [before, after] = padding;
    let interior = len - before - after;
    let inner = interior.saturating_sub(2);
    let period = inner + interior;

    // Lane index of element `m` of the cyclic source run. The before run is
    // the interior minus its two boundary elements followed by the reversed
    // interior; the after run is its mirror image.
    let before_src = |m: usize| {
        if m < inner {
            before + m + 1
        } else {
            before + interior - 1 - (m - inner)
        }
    };
    let after_src = |m: usize| {
        if m < inner {
            before + interior - 2 - m
        } else {
            before + m - inner
        }
    };

    for j in 0..before {
        let value = lane[before_src((before - 1 - j) % period)];
        lane[j] = adjust(style, lane[before], value);
    }
    for j in 0..after {
        let value = lane[after_src(j % period)];
        lane[len - after + j] = adjust(style, lane[len - after - 1], value);
    }
}

/// Mirror of the interior including the boundary elements, tiled cyclically
/// when the width exceeds the interior length.
pub(super) fn symmetric<T>(mut lane: ArrayViewMut1<T>, padding: [usize; 2], style: ReflectStyle)
where
    T: NumAssign + Copy,
{
    let len = lane.len();
    let [before, after] = padding;
    let interior = len - before - after;
    let period = 2 * interior;

    let before_src = |m: usize| {
        if m < interior {
            before + m
        } else {
            before + period - 1 - m
        }
    };
    let after_src = |m: usize| {
        if m < interior {
            before + interior - 1 - m
        } else {
            before + m - interior
        }
    };

    for j in 0..before {
        let value = lane[before_src((before - 1 - j) % period)];
        lane[j] = adjust(style, lane[before], value);
    }
    for j in 0..after {
        let value = lane[after_src(j % period)];
        lane[len - after + j] = adjust(style, lane[len - after - 1], value);
    }
}

/// Periodic tiling: the before border is the tail of the interior and the
/// after border its head, order preserved.
pub(super) fn wrap<T>(mut lane: ArrayViewMut1<T>, padding: [usize; 2])
where
    T: NumAssign + Copy,
{
    let len = lane.len();
    let [before, after] = padding;
    let interior = len - before - after;

    for j in 0..before {
        lane[j] = lane[before + interior - 1 - ((before - 1 - j) % interior)];
    }
    for j in 0..after {
        lane[len - after + j] = lane[before + j % interior];
    }
}

fn adjust<T: NumAssign + Copy>(style: ReflectStyle, boundary: T, value: T) -> T {
    match style {
        ReflectStyle::Even => value,
        ReflectStyle::Odd => boundary + boundary - value,
    }
}
