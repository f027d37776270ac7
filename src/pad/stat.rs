//! Statistic border fills and the source-window extraction they share.

use std::cmp::Ordering;

use ndarray::{s, ArrayView1, ArrayViewMut1};
use num::traits::{FromPrimitive, NumAssign, ToPrimitive};

/// Statistic computed over each side's source window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Statistic {
    Minimum,
    Maximum,
    Mean,
    Median,
}

/// Extracts the sub-vectors the border statistic is computed from: the whole
/// interior by default, or the first / last `stat_length` interior elements,
/// clamped to the interior length. Computes no values itself; a zero window
/// yields an empty (valid) view.
pub(super) fn stat_sources<'a, T>(
    lane: &'a ArrayViewMut1<'_, T>,
    padding: [usize; 2],
    stat_length: Option<[usize; 2]>,
) -> (ArrayView1<'a, T>, ArrayView1<'a, T>) {
    let len = lane.len();
    let interior = lane.slice(s![padding[0]..len - padding[1]]);
    match stat_length {
        None => (interior.clone(), interior),
        Some([window_before, window_after]) => {
            let n = interior.len();
            let window_before = window_before.min(n);
            let window_after = window_after.min(n);
            (
                interior.clone().slice_move(s![..window_before]),
                interior.slice_move(s![n - window_after..]),
            )
        }
    }
}

pub(super) fn statistic<T>(
    mut lane: ArrayViewMut1<T>,
    padding: [usize; 2],
    statistic: Statistic,
    stat_length: Option<[usize; 2]>,
) where
    T: NumAssign + Copy + PartialOrd + ToPrimitive + FromPrimitive,
{
    let (before_src, after_src) = stat_sources(&lane, padding, stat_length);
    // Only sides that actually get filled are reduced; the driver has
    // already rejected empty windows on those sides.
    let before_value = (padding[0] > 0).then(|| reduce(&before_src, statistic));
    let after_value = (padding[1] > 0).then(|| reduce(&after_src, statistic));

    let len = lane.len();
    if let Some(value) = before_value {
        lane.slice_mut(s![..padding[0]]).fill(value);
    }
    if let Some(value) = after_value {
        lane.slice_mut(s![len - padding[1]..]).fill(value);
    }
}

fn reduce<T>(source: &ArrayView1<'_, T>, statistic: Statistic) -> T
where
    T: NumAssign + Copy + PartialOrd + ToPrimitive + FromPrimitive,
{
    match statistic {
        Statistic::Minimum => fold_extreme(source, Ordering::Less),
        Statistic::Maximum => fold_extreme(source, Ordering::Greater),
        // Mean and median run in f64 and convert back, truncating toward
        // zero for integer element types.
        Statistic::Mean => {
            let sum: f64 = source.iter().map(|v| v.to_f64().unwrap()).sum();
            T::from_f64(sum / source.len() as f64).unwrap()
        }
        Statistic::Median => {
            let mut sorted: Vec<T> = source.iter().copied().collect();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
            let mid = sorted.len() / 2;
            if sorted.len() % 2 == 1 {
                sorted[mid]
            } else {
                let low = sorted[mid - 1].to_f64().unwrap();
                let high = sorted[mid].to_f64().unwrap();
                T::from_f64((low + high) / 2.0).unwrap()
            }
        }
    }
}

fn fold_extreme<T: Copy + PartialOrd>(source: &ArrayView1<'_, T>, keep: Ordering) -> T {
    source
        .iter()
        .copied()
        .reduce(|acc, v| {
            if v.partial_cmp(&acc) == Some(keep) {
                v
            } else {
                acc
            }
        })
        .unwrap()
}
