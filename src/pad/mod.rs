//! The padding engine: buffer allocation, the axis-sequential driver and the
//! public per-mode operations.

use std::ops::Add;

use ndarray::{
    Array, ArrayBase, ArrayViewMut1, Axis, Data, Dim, IntoDimension, Ix, RemoveAxis, SliceArg,
    SliceInfo, SliceInfoElem, Zip,
};
use num::traits::{FromPrimitive, NumAssign, ToPrimitive};

use crate::{
    width::{AxisSpec, ExplicitPadding, PadWidth},
    PadError, PadMode, ReflectStyle,
};

mod fill;
mod stat;
#[cfg(test)]
mod tests;

use stat::Statistic;

/// A [`PadMode`] with every per-axis argument normalized to canonical
/// `[before, after]` form.
enum ResolvedMode<const N: usize, T> {
    Constant([[T; 2]; N]),
    Edge,
    LinearRamp([[T; 2]; N]),
    Reflect(ReflectStyle),
    Symmetric(ReflectStyle),
    Wrap,
    Stat(Statistic, Option<ExplicitPadding<N>>),
}

impl<const N: usize, T: NumAssign + Copy> PadMode<N, T> {
    fn unfold(self) -> Result<ResolvedMode<N, T>, PadError> {
        Ok(match self {
            PadMode::Constant(values) => ResolvedMode::Constant(values.unfold()?),
            PadMode::Edge => ResolvedMode::Edge,
            PadMode::LinearRamp(ends) => ResolvedMode::LinearRamp(ends.unfold()?),
            PadMode::Reflect(style) => ResolvedMode::Reflect(style),
            PadMode::Symmetric(style) => ResolvedMode::Symmetric(style),
            PadMode::Wrap => ResolvedMode::Wrap,
            PadMode::Minimum(window) => {
                ResolvedMode::Stat(Statistic::Minimum, unfold_window(window)?)
            }
            PadMode::Maximum(window) => {
                ResolvedMode::Stat(Statistic::Maximum, unfold_window(window)?)
            }
            PadMode::Mean(window) => ResolvedMode::Stat(Statistic::Mean, unfold_window(window)?),
            PadMode::Median(window) => {
                ResolvedMode::Stat(Statistic::Median, unfold_window(window)?)
            }
        })
    }
}

fn unfold_window<const N: usize>(
    window: Option<AxisSpec<N, isize>>,
) -> Result<Option<ExplicitPadding<N>>, PadError> {
    window.map(|w| w.unfold_lengths()).transpose()
}

impl<const N: usize, T> ResolvedMode<N, T>
where
    T: NumAssign + Copy + PartialOrd + ToPrimitive + FromPrimitive,
{
    /// Shape-derived checks, run before the output buffer is allocated so a
    /// failing call performs no work.
    fn validate(&self, shape: &[usize], widths: &ExplicitPadding<N>) -> Result<(), PadError> {
        for axis in 0..N {
            let [before, after] = widths[axis];
            if before == 0 && after == 0 {
                continue;
            }
            // Constant borders never read the interior.
            if matches!(self, ResolvedMode::Constant(_)) {
                continue;
            }
            if shape[axis] == 0 {
                return Err(PadError::EmptyAxis { axis });
            }
            if let ResolvedMode::Stat(_, Some(windows)) = self {
                let [window_before, window_after] = windows[axis];
                if (before > 0 && window_before == 0) || (after > 0 && window_after == 0) {
                    return Err(PadError::EmptyStatWindow { axis });
                }
            }
        }
        Ok(())
    }

    fn fill(&self, lane: ArrayViewMut1<T>, padding: [usize; 2], axis: usize) {
        match self {
            ResolvedMode::Constant(values) => fill::constant(lane, padding, values[axis]),
            ResolvedMode::Edge => fill::edge(lane, padding),
            ResolvedMode::LinearRamp(ends) => fill::linear_ramp(lane, padding, ends[axis]),
            ResolvedMode::Reflect(style) => fill::reflect(lane, padding, *style),
            ResolvedMode::Symmetric(style) => fill::symmetric(lane, padding, *style),
            ResolvedMode::Wrap => fill::wrap(lane, padding),
            ResolvedMode::Stat(statistic, windows) => {
                stat::statistic(lane, padding, *statistic, windows.map(|w| w[axis]))
            }
        }
    }
}

/// Border padding for [`ndarray::ArrayBase`].
pub trait PadExt<const N: usize, T: NumAssign + Copy, Output> {
    /// Returns a new array enlarged by `pad_width` on every axis, with the
    /// border regions filled according to `mode`.
    fn pad(&self, mode: PadMode<N, T>, pad_width: PadWidth<N>) -> Result<Output, PadError>;
}

impl<const N: usize, T, S> PadExt<N, T, Array<T, Dim<[Ix; N]>>> for ArrayBase<S, Dim<[Ix; N]>>
where
    T: NumAssign + Copy + PartialOrd + ToPrimitive + FromPrimitive + Send + Sync,
    S: Data<Elem = T>,
    [Ix; N]: IntoDimension<Dim = Dim<[Ix; N]>>,
    SliceInfo<[SliceInfoElem; N], Dim<[Ix; N]>, Dim<[Ix; N]>>: SliceArg<Dim<[Ix; N]>>,
    Dim<[Ix; N]>: RemoveAxis,
{
    fn pad(
        &self,
        mode: PadMode<N, T>,
        pad_width: PadWidth<N>,
    ) -> Result<Array<T, Dim<[Ix; N]>>, PadError> {
        let widths = pad_width.unfold_lengths()?;
        let mode = mode.unfold()?;
        mode.validate(self.shape(), &widths)?;

        let output_dim = self
            .raw_dim()
            .add(widths.map(|size| size[0] + size[1]).into_dimension());
        let mut output: Array<T, Dim<[Ix; N]>> = Array::from_elem(output_dim, T::zero());

        let mut interior = output.slice_mut(unsafe {
            SliceInfo::new(std::array::from_fn(|i| SliceInfoElem::Slice {
                start: widths[i][0] as isize,
                end: Some((widths[i][0] + self.raw_dim()[i]) as isize),
                step: 1,
            }))
            .unwrap()
        });
        interior.assign(self);

        // Ascending axis order is load-bearing: every later axis must see the
        // earlier axes' borders in its lines, which is what produces mitered
        // corners. Lines within one axis pass are independent.
        for axis in 0..N {
            if widths[axis] == [0; 2] {
                continue;
            }
            Zip::from(output.lanes_mut(Axis(axis)))
                .par_for_each(|lane| mode.fill(lane, widths[axis], axis));
        }

        Ok(output)
    }
}

/// Pads every axis with literal values; `constant_values` broadcasts the
/// same way `pad_width` does.
pub fn pad_constant<const N: usize, T, S>(
    array: &ArrayBase<S, Dim<[Ix; N]>>,
    pad_width: impl Into<PadWidth<N>>,
    constant_values: impl Into<AxisSpec<N, T>>,
) -> Result<Array<T, Dim<[Ix; N]>>, PadError>
where
    T: NumAssign + Copy + PartialOrd + ToPrimitive + FromPrimitive + Send + Sync,
    S: Data<Elem = T>,
    [Ix; N]: IntoDimension<Dim = Dim<[Ix; N]>>,
    SliceInfo<[SliceInfoElem; N], Dim<[Ix; N]>, Dim<[Ix; N]>>: SliceArg<Dim<[Ix; N]>>,
    Dim<[Ix; N]>: RemoveAxis,
{
    array.pad(PadMode::Constant(constant_values.into()), pad_width.into())
}

/// Pads every axis by repeating its edge elements.
pub fn pad_edge<const N: usize, T, S>(
    array: &ArrayBase<S, Dim<[Ix; N]>>,
    pad_width: impl Into<PadWidth<N>>,
) -> Result<Array<T, Dim<[Ix; N]>>, PadError>
where
    T: NumAssign + Copy + PartialOrd + ToPrimitive + FromPrimitive + Send + Sync,
    S: Data<Elem = T>,
    [Ix; N]: IntoDimension<Dim = Dim<[Ix; N]>>,
    SliceInfo<[SliceInfoElem; N], Dim<[Ix; N]>, Dim<[Ix; N]>>: SliceArg<Dim<[Ix; N]>>,
    Dim<[Ix; N]>: RemoveAxis,
{
    array.pad(PadMode::Edge, pad_width.into())
}

/// Pads with a linear ramp from `end_values` at the outer edge to the edge
/// element of each line.
pub fn pad_linear_ramp<const N: usize, T, S>(
    array: &ArrayBase<S, Dim<[Ix; N]>>,
    pad_width: impl Into<PadWidth<N>>,
    end_values: impl Into<AxisSpec<N, T>>,
) -> Result<Array<T, Dim<[Ix; N]>>, PadError>
where
    T: NumAssign + Copy + PartialOrd + ToPrimitive + FromPrimitive + Send + Sync,
    S: Data<Elem = T>,
    [Ix; N]: IntoDimension<Dim = Dim<[Ix; N]>>,
    SliceInfo<[SliceInfoElem; N], Dim<[Ix; N]>, Dim<[Ix; N]>>: SliceArg<Dim<[Ix; N]>>,
    Dim<[Ix; N]>: RemoveAxis,
{
    array.pad(PadMode::LinearRamp(end_values.into()), pad_width.into())
}

/// Pads with the mirror of each line, excluding the edge element itself.
pub fn pad_reflect<const N: usize, T, S>(
    array: &ArrayBase<S, Dim<[Ix; N]>>,
    pad_width: impl Into<PadWidth<N>>,
    style: ReflectStyle,
) -> Result<Array<T, Dim<[Ix; N]>>, PadError>
where
    T: NumAssign + Copy + PartialOrd + ToPrimitive + FromPrimitive + Send + Sync,
    S: Data<Elem = T>,
    [Ix; N]: IntoDimension<Dim = Dim<[Ix; N]>>,
    SliceInfo<[SliceInfoElem; N], Dim<[Ix; N]>, Dim<[Ix; N]>>: SliceArg<Dim<[Ix; N]>>,
    Dim<[Ix; N]>: RemoveAxis,
{
    array.pad(PadMode::Reflect(style), pad_width.into())
}

/// Pads with the mirror of each line, including the edge element.
pub fn pad_symmetric<const N: usize, T, S>(
    array: &ArrayBase<S, Dim<[Ix; N]>>,
    pad_width: impl Into<PadWidth<N>>,
    style: ReflectStyle,
) -> Result<Array<T, Dim<[Ix; N]>>, PadError>
where
    T: NumAssign + Copy + PartialOrd + ToPrimitive + FromPrimitive + Send + Sync,
    S: Data<Elem = T>,
    [Ix; N]: IntoDimension<Dim = Dim<[Ix; N]>>,
    SliceInfo<[SliceInfoElem; N], Dim<[Ix; N]>, Dim<[Ix; N]>>: SliceArg<Dim<[Ix; N]>>,
    Dim<[Ix; N]>: RemoveAxis,
{
    array.pad(PadMode::Symmetric(style), pad_width.into())
}

/// Pads by wrapping each line around: its tail precedes the interior and its
/// head follows it.
pub fn pad_wrap<const N: usize, T, S>(
    array: &ArrayBase<S, Dim<[Ix; N]>>,
    pad_width: impl Into<PadWidth<N>>,
) -> Result<Array<T, Dim<[Ix; N]>>, PadError>
where
    T: NumAssign + Copy + PartialOrd + ToPrimitive + FromPrimitive + Send + Sync,
    S: Data<Elem = T>,
    [Ix; N]: IntoDimension<Dim = Dim<[Ix; N]>>,
    SliceInfo<[SliceInfoElem; N], Dim<[Ix; N]>, Dim<[Ix; N]>>: SliceArg<Dim<[Ix; N]>>,
    Dim<[Ix; N]>: RemoveAxis,
{
    array.pad(PadMode::Wrap, pad_width.into())
}

/// Pads with the minimum of a window at each end of every line.
pub fn pad_minimum<const N: usize, T, S>(
    array: &ArrayBase<S, Dim<[Ix; N]>>,
    pad_width: impl Into<PadWidth<N>>,
    stat_length: Option<AxisSpec<N, isize>>,
) -> Result<Array<T, Dim<[Ix; N]>>, PadError>
where
    T: NumAssign + Copy + PartialOrd + ToPrimitive + FromPrimitive + Send + Sync,
    S: Data<Elem = T>,
    [Ix; N]: IntoDimension<Dim = Dim<[Ix; N]>>,
    SliceInfo<[SliceInfoElem; N], Dim<[Ix; N]>, Dim<[Ix; N]>>: SliceArg<Dim<[Ix; N]>>,
    Dim<[Ix; N]>: RemoveAxis,
{
    array.pad(PadMode::Minimum(stat_length), pad_width.into())
}

/// Pads with the maximum of a window at each end of every line.
pub fn pad_maximum<const N: usize, T, S>(
    array: &ArrayBase<S, Dim<[Ix; N]>>,
    pad_width: impl Into<PadWidth<N>>,
    stat_length: Option<AxisSpec<N, isize>>,
) -> Result<Array<T, Dim<[Ix; N]>>, PadError>
where
    T: NumAssign + Copy + PartialOrd + ToPrimitive + FromPrimitive + Send + Sync,
    S: Data<Elem = T>,
    [Ix; N]: IntoDimension<Dim = Dim<[Ix; N]>>,
    SliceInfo<[SliceInfoElem; N], Dim<[Ix; N]>, Dim<[Ix; N]>>: SliceArg<Dim<[Ix; N]>>,
    Dim<[Ix; N]>: RemoveAxis,
{
    array.pad(PadMode::Maximum(stat_length), pad_width.into())
}

/// Pads with the mean of a window at each end of every line. Integer element
/// types truncate toward zero.
pub fn pad_mean<const N: usize, T, S>(
    array: &ArrayBase<S, Dim<[Ix; N]>>,
    pad_width: impl Into<PadWidth<N>>,
    stat_length: Option<AxisSpec<N, isize>>,
) -> Result<Array<T, Dim<[Ix; N]>>, PadError>
where
    T: NumAssign + Copy + PartialOrd + ToPrimitive + FromPrimitive + Send + Sync,
    S: Data<Elem = T>,
    [Ix; N]: IntoDimension<Dim = Dim<[Ix; N]>>,
    SliceInfo<[SliceInfoElem; N], Dim<[Ix; N]>, Dim<[Ix; N]>>: SliceArg<Dim<[Ix; N]>>,
    Dim<[Ix; N]>: RemoveAxis,
{
    array.pad(PadMode::Mean(stat_length), pad_width.into())
}

/// Pads with the median of a window at each end of every line.
pub fn pad_median<const N: usize, T, S>(
    array: &ArrayBase<S, Dim<[Ix; N]>>,
    pad_width: impl Into<PadWidth<N>>,
    stat_length: Option<AxisSpec<N, isize>>,
) -> Result<Array<T, Dim<[Ix; N]>>, PadError>
where
    T: NumAssign + Copy + PartialOrd + ToPrimitive + FromPrimitive + Send + Sync,
    S: Data<Elem = T>,
    [Ix; N]: IntoDimension<Dim = Dim<[Ix; N]>>,
    SliceInfo<[SliceInfoElem; N], Dim<[Ix; N]>, Dim<[Ix; N]>>: SliceArg<Dim<[Ix; N]>>,
    Dim<[Ix; N]>: RemoveAxis,
{
    array.pad(PadMode::Median(stat_length), pad_width.into())
}
