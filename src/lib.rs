//! N-Dimension border padding lib for [`ndarray`].
//!
//! Enlarges an array by `(before, after)` cells on every axis and fills the
//! new border region with a selectable policy: constant values, edge
//! replication, linear ramps, (a)symmetric reflection, periodic wrap-around,
//! or a statistic (minimum / maximum / mean / median) taken from a window at
//! each end of the axis.
//!
//! ```
//! use ndarray::prelude::*;
//! use ndarray_pad::*;
//!
//! let a = array![1, 2, 3, 4, 5];
//! assert_eq!(
//!     pad_edge(&a, (2, 3)).unwrap(),
//!     array![1, 1, 1, 2, 3, 4, 5, 5, 5, 5]
//! );
//! ```
//!
//! Axes are padded in ascending order, so the border of a later axis is
//! computed from lines that already contain the earlier axes' padding. For a
//! rank-2 array this yields mitered corners: `pad_edge` fills each corner
//! with the corner element of the original array, not with values derived
//! from the raw interior alone.

mod error;
mod pad;
mod width;

pub use error::PadError;
pub use pad::{
    pad_constant, pad_edge, pad_linear_ramp, pad_maximum, pad_mean, pad_median, pad_minimum,
    pad_reflect, pad_symmetric, pad_wrap, PadExt,
};
pub use width::{AxisSpec, ExplicitPadding, PadWidth};

/// Border policy applied along every axis.
///
/// Per-axis arguments ([`AxisSpec`]) broadcast the same way pad widths do:
/// a scalar or a single pair applies to all axes.
#[derive(Debug, Clone)]
pub enum PadMode<const N: usize, T: num::traits::NumAssign + Copy> {
    /// Literal `(before, after)` fill values per axis.
    Constant(AxisSpec<N, T>),
    /// Repeat the edge element of each line.
    Edge,
    /// Ramp linearly from the given end values to the edge element.
    LinearRamp(AxisSpec<N, T>),
    /// Mirror the line around its edge element, excluding the element itself.
    Reflect(ReflectStyle),
    /// Mirror the line around its edge, including the edge element.
    Symmetric(ReflectStyle),
    /// Tile the line periodically: the end wraps around to the beginning.
    Wrap,
    /// Fill with the minimum of a window at each end of the line.
    ///
    /// `None` computes the statistic over the whole line; a window length is
    /// clamped to the line length.
    Minimum(Option<AxisSpec<N, isize>>),
    /// Fill with the maximum of a window at each end of the line.
    Maximum(Option<AxisSpec<N, isize>>),
    /// Fill with the mean of a window at each end of the line.
    Mean(Option<AxisSpec<N, isize>>),
    /// Fill with the median of a window at each end of the line.
    Median(Option<AxisSpec<N, isize>>),
}

/// Whether a mirrored border keeps the interior values unaltered (`Even`) or
/// is point-reflected through the edge value, `2 * edge - value` (`Odd`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReflectStyle {
    #[default]
    Even,
    Odd,
}
