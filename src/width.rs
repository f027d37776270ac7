//! Flexible per-axis `(before, after)` specifications and their
//! normalization into one unambiguous pair per axis.

use crate::PadError;

/// Canonical pad sizes: one `[before, after]` pair per axis, in axis order.
pub type ExplicitPadding<const N: usize> = [[usize; 2]; N];

/// Pad width specification, resolved by [`AxisSpec::unfold_lengths`].
pub type PadWidth<const N: usize> = AxisSpec<N, isize>;

/// A scalar, a single `(before, after)` pair, or one pair per axis.
///
/// Scalars and single pairs broadcast to every axis. A runtime sequence
/// ([`AxisSpec::Seq`]) must hold either exactly one pair (broadcast) or one
/// pair per axis; any other length fails to unfold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisSpec<const N: usize, T> {
    /// `k` becomes `(k, k)` on every axis.
    Scalar(T),
    /// `(b, a)` applied to every axis.
    Pair(T, T),
    /// One `(before, after)` pair per axis.
    PerAxis([[T; 2]; N]),
    /// Runtime-length sequence of pairs; length checked during unfold.
    Seq(Vec<[T; 2]>),
}

impl<const N: usize, T: Copy> AxisSpec<N, T> {
    /// Resolves the specification to one `[before, after]` pair per axis.
    pub fn unfold(&self) -> Result<[[T; 2]; N], PadError> {
        Ok(match self {
            AxisSpec::Scalar(v) => [[*v; 2]; N],
            AxisSpec::Pair(b, a) => [[*b, *a]; N],
            AxisSpec::PerAxis(pairs) => *pairs,
            AxisSpec::Seq(pairs) if pairs.len() == N => std::array::from_fn(|i| pairs[i]),
            AxisSpec::Seq(pairs) if pairs.len() == 1 => [pairs[0]; N],
            AxisSpec::Seq(pairs) => {
                return Err(PadError::ShapeMismatch {
                    rank: N,
                    len: pairs.len(),
                })
            }
        })
    }
}

impl<const N: usize> AxisSpec<N, isize> {
    /// Unfolds a width or window length, rejecting negative components.
    pub fn unfold_lengths(&self) -> Result<ExplicitPadding<N>, PadError> {
        let pairs = self.unfold()?;
        if let Some(&value) = pairs.iter().flatten().find(|&&v| v < 0) {
            return Err(PadError::NegativeLength { value });
        }
        Ok(pairs.map(|pair| pair.map(|v| v as usize)))
    }
}

impl<const N: usize> From<isize> for AxisSpec<N, isize> {
    #[inline]
    fn from(v: isize) -> Self {
        AxisSpec::Scalar(v)
    }
}

impl<const N: usize, T> From<(T, T)> for AxisSpec<N, T> {
    #[inline]
    fn from((before, after): (T, T)) -> Self {
        AxisSpec::Pair(before, after)
    }
}

impl<const N: usize, T> From<[[T; 2]; N]> for AxisSpec<N, T> {
    #[inline]
    fn from(pairs: [[T; 2]; N]) -> Self {
        AxisSpec::PerAxis(pairs)
    }
}

impl<const N: usize, T: Copy> From<&[[T; 2]]> for AxisSpec<N, T> {
    #[inline]
    fn from(pairs: &[[T; 2]]) -> Self {
        AxisSpec::Seq(pairs.to_vec())
    }
}

impl<const N: usize, T> From<Vec<[T; 2]>> for AxisSpec<N, T> {
    #[inline]
    fn from(pairs: Vec<[T; 2]>) -> Self {
        AxisSpec::Seq(pairs)
    }
}
