use thiserror::Error;

/// Validation failures raised before any padded buffer is returned.
///
/// Specification errors are detected eagerly, before the output allocation;
/// a failing call performs no work and the caller never observes a partially
/// padded result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PadError {
    /// A per-axis specification does not hold one `(before, after)` entry
    /// per array axis.
    #[error("specification holds {len} axis entries, but the array has rank {rank}")]
    ShapeMismatch { rank: usize, len: usize },
    /// A pad width or statistic window component is negative.
    #[error("negative component {value} in a width or length specification")]
    NegativeLength { value: isize },
    /// An axis with a non-zero pad width has no elements to take border
    /// values from.
    #[error("axis {axis} is empty, cannot take border values from it")]
    EmptyAxis { axis: usize },
    /// A statistic window selects no elements on a side that must be filled.
    #[error("stat_length selects no elements on axis {axis}")]
    EmptyStatWindow { axis: usize },
}
