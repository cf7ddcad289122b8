use std::fmt;

use thiserror::Error;

use crate::PivotRule;

/// Which partition cursor ran off its sub-range.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ScanSide {
    Left,
    Right,
}

impl fmt::Display for ScanSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SortError {
    #[error("range [{low}, {high}] is out of bounds for a sequence of length {len}")]
    OutOfBoundsRange { low: usize, high: usize, len: usize },

    #[error("{side} partition scan left a {len}-element sub-range; the pivot lies outside its values")]
    ScanOverrun { side: ScanSide, len: usize },

    #[error("pivot rule `{0}` needs arithmetic keys; ordered-only elements must use median_of_3")]
    UnsupportedPivot(PivotRule),
}
