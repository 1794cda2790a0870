//! Generation parameter errors

use thiserror::Error;

use crate::grid::Point;

/// Errors raised when generation parameters are malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("grid {width}x{height} is too small (minimum {min}x{min})")]
    TooSmall {
        width: usize,
        height: usize,
        min: usize,
    },

    #[error("path width {0} is outside {min}..={max}", min = crate::MIN_PATH_WIDTH, max = crate::MAX_PATH_WIDTH)]
    PathWidthOutOfRange(u8),

    #[error("{which} point {point} lies outside the carvable interior")]
    OutOfBounds { which: &'static str, point: Point },

    #[error("start and end share the same cell {0}")]
    StartEqualsEnd(Point),
}
