//! Structural error types for the grid and engine layers.

use derive_more::{Display, Error};

/// Errors raised by grid construction and access.
///
/// These are contract violations by the caller, not game-rule rejections.
/// Rule outcomes (occupied cell, full column, finished game) flow through
/// [`crate::MoveDisposition`] and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// Coordinate outside the grid extents.
    #[display("coordinate ({x}, {y}) is outside a {width}x{height} grid")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
    /// Zero-sized dimension at construction.
    #[display("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// Nonsensical argument to a rule query or engine constructor.
    #[display("invalid argument: {reason}")]
    InvalidArgument {
        /// What the caller got wrong.
        reason: &'static str,
    },
}
