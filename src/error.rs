//! Error type for projection operations

use thiserror::Error;

/// Failures surfaced by the projection and its helpers
///
/// Every failure is detected where it happens and returned to the caller;
/// no operation produces partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// The input cannot be projected (empty vector, mismatched buffers, ...)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The input holds NaN or an infinity, so it has no total order
    #[error("non-finite value {value} at index {index}")]
    NonFiniteValue {
        /// Position of the offending coordinate in the input
        index: usize,
        /// The offending value
        value: f64,
    },

    /// The final dual solve landed on a window with no active coordinates
    #[error(
        "degenerate bracket: active window [{clip_count}, {active_end}) is empty, dual value is undefined"
    )]
    DegenerateBracket {
        /// Number of leading coordinates saturated at one
        clip_count: usize,
        /// One past the last coordinate that is still above zero
        active_end: usize,
    },
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ProjectionError>;
