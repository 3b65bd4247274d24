#![forbid(unsafe_code)]

//! Error taxonomy for chart configuration.
//!
//! Drawing operations are failure-free; only configuration (viewport and
//! axis-range setters) can reject input. Rejection happens before any state
//! is mutated, so a failed call leaves the previous valid configuration
//! intact.

use std::fmt;

/// Errors produced by chart configuration calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartError {
    /// Axis range with `max <= min` or a non-finite bound.
    InvalidRange {
        /// Requested lower bound.
        min: f32,
        /// Requested upper bound.
        max: f32,
    },
    /// Tick increment that is zero, negative, or non-finite.
    InvalidStep {
        /// Requested tick increment.
        step: f32,
    },
    /// Viewport rectangle that is unordered, empty, or outside the display.
    InvalidViewport {
        /// Top-left corner X.
        x0: u16,
        /// Top-left corner Y.
        y0: u16,
        /// Bottom-right corner X.
        x1: u16,
        /// Bottom-right corner Y.
        y1: u16,
    },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "invalid axis range: min {min} must be below max {max}")
            }
            Self::InvalidStep { step } => {
                write!(f, "invalid tick increment {step}: must be finite and positive")
            }
            Self::InvalidViewport { x0, y0, x1, y1 } => {
                write!(
                    f,
                    "invalid viewport ({x0}, {y0})-({x1}, {y1}): corners must be ordered and inside the display"
                )
            }
        }
    }
}

impl std::error::Error for ChartError {}
