//! Typed failures for the formula engine
//!
//! The engine never returns NaN or Infinity to callers: degenerate inputs
//! that would divide by zero surface as an explicit error instead.

use thiserror::Error;

/// Errors produced by the formula engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Date string did not parse as an ISO-8601 (`YYYY-MM-DD`) calendar date
    #[error("invalid date {input:?}: expected an ISO-8601 calendar date (YYYY-MM-DD)")]
    InvalidDate { input: String },

    /// Structurally unusable input, detected before any computation
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Numerically degenerate input that would divide by zero
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: String },
}
