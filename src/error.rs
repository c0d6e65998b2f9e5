//! Typed failures for the scoring core.
//!
//! Data-retrieval problems from the external providers stay `anyhow::Error`
//! in the data layer; this enum covers only the scoring pipeline itself.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentimentError {
    /// The external classifier could not be reached or returned an error.
    /// Never retried here; retry policy belongs to the caller.
    #[error("classifier unavailable: {reason}")]
    ClassificationUnavailable { reason: String },

    /// Neutral weight outside the accepted 1..=5 range. Rejected before any
    /// scoring work happens.
    #[error("invalid neutral weight {0}, expected a value in 1..=5")]
    InvalidWeight(u8),

    /// Aggregation was asked to average zero score vectors. Rejected rather
    /// than fabricating a zero vector that would poison downstream fusion.
    #[error("cannot aggregate an empty sequence of score vectors")]
    EmptyInput,
}
