use crate::domain::ScoreVector;
use crate::error::SentimentError;

/// The external text-classification capability.
///
/// Implementations wrap whatever model backend is in use; the core never
/// names one. Input length is bounded by
/// [`crate::config::SentimentConfig::max_segment_length`] — callers chunk
/// longer text before asking. Implementations must not retry internally: an
/// unreachable backend surfaces as `ClassificationUnavailable` immediately
/// and retry policy stays with the caller.
pub trait SentimentClassifier {
    /// Classify one bounded-length text into raw softmax probabilities.
    fn classify(&self, text: &str) -> Result<ScoreVector, SentimentError>;

    /// A unique identifier for this backend (so that afterwards we know
    /// which one we used).
    fn signature(&self) -> &'static str;
}
