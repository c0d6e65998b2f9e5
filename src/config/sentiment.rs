//! Sentiment scoring configuration

/// Runtime configuration for the scoring pipeline.
///
/// Passed explicitly into [`crate::analysis::ArticleAnnotator`]; there is no
/// module-global state to mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentConfig {
    /// Maximum text length (in characters) a single classifier call accepts.
    /// Longer texts are chunked into windows of this size.
    pub max_segment_length: usize,
    /// Neutral weight applied when the caller does not supply one (1..=5).
    pub default_neutral_weight: u8,
}

/// The master defaults
pub const SENTIMENT: SentimentConfig = SentimentConfig {
    // Input ceiling of the upstream classifier model
    max_segment_length: 514,
    default_neutral_weight: 4,
};

impl Default for SentimentConfig {
    fn default() -> Self {
        SENTIMENT
    }
}
