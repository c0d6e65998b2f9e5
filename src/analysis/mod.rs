// Core scoring and fusion algorithms
pub mod aggregate;
pub mod annotate;
pub mod chunking;
pub mod fusion;

// Re-export commonly used items
pub use aggregate::{compound_score, mean_score};
pub use annotate::ArticleAnnotator;
pub use chunking::split_text;
pub use fusion::{FusedRecord, fuse};
