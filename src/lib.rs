// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod utils;

// Re-export commonly used types
pub use analysis::{ArticleAnnotator, FusedRecord, compound_score, fuse, mean_score, split_text};
pub use config::{SENTIMENT, SentimentConfig};
pub use data::{CacheFile, CachedArtifact, NewsSource, PricesSource, SentimentClassifier};
pub use domain::{AnnotatedArticle, Article, DailyPrice, ScoreVector, SentimentScore};
pub use error::SentimentError;
pub use utils::{is_descending_by_date, normalize_ascending};
