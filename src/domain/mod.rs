// Domain types and value objects
pub mod article;
pub mod price;
pub mod score;

// Re-export commonly used types
pub use article::{AnnotatedArticle, Article};
pub use price::DailyPrice;
pub use score::{ScoreVector, SentimentScore};
