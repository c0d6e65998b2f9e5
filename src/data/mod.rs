// External collaborators and local artifact caching
pub mod cache_file;
pub mod classifier;
pub mod providers;
pub mod store;

// Re-export commonly used types
pub use cache_file::CacheFile;
pub use classifier::SentimentClassifier;
pub use providers::{NewsSource, PricesSource};
pub use store::CachedArtifact;
