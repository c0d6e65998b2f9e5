//! Configuration module for the market-mood library.

pub mod persistence;
pub mod sentiment;

// Re-export commonly used items
pub use persistence::{
    CACHE_VERSION, STORAGE_PATH, articles_cache_filename, price_cache_filename,
    sentiment_cache_filename,
};
pub use sentiment::{SENTIMENT, SentimentConfig};
