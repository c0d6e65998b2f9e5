//! File persistence and serialization configuration

/// Directory path for storing cached artifacts
pub const STORAGE_PATH: &str = "storage";

/// Current version of the cache serialization format
pub const CACHE_VERSION: f64 = 1.0;

/// Generate the cache filename for a ticker's price history.
/// Example: "prices_AAPL_v1.bin"
pub fn price_cache_filename(ticker: &str) -> String {
    format!("prices_{}_v{}.bin", ticker.to_uppercase(), CACHE_VERSION)
}

/// Generate the cache filename for raw articles matching a search term.
pub fn articles_cache_filename(query: &str) -> String {
    format!("articles_{}_v{}.bin", artifact_key(query), CACHE_VERSION)
}

/// Generate the cache filename for sentiment-annotated articles.
pub fn sentiment_cache_filename(query: &str) -> String {
    format!("sentiment_{}_v{}.bin", artifact_key(query), CACHE_VERSION)
}

// Search terms can contain whatever the user typed; keep filenames tame.
fn artifact_key(term: &str) -> String {
    term.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
