use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{
    STORAGE_PATH, articles_cache_filename, price_cache_filename, sentiment_cache_filename,
};
use crate::data::cache_file::CacheFile;
use crate::utils::time_utils::{epoch_ms_to_utc, how_many_seconds_ago};

/// Local cache-or-fetch helper for one artifact file.
///
/// `load_or_fetch` reads the local copy first and only on a miss (or an
/// unreadable/stale-format file) runs the supplied fetch, persisting the
/// result before returning it. Callers get identical data either way and
/// never learn whether it was fresh or cached.
pub struct CachedArtifact {
    path: PathBuf,
}

impl CachedArtifact {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Cache slot for a ticker's full price history.
    pub fn price_history(ticker: &str) -> Self {
        Self::new(PathBuf::from(STORAGE_PATH).join(price_cache_filename(ticker)))
    }

    /// Cache slot for the raw articles matching a search term.
    pub fn raw_articles(query: &str) -> Self {
        Self::new(PathBuf::from(STORAGE_PATH).join(articles_cache_filename(query)))
    }

    /// Cache slot for sentiment-annotated articles for a search term.
    pub fn annotated_articles(query: &str) -> Self {
        Self::new(PathBuf::from(STORAGE_PATH).join(sentiment_cache_filename(query)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_or_fetch<T, F>(&self, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<T>,
    {
        match CacheFile::<T>::load_from_path(&self.path) {
            Ok(cache) => {
                log::info!(
                    "Loaded {} from local cache (written {}, {}s ago)",
                    self.path.display(),
                    epoch_ms_to_utc(cache.timestamp_ms),
                    how_many_seconds_ago(cache.timestamp_ms)
                );
                Ok(cache.data)
            }
            Err(e) => {
                log::info!(
                    "Cache miss for {} ({:#}), fetching from source",
                    self.path.display(),
                    e
                );
                let cache = CacheFile::new(fetch()?);
                cache.save_to_path(&self.path)?;
                Ok(cache.data)
            }
        }
    }
}
