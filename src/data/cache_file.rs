use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::CACHE_VERSION;
use crate::utils::time_utils::local_now_as_timestamp_ms;

/// Versioned envelope around any cached artifact (price series, raw
/// articles, annotated articles).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CacheFile<T> {
    pub version: f64,
    pub timestamp_ms: i64,
    pub data: T,
}

impl<T: Serialize + DeserializeOwned> CacheFile<T> {
    pub fn new(data: T) -> Self {
        Self {
            version: CACHE_VERSION,
            timestamp_ms: local_now_as_timestamp_ms(),
            data,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open cache file: {:?}", path))?;
        let mut reader = BufReader::new(file);
        let cache: Self = bincode::deserialize_from(&mut reader)
            .context(format!("Failed to deserialize cache: {:?}", path))?;
        if cache.version != CACHE_VERSION {
            bail!(
                "Cache version mismatch: file v{} vs required v{}",
                cache.version,
                CACHE_VERSION
            );
        }
        Ok(cache)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self)
            .context(format!("Failed to serialize cache to: {}", path.display()))
    }
}
