use anyhow::Result;
use chrono::Duration;

use crate::domain::{Article, DailyPrice};

/// External market-data provider.
///
/// Blocking call, no internal timeout; cancellation is the caller's
/// business at the process level. Failures stay `anyhow::Error` — retrieval
/// problems are the orchestration layer's concern, not the scoring core's.
pub trait PricesSource {
    /// The maximum available daily history for the ticker.
    fn fetch_price_history(&self, ticker: &str) -> Result<Vec<DailyPrice>>;

    /// A unique identifier for this implementation (so that afterwards we
    /// know which one we used).
    fn signature(&self) -> &'static str;
}

/// External news source.
pub trait NewsSource {
    /// Articles matching `query` published within the trailing `window`.
    fn fetch_articles(&self, query: &str, window: Duration) -> Result<Vec<Article>>;

    fn signature(&self) -> &'static str;
}
