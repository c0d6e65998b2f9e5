use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of OHLCV data from the market-data provider.
///
/// Column names follow the provider's CSV export (Date, Open, ...), which is
/// what the cached artifacts and the charting subsystem already use.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DailyPrice {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl DailyPrice {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}
