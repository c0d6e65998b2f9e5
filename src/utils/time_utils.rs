use chrono::{DateTime, Local};

pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

pub fn local_now_as_timestamp_ms() -> i64 {
    let now_local = Local::now();
    now_local.timestamp_millis()
}

/// How many seconds ago was the event described by `past_timestamp_ms`?
pub fn how_many_seconds_ago(past_timestamp_ms: i64) -> i64 {
    let now_timestamp_ms = local_now_as_timestamp_ms();
    (now_timestamp_ms - past_timestamp_ms) / 1000
}

/// Render an epoch-millisecond timestamp as a UTC date string. Used for
/// display purposes (cache age log lines).
pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format(STANDARD_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}
