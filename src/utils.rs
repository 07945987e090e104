//! General utilities.

use std::time::{SystemTime, UNIX_EPOCH};

/// Get current Unix timestamp in seconds, respecting `SOURCE_DATE_EPOCH`.
///
/// When `SOURCE_DATE_EPOCH` environment variable is set, returns that value
/// instead of the actual current time. This keeps generated reports
/// reproducible.
pub fn get_now() -> i64 {
    std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|val| val.parse::<i64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() as i64)
                .unwrap_or(0)
        })
}

/// Format a Unix timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
pub fn format_timestamp(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
