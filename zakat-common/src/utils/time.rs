use chrono::{TimeZone, Utc};

/// Returns the current UNIX timestamp in milliseconds.
///
/// Used to stamp ledger entries and transfer records. Millisecond resolution
/// keeps two entries committed in quick succession distinguishable.
pub fn current_time_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Formats a millisecond timestamp as RFC 3339 for display.
///
/// Out-of-range values fall back to the raw number.
pub fn format_millis(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.to_rfc3339(),
        None => millis.to_string(),
    }
}
