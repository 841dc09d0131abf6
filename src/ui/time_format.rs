use chrono::{NaiveDate, NaiveDateTime};

/// Server timestamps arrive as `%Y-%m-%d %H:%M:%S` strings. Entries from
/// `today` render as time-of-day only; anything else (including strings the
/// server produced in some other shape) passes through untouched.
pub fn format_log_timestamp(ts: &str, today: NaiveDate) -> String {
    match NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S") {
        Ok(dt) if dt.date() == today => dt.format("%H:%M:%S").to_string(),
        _ => ts.to_string(),
    }
}
