//! News date parsing and display.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Display format for news dates: `Mar 5, 2024` (short month, unpadded day).
pub const NEWS_DATE_FORMAT: &str = "%b %-d, %Y";

/// Parse a news date: `YYYY-MM-DD`, RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_news_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Format a news date for display. Unparseable dates are shown as given.
pub fn format_news_date(raw: &str) -> String {
    match parse_news_date(raw) {
        Some(date) => date.format(NEWS_DATE_FORMAT).to_string(),
        None => {
            tracing::debug!("Unparseable news date '{}', showing verbatim", raw);
            raw.to_string()
        }
    }
}
