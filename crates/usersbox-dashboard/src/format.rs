//! Display formatting
//!
//! Pure helpers that turn backend payloads into text. Nothing here touches
//! the DOM, so everything is unit tested natively.

use chrono::{DateTime, NaiveDateTime};

use crate::api::SearchResult;

/// Number of result sources shown for a test search
pub const MAX_RESULT_ITEMS: usize = 5;

/// Render a search response as a short text report.
///
/// Only the first [`MAX_RESULT_ITEMS`] entries are considered; entries that
/// carry neither a source nor hits are skipped but keep their position.
pub fn format_search_result(result: Option<&SearchResult>) -> String {
    let Some(result) = result else {
        return String::new();
    };

    if let Some(error) = &result.error {
        return format!("Error: {}", error.message());
    }

    let count = result.data.as_ref().map_or(0, |data| data.count);
    if count == 0 {
        return "No results found".to_string();
    }

    let items = result.data.iter().flat_map(|data| data.items.iter());
    let blocks: Vec<String> = items
        .take(MAX_RESULT_ITEMS)
        .enumerate()
        .filter(|(_, item)| item.source.is_some() || item.hits.is_some())
        .map(|(index, item)| {
            let source = item.source.as_ref();
            let database = source.and_then(|s| s.database.as_deref()).unwrap_or("N/A");
            let collection = source.and_then(|s| s.collection.as_deref()).unwrap_or("N/A");
            let hits = item.hits.as_ref().map_or(0, |h| h.total());
            format!(
                "{}. Database: {}\n   Collection: {}\n   Hits: {}",
                index + 1,
                database,
                collection,
                hits
            )
        })
        .collect();

    format!("Found {count} results:\n\n{}", blocks.join("\n\n"))
}

/// Format a number with K/M suffix
pub fn format_number(num: u64) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Format a success rate in percent
pub fn format_percent(rate: f64) -> String {
    if rate.is_finite() {
        format!("{:.1}%", rate.clamp(0.0, 100.0))
    } else {
        "-".to_string()
    }
}

/// Format a backend timestamp as `YYYY-MM-DD HH:MM`.
///
/// The backend stores naive UTC datetimes, so strings may or may not carry an
/// offset. Anything unparseable is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M";

    let raw = raw.trim();
    if raw.is_empty() {
        return "-".to_string();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.naive_utc().format(DISPLAY).to_string();
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|parsed| parsed.format(DISPLAY).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Format an optional timestamp, `-` when missing
pub fn format_optional_timestamp(raw: Option<&str>) -> String {
    raw.map(format_timestamp).unwrap_or_else(|| "-".to_string())
}

/// Format a Telegram handle with its `@` prefix
pub fn format_username(username: Option<&str>) -> String {
    match username.map(str::trim) {
        Some(name) if !name.is_empty() => format!("@{}", name.trim_start_matches('@')),
        _ => "-".to_string(),
    }
}
