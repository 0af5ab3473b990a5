//! Display formatting for file sizes and timestamps.

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;
const GB: u64 = 1024 * 1024 * 1024;

pub const MISSING_DATE: &str = "—";

pub fn convert_file_size(size_in_bytes: u64) -> String {
    let size = size_in_bytes as f64;
    if size_in_bytes < KB {
        format!("{size_in_bytes} Bytes")
    } else if size_in_bytes < MB {
        format!("{:.1} KB", size / KB as f64)
    } else if size_in_bytes < GB {
        format!("{:.1} MB", size / MB as f64)
    } else {
        format!("{:.2} GB", size / GB as f64)
    }
}

pub fn parse_timestamp(iso: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(iso.trim(), &Rfc3339).ok()
}

/// Formats a backend timestamp as `h:mm{am|pm}, d Mon` in the timestamp's own offset.
pub fn format_date_time(iso: Option<&str>) -> String {
    let Some(date) = iso.and_then(parse_timestamp) else {
        return MISSING_DATE.to_string();
    };

    let hour = date.hour();
    let period = if hour >= 12 { "pm" } else { "am" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    let month = &date.month().to_string()[..3];
    format!("{}:{:02}{}, {} {}", hour, date.minute(), period, date.day(), month)
}

#[cfg(test)]
#[path = "file_format_test.rs"]
mod tests;
