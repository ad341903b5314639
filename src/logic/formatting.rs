//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, Utc};

/// Format bytes into human-readable string (e.g. "1.2 KB", "5.3 MB")
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format an RFC 3339 modification time relative to `now`
///
/// Returns None when the timestamp does not parse; callers show nothing
/// rather than a bogus age.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use filetui::logic::formatting::format_relative_time;
///
/// let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
/// assert_eq!(
///     format_relative_time("2025-06-01T11:58:30Z", now).as_deref(),
///     Some("1m ago")
/// );
/// assert_eq!(format_relative_time("not a date", now), None);
/// ```
pub fn format_relative_time(timestamp: &str, now: DateTime<Utc>) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(timestamp).ok()?;
    let elapsed = now.signed_duration_since(parsed.with_timezone(&Utc));
    let seconds = elapsed.num_seconds();

    if seconds < 0 {
        // Clock skew between server and client
        return Some("just now".to_string());
    }

    Some(match seconds {
        0..=59 => "just now".to_string(),
        60..=3599 => format!("{}m ago", seconds / 60),
        3600..=86_399 => format!("{}h ago", seconds / 3600),
        _ => {
            let days = seconds / 86_400;
            if days < 30 {
                format!("{}d ago", days)
            } else {
                parsed.format("%Y-%m-%d").to_string()
            }
        }
    })
}
