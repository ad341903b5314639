//! Search Logic
//!
//! Pure filtering of a directory listing by the search box contents.
//! Matching is a case-insensitive substring test on the entry name; the
//! filter never touches the network and is recomputed on every read.

use crate::api::FileEntry;

/// Match a search query against an entry name (case-insensitive substring)
///
/// # Examples
/// ```
/// use filetui::logic::search::name_matches;
///
/// assert!(name_matches("", "anything.txt"));
/// assert!(name_matches("rep", "Report.pdf"));
/// assert!(name_matches("REPORT", "report.pdf"));
/// assert!(!name_matches("zzz", "report.pdf"));
/// ```
pub fn name_matches(query: &str, name: &str) -> bool {
    if query.is_empty() {
        return true; // Empty query matches everything
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Filter a listing by search query
///
/// The result is always a subsequence of `entries` in the original order.
pub fn filter_entries(entries: &[FileEntry], query: &str) -> Vec<FileEntry> {
    if query.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| name_matches(query, &entry.name))
        .cloned()
        .collect()
}
