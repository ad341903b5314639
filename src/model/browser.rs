//! File-browser navigation engine
//!
//! Owns the current path, the listing for that path, and the view/search
//! state layered on top. The path is the sole fetch trigger: descending or
//! ascending reports that a refresh is needed, and nothing else does.
//!
//! Listing fetches are tagged with a monotonic generation counter. A
//! response is applied only if its generation is still current, so a slow
//! response for an abandoned path can never overwrite a newer path's
//! listing — the last request issued wins, not the last response to arrive.

use anyhow::Result;

use crate::api::FileEntry;
use crate::logic::path::NavPath;
use crate::logic::search;
use crate::utils::log_debug;
use crate::ViewMode;

/// A listing fetch tagged with the generation and path it was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub path: NavPath,
}

#[derive(Debug, Default)]
pub struct Browser {
    path: NavPath,
    entries: Vec<FileEntry>,
    is_loading: bool,
    generation: u64,

    pub view_mode: ViewMode,
    pub search_query: String,
    pub selected: Option<usize>,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &NavPath {
        &self.path
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Start a listing fetch for the current path.
    ///
    /// Bumps the generation (implicitly invalidating any fetch still in
    /// flight) and returns the ticket the response must carry.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.is_loading = true;
        FetchTicket {
            generation: self.generation,
            path: self.path.clone(),
        }
    }

    /// Apply a listing response.
    ///
    /// Stale tickets are dropped without touching any state (the fetch that
    /// superseded them owns the loading flag). For the current ticket the
    /// loading flag always clears; a failed fetch keeps the previous
    /// listing so a transient error does not blank the screen.
    pub fn apply_listing(&mut self, ticket: &FetchTicket, result: Result<Vec<FileEntry>>) {
        if ticket.generation != self.generation {
            log_debug(&format!(
                "Dropping stale listing for '{}' (generation {} < {})",
                ticket.path, ticket.generation, self.generation
            ));
            return;
        }

        self.is_loading = false;
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.clamp_selection();
            }
            Err(e) => {
                // Non-fatal: keep showing the stale listing
                log_debug(&format!("Failed to load listing for '{}': {}", ticket.path, e));
            }
        }
    }

    /// Enter a child folder. Only directory entries are traversable; the
    /// caller must trigger a refresh when this returns true.
    pub fn descend(&mut self, name: &str) -> bool {
        let is_dir = self.entries.iter().any(|e| e.name == name && e.is_dir);
        if !is_dir || !self.path.descend(name) {
            return false;
        }
        self.selected = None;
        true
    }

    /// Go up one level. No-op at root; the caller must trigger a refresh
    /// when this returns true.
    pub fn ascend(&mut self) -> bool {
        if !self.path.ascend() {
            return false;
        }
        self.selected = None;
        true
    }

    /// Pure setter; never triggers a fetch
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Pure setter; never triggers a fetch. Selection is clamped to the
    /// filtered listing so it cannot point past the visible entries.
    pub fn set_search(&mut self, query: String) {
        self.search_query = query;
        self.clamp_selection();
    }

    /// The listing filtered by the search query, computed on read
    pub fn visible_entries(&self) -> Vec<FileEntry> {
        search::filter_entries(&self.entries, &self.search_query)
    }

    /// The currently selected visible entry, if any
    pub fn selected_entry(&self) -> Option<FileEntry> {
        let visible = self.visible_entries();
        self.selected.and_then(|i| visible.get(i).cloned())
    }

    pub fn select_next(&mut self) {
        let len = self.visible_entries().len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 >= len => 0, // Wrap to start
            Some(i) => i + 1,
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        let len = self.visible_entries().len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1, // Wrap to end
            Some(i) => i - 1,
        });
    }

    /// "Empty folder" and "loading" are mutually exclusive render states
    pub fn shows_empty_placeholder(&self) -> bool {
        !self.is_loading && self.visible_entries().is_empty()
    }

    /// Clear all session-scoped state on sign-out. Bumping the generation
    /// makes any still-outstanding response stale on arrival. Preferences
    /// are device-scoped and live elsewhere, untouched by this.
    pub fn reset(&mut self) {
        self.path = NavPath::root();
        self.entries.clear();
        self.search_query.clear();
        self.selected = None;
        self.is_loading = false;
        self.generation += 1;
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_entries().len();
        if len == 0 {
            self.selected = None;
        } else if let Some(i) = self.selected {
            if i >= len {
                self.selected = Some(len - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            size: 10,
            is_dir: false,
            mod_time: String::new(),
            entry_type: String::new(),
        }
    }

    fn dir(name: &str) -> FileEntry {
        FileEntry {
            is_dir: true,
            ..file(name)
        }
    }

    fn loaded(entries: Vec<FileEntry>) -> Browser {
        let mut browser = Browser::new();
        let ticket = browser.begin_fetch();
        browser.apply_listing(&ticket, Ok(entries));
        browser
    }

    #[test]
    fn test_begin_fetch_sets_loading_and_bumps_generation() {
        let mut browser = Browser::new();
        let first = browser.begin_fetch();
        let second = browser.begin_fetch();
        assert!(browser.is_loading());
        assert!(second.generation > first.generation);
    }

    #[test]
    fn test_apply_listing_replaces_wholesale() {
        let mut browser = loaded(vec![file("old.txt")]);
        let ticket = browser.begin_fetch();
        browser.apply_listing(&ticket, Ok(vec![file("new.txt")]));
        assert_eq!(browser.entries().len(), 1);
        assert_eq!(browser.entries()[0].name, "new.txt");
        assert!(!browser.is_loading());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_listing() {
        let mut browser = loaded(vec![file("keep.txt")]);
        let ticket = browser.begin_fetch();
        browser.apply_listing(&ticket, Err(anyhow::anyhow!("boom")));
        assert_eq!(browser.entries().len(), 1);
        assert_eq!(browser.entries()[0].name, "keep.txt");
        // Loading always clears for the current ticket, success or failure
        assert!(!browser.is_loading());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut browser = Browser::new();
        let stale = browser.begin_fetch();
        let current = browser.begin_fetch();
        browser.apply_listing(&stale, Ok(vec![file("stale.txt")]));
        assert!(browser.entries().is_empty());
        assert!(browser.is_loading(), "newer fetch still owns the flag");

        browser.apply_listing(&current, Ok(vec![file("fresh.txt")]));
        assert_eq!(browser.entries()[0].name, "fresh.txt");
        assert!(!browser.is_loading());
    }

    #[test]
    fn test_descend_requires_directory() {
        let mut browser = loaded(vec![dir("docs"), file("readme.txt")]);
        assert!(!browser.descend("readme.txt"));
        assert!(!browser.descend("missing"));
        assert!(browser.path().is_root());

        assert!(browser.descend("docs"));
        assert_eq!(browser.path().joined(), "docs");
    }

    #[test]
    fn test_ascend_at_root_is_noop() {
        let mut browser = Browser::new();
        assert!(!browser.ascend());
    }

    #[test]
    fn test_view_and_search_setters_are_pure() {
        let mut browser = loaded(vec![file("a.txt")]);
        browser.set_view_mode(ViewMode::List);
        browser.set_search("a".to_string());
        // Neither setter started a fetch: not loading, generation untouched
        assert!(!browser.is_loading());
        assert_eq!(browser.begin_fetch().generation, 2);
    }

    #[test]
    fn test_visible_entries_filters_by_name() {
        let mut browser = loaded(vec![file("report.pdf"), file("notes.md")]);
        browser.set_search("REP".to_string());
        let visible = browser.visible_entries();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "report.pdf");
    }

    #[test]
    fn test_selection_wraps() {
        let mut browser = loaded(vec![file("a"), file("b"), file("c")]);
        browser.select_next();
        assert_eq!(browser.selected, Some(0));
        browser.select_prev();
        assert_eq!(browser.selected, Some(2));
        browser.select_next();
        assert_eq!(browser.selected, Some(0));
    }

    #[test]
    fn test_search_clamps_selection() {
        let mut browser = loaded(vec![file("a"), file("b"), file("c")]);
        browser.selected = Some(2);
        browser.set_search("a".to_string());
        assert_eq!(browser.selected, Some(0));
        browser.set_search("zzz".to_string());
        assert_eq!(browser.selected, None);
    }

    #[test]
    fn test_empty_and_loading_are_mutually_exclusive() {
        let mut browser = Browser::new();
        let ticket = browser.begin_fetch();
        assert!(browser.is_loading());
        assert!(!browser.shows_empty_placeholder());

        browser.apply_listing(&ticket, Ok(Vec::new()));
        assert!(!browser.is_loading());
        assert!(browser.shows_empty_placeholder());
    }

    #[test]
    fn test_reset_clears_session_state_and_invalidates_inflight() {
        let mut browser = loaded(vec![dir("docs")]);
        assert!(browser.descend("docs"));
        let inflight = browser.begin_fetch();
        browser.search_query = "d".to_string();

        browser.reset();
        assert!(browser.path().is_root());
        assert!(browser.entries().is_empty());
        assert!(browser.search_query.is_empty());
        assert!(!browser.is_loading());

        // The response for the pre-reset fetch arrives late and is dropped
        browser.apply_listing(&inflight, Ok(vec![file("ghost.txt")]));
        assert!(browser.entries().is_empty());
    }
}
