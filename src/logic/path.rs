//! Navigation path
//!
//! The current folder location as an ordered stack of segments. The empty
//! stack is the share root. Segments are never empty and never contain a
//! path separator, so the slash-joined form is always unambiguous.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavPath {
    segments: Vec<String>,
}

impl NavPath {
    /// The share root (empty path)
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a slash-joined path, dropping empty segments
    ///
    /// # Examples
    /// ```
    /// use filetui::logic::path::NavPath;
    ///
    /// assert!(NavPath::from_joined("").is_root());
    /// assert_eq!(NavPath::from_joined("docs/2024").joined(), "docs/2024");
    /// assert_eq!(NavPath::from_joined("/docs//2024/").joined(), "docs/2024");
    /// ```
    pub fn from_joined(joined: &str) -> Self {
        Self {
            segments: joined
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Name of the current (deepest) folder, None at root
    pub fn current_folder(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Append one segment. Returns false (and leaves the path unchanged)
    /// for segments that are empty or contain a separator.
    pub fn descend(&mut self, segment: &str) -> bool {
        if segment.is_empty() || segment.contains('/') {
            return false;
        }
        self.segments.push(segment.to_string());
        true
    }

    /// Remove the deepest segment. No-op at root; returns whether the
    /// path actually changed.
    pub fn ascend(&mut self) -> bool {
        self.segments.pop().is_some()
    }

    /// Slash-joined form, empty string at root
    pub fn joined(&self) -> String {
        self.segments.join("/")
    }
}

impl fmt::Display for NavPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_empty() {
        let path = NavPath::root();
        assert!(path.is_root());
        assert_eq!(path.depth(), 0);
        assert_eq!(path.joined(), "");
        assert_eq!(path.current_folder(), None);
    }

    #[test]
    fn test_descend_appends() {
        let mut path = NavPath::root();
        assert!(path.descend("docs"));
        assert!(path.descend("2024"));
        assert_eq!(path.joined(), "docs/2024");
        assert_eq!(path.depth(), 2);
        assert_eq!(path.current_folder(), Some("2024"));
    }

    #[test]
    fn test_descend_rejects_invalid_segments() {
        let mut path = NavPath::root();
        assert!(!path.descend(""));
        assert!(!path.descend("a/b"));
        assert!(path.is_root());
    }

    #[test]
    fn test_ascend_at_root_is_noop() {
        let mut path = NavPath::root();
        assert!(!path.ascend());
        assert!(path.is_root());
    }

    #[test]
    fn test_ascend_removes_last_segment() {
        let mut path = NavPath::from_joined("docs/2024");
        assert!(path.ascend());
        assert_eq!(path.joined(), "docs");
        assert!(path.ascend());
        assert!(path.is_root());
        assert!(!path.ascend());
    }

    #[test]
    fn test_ascend_then_descend_restores_path() {
        let mut path = NavPath::from_joined("docs/2024");
        let before = path.clone();
        let removed = path.current_folder().unwrap().to_string();
        path.ascend();
        path.descend(&removed);
        assert_eq!(path, before);

        // Descending a different segment does not restore the original
        let mut other = NavPath::from_joined("docs/2024");
        other.ascend();
        other.descend("2025");
        assert_ne!(other, before);
    }

    #[test]
    fn test_from_joined_drops_empty_segments() {
        assert_eq!(NavPath::from_joined("/docs//2024/").joined(), "docs/2024");
        assert!(NavPath::from_joined("///").is_root());
    }

    #[test]
    fn test_display_matches_joined() {
        let path = NavPath::from_joined("a/b/c");
        assert_eq!(path.to_string(), "a/b/c");
    }
}
