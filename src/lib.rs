//! File server console library
//!
//! Exposes the client's state machines and pure logic for testing.

pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod prefs;
pub mod utils;

/// Listing layout on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid, // Tile layout, several entries per row
    List, // One entry per row with size and timestamp
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        }
    }
}
