// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - palette: base frame colors for light/dark mode
// - icons: file-type icons for listing entries
// - auth: loading, login and setup screens
// - dashboard: the file-browser screen (header, listing, footer)
// - settings: the appearance/sign-out popup
// - render: orchestration function that dispatches on the active screen

pub mod auth;
pub mod dashboard;
pub mod icons;
pub mod palette;
pub mod render;
pub mod settings;

pub use render::render;
