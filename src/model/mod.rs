//! Application State
//!
//! Pure state structures, separated from I/O services and rendering:
//! - browser: the file-browser navigation engine (path, listing, view/search)
//! - forms: controlled-input state for the login and setup screens

pub mod browser;
pub mod forms;

pub use browser::{Browser, FetchTicket};
pub use forms::{AuthField, AuthForm};
