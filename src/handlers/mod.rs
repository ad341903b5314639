//! Event Handlers
//!
//! - keyboard: user keyboard input, dispatched on the active screen

pub mod keyboard;

pub use keyboard::handle_key;
