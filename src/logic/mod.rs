//! Business Logic
//!
//! Pure functions and state machines that can be unit tested:
//! - bootstrap: initial screen selection from the two startup probes
//! - formatting: human-readable sizes and timestamps
//! - path: the navigation path segment stack
//! - search: listing filter by search query

pub mod bootstrap;
pub mod formatting;
pub mod path;
pub mod search;
