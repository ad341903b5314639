//! Background Services
//!
//! Async workers that keep network I/O off the render loop:
//! - gateway: executes file-server requests and streams responses back

pub mod gateway;
