//! Hello Bench - a fixed-response HTTP server implemented in Rust
//!
//! This library provides the core functionality for a baseline
//! throughput benchmark: every request is answered with the same
//! payload under a configurable worker-thread count.

pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod handlers;

// Re-export main components
pub use config::*;
pub use constants::*;
