//! Request handlers for the benchmark server

pub mod hello;

// Re-export the fixed-response route set
pub use hello::routes;
