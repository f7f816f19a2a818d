//! Driver implementations

pub mod console;
pub mod json;

pub use console::ConsoleDriver;
pub use json::JsonDriver;

// Re-export the trait for convenience
pub use crate::core::Driver;
