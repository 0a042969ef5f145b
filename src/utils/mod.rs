//! Utility modules for the gallery viewer.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::format_millis;
