//! Application initialization.
//!
//! Process-wide setup performed once at startup by the binary. The library's
//! statistics code never depends on it, so it can be tested without log
//! side effects.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
