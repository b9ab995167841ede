//! Visited Map: colour a map by where you have been
//!
//! Click a region of the map, pick how well you know it, and the region is
//! recoloured and the score saved to browser storage. The sum of all levels
//! is shown as a running total and the coloured map can be downloaded as SVG.
//!
//! # Levels
//!
//! - **Lived** (5), **Stayed** (4), **Visited** (3)
//! - **Stopped** (2), **Passed** (1), **Never been** (0)
//!
//! # Architecture
//!
//! - `data` - Levels, region identifiers, the score map and its storage
//! - `map` - Colours, viewport clamping, widget state, hover labels, export
//! - `config` - Widget settings loaded from the embedded TOML asset
//! - `web` - Browser front end with yew (wasm32 only)

pub mod config;
pub mod data;
pub mod map;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::MapConfig;
pub use data::*;
pub use map::MapWidget;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Most verbose level logged: everything in debug builds, `Info` in release
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Result type for the application edge
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("Level out of range: {0} (expected 0-5)")]
    InvalidLevel(i64),

    #[error("Storage write failed: {0}")]
    Storage(String),

    #[error("Could not serialize scores: {0}")]
    Serialize(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_builds_log_at_info() {
        let expected = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        assert_eq!(log_level(), expected);
        assert!(log_level() >= log::Level::Info);
    }
}
