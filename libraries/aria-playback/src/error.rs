//! Error types for the playback core
//!
//! The playback crates share the single `PlayerError` taxonomy defined in
//! `aria-core`; this module re-exports it alongside a local `Result` alias.

pub use aria_core::error::PlayerError;

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
