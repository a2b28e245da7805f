//! Core error types for Aria Player

use crate::types::{PlaylistId, TrackId};
use thiserror::Error;

/// Result type alias using `PlayerError`
pub type Result<T> = std::result::Result<T, PlayerError>;

/// Core error type for Aria Player
///
/// Every playback failure is reported through one of these variants. The
/// playback controller absorbs them at its boundary into a terminal session
/// state plus a single error event; nothing propagates further up.
#[derive(Error, Debug)]
pub enum PlayerError {
    /// Track not found in the catalog
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Playlist not found in the catalog
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Request-level network failure
    #[error("Network error: {0}")]
    Network(String),

    /// Media failed the playability probe
    #[error("Media unplayable: {0}")]
    Probe(String),

    /// The output device rejected programmatic play (autoplay policy)
    #[error("Playback blocked by autoplay policy")]
    AutoplayBlocked,

    /// The output device rejected the codec
    #[error("Unsupported media format: {0}")]
    UnsupportedFormat(String),

    /// Playlist resolved to zero tracks
    #[error("Playlist is empty: {0}")]
    EmptyPlaylist(PlaylistId),

    /// A required UI surface was not bound at wiring time
    #[error("UI binding error: {0}")]
    UiBinding(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl PlayerError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a probe error
    pub fn probe(msg: impl Into<String>) -> Self {
        Self::Probe(msg.into())
    }

    /// Create an unsupported format error
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Create a UI binding error
    pub fn ui_binding(msg: impl Into<String>) -> Self {
        Self::UiBinding(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_track() {
        let err = PlayerError::TrackNotFound(TrackId::new(42));
        assert_eq!(err.to_string(), "Track not found: 42");
    }

    #[test]
    fn helper_constructors() {
        assert!(matches!(
            PlayerError::network("connection refused"),
            PlayerError::Network(_)
        ));
        assert!(matches!(
            PlayerError::probe("decode failure"),
            PlayerError::Probe(_)
        ));
    }
}
