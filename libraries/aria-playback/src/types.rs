//! Core types for the playback controller

use aria_core::types::{PlaylistId, TrackDescriptor};
use serde::{Deserialize, Serialize};

/// Transport status of the current playback session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing committed, nothing in flight
    Idle,

    /// Resolving track metadata
    Loading,

    /// Awaiting the playability probe
    Probing,

    /// Audio committed and playing
    Playing,

    /// Audio committed and paused mid-track
    Paused,

    /// The committed track reached its end (terminal per track)
    Ended,

    /// The load or commit failed (terminal per track)
    Failed,
}

impl PlaybackState {
    /// Whether a media source is currently committed to the transport
    ///
    /// Seek, volume pass-through and play/pause toggling are only
    /// meaningful while this holds.
    pub fn has_committed_source(self) -> bool {
        matches!(self, PlaybackState::Playing | PlaybackState::Paused)
    }
}

/// The current playback session, single source of truth for the UI
///
/// Owned by the playback controller. UI layers observe it through events
/// and never inspect the transport directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSession {
    /// The committed track, replaced wholesale on every new load
    pub track: Option<TrackDescriptor>,

    /// Playlist the queue was loaded from, used only for UI highlighting
    pub playlist: Option<PlaylistId>,

    /// Transport status
    pub state: PlaybackState,
}

impl PlaybackSession {
    /// Create an idle, empty session
    pub fn new() -> Self {
        Self {
            track: None,
            playlist: None,
            state: PlaybackState::Idle,
        }
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume fraction (0.0-1.0, default: 1.0)
    pub initial_volume: f32,

    /// Capacity of the player event channel (default: 64)
    pub event_capacity: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            event_capacity: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.initial_volume, 1.0);
        assert_eq!(config.event_capacity, 64);
    }

    #[test]
    fn new_session_is_idle() {
        let session = PlaybackSession::new();
        assert_eq!(session.state, PlaybackState::Idle);
        assert!(session.track.is_none());
        assert!(session.playlist.is_none());
    }

    #[test]
    fn committed_source_states() {
        assert!(PlaybackState::Playing.has_committed_source());
        assert!(PlaybackState::Paused.has_committed_source());
        assert!(!PlaybackState::Idle.has_committed_source());
        assert!(!PlaybackState::Loading.has_committed_source());
        assert!(!PlaybackState::Probing.has_committed_source());
        assert!(!PlaybackState::Ended.has_committed_source());
        assert!(!PlaybackState::Failed.has_committed_source());
    }
}
