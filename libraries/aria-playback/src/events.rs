//! Player events
//!
//! Event-based communication for UI synchronization. The controller emits
//! these at every observable change: state transitions, track metadata
//! arrival, time advancement, volume changes, and failures. Subscribers
//! receive them in emission order.

use crate::types::PlaybackState;
use aria_core::types::{PlaylistId, TrackId};
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Session state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// Track metadata resolved; art/title/artist/duration are displayable
    ///
    /// Emitted before probing, so the UI shows the upcoming track while
    /// the media is still being verified.
    TrackLoaded {
        /// ID of the resolved track
        track_id: TrackId,
        /// Track title
        title: String,
        /// Artist name
        artist_name: String,
        /// Album title, if any
        album_title: Option<String>,
        /// Album art location with the placeholder already applied
        artwork_url: String,
        /// Duration in milliseconds, if the catalog knows it
        duration_ms: Option<u64>,
    },

    /// The committed media reported its real duration
    DurationKnown {
        /// Duration in milliseconds
        duration_ms: u64,
    },

    /// Playback time advanced
    Progress {
        /// Current position in milliseconds
        position_ms: u64,
        /// Total duration in milliseconds (0 when unknown)
        duration_ms: u64,
    },

    /// Volume or mute state changed
    VolumeChanged {
        /// Volume fraction (0.0-1.0)
        fraction: f32,
        /// Whether audio is muted
        muted: bool,
    },

    /// The playlist association changed (drives the "now playing" badge)
    PlaylistActivated {
        /// Playlist the session is associated with, if any
        playlist_id: Option<PlaylistId>,
    },

    /// Queue contents were replaced or cleared
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// A playback failure was reported (exactly once per failure)
    Error {
        /// Error message
        message: String,
    },
}
