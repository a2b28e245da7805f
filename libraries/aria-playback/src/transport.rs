//! Transport seam
//!
//! The transport wraps exactly one live audio output device. On the web
//! platform that is the page's audio element; in tests it is a scripted
//! fake. The playback controller is the only owner: it commits sources,
//! drives play/pause/seek/volume, and consumes the transport's events.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::broadcast;
use url::Url;

/// Events emitted by the live output device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransportEvent {
    /// Media metadata loaded; the real duration is now known
    MetadataReady {
        /// Duration in milliseconds
        duration_ms: u64,
    },

    /// Playback time advanced
    TimeAdvanced {
        /// Current position in milliseconds
        position_ms: u64,
        /// Total duration in milliseconds (0 when unknown)
        duration_ms: u64,
    },

    /// The committed media played to its end
    Ended,

    /// The device reported a playback error
    Error {
        /// Device-reported reason
        reason: String,
    },
}

/// The single live audio output device
///
/// Implementations use interior mutability; the controller holds the
/// transport behind `Arc<dyn Transport>` and never clones the device.
///
/// `load` must only be called with a media location that already passed
/// the playability probe for the current session generation.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Assign a media source and begin buffering
    fn load(&self, media_url: &Url);

    /// Start or resume playback
    ///
    /// # Errors
    /// `PlayerError::AutoplayBlocked` when the platform's autoplay policy
    /// rejects programmatic play (callers surface a "tap to play"
    /// affordance and never retry automatically),
    /// `PlayerError::UnsupportedFormat` when the codec is rejected.
    async fn play(&self) -> Result<()>;

    /// Pause playback, keeping the source and position
    fn pause(&self);

    /// Pause, reset the position to zero, and clear the source
    fn stop(&self);

    /// Seek to an absolute position
    fn seek_to(&self, position: Duration);

    /// Set the output volume fraction (0.0-1.0)
    fn set_volume(&self, fraction: f32);

    /// Set the mute state
    fn set_muted(&self, muted: bool);

    /// Current playback position
    fn position(&self) -> Duration;

    /// Duration of the committed media, if known yet
    fn duration(&self) -> Option<Duration>;

    /// Subscribe to device events
    ///
    /// Events arrive in the order the device emitted them.
    fn subscribe(&self) -> broadcast::Receiver<TransportEvent>;
}
