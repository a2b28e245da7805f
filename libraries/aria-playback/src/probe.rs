//! Media probe seam
//!
//! Probe-before-commit: a candidate media location is fed to a
//! disposable, non-audible playback surface and awaited until it either
//! buffers enough to play through or reports a decode/network error.
//! Committing an unverified source straight to the live transport causes
//! audible glitches and leaves the UI and device out of sync; the probe
//! isolates that failure before any user-visible state changes.

use crate::error::Result;
use async_trait::async_trait;
use url::Url;

/// Playability pre-check on a disposable surface
///
/// The probe must never touch the audible output device. It has no
/// internal timeout: it settles only on the platform's terminal media
/// events, and a superseding load bounds worst-case latency by dropping
/// the stale result.
///
/// Implementations own one disposable surface per `probe` call and must
/// release it (detach listeners, drop the element) whenever the returned
/// future settles or is dropped, on the success path as much as the
/// failure path.
#[async_trait]
pub trait MediaProbe: Send + Sync {
    /// Check that the media location can play through
    ///
    /// # Errors
    /// `PlayerError::Probe` when the media is unplayable or the probe
    /// surface reports a network failure.
    async fn probe(&self, media_url: &Url) -> Result<()>;
}
