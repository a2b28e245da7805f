//! Collaborator traits for Aria Player

use crate::error::Result;
use crate::types::{ArtistSummary, PlaylistCard, PlaylistId, TrackDescriptor, TrackId};
use async_trait::async_trait;

/// Backing music catalog, request/response only
///
/// Implementations resolve opaque identifiers to metadata. The trait is
/// object-safe so the playback controller can hold an `Arc<dyn Catalog>`
/// without caring whether the catalog is an HTTP client or an in-memory
/// fixture.
///
/// No operation retries internally; a single failed resolution surfaces to
/// the caller, which decides whether to abort or fall back.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Resolve a track identifier to its full metadata
    ///
    /// # Errors
    /// `PlayerError::TrackNotFound` when the catalog has no such id,
    /// `PlayerError::Network` on request failure
    async fn track(&self, id: TrackId) -> Result<TrackDescriptor>;

    /// Fetch the ordered track list for a playlist
    ///
    /// Returns the ids in playback order. An empty list is not an error at
    /// this level; the queue layer reports it as `EmptyPlaylist`.
    async fn playlist_tracks(&self, id: PlaylistId) -> Result<Vec<TrackId>>;

    /// Fetch all artists (rendering-only collaborator)
    async fn artists(&self) -> Result<Vec<ArtistSummary>>;

    /// Fetch the "for you" playlists (rendering-only collaborator)
    async fn for_you_playlists(&self) -> Result<Vec<PlaylistCard>>;
}
