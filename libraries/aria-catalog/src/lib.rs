//! Aria Player - Catalog Client
//!
//! HTTP client for the music catalog consumed by the playback core:
//! track metadata resolution, ordered playlist track lists, and the
//! rendering-only artist / "for you" collections.
//!
//! The client implements [`aria_core::Catalog`], so the playback
//! controller can hold it behind `Arc<dyn Catalog>` and tests can swap in
//! an in-memory fixture.

#![forbid(unsafe_code)]

mod client;
mod error;
pub mod types;

pub use client::CatalogClient;
pub use error::{CatalogError, Result};

use aria_core::types::{ArtistSummary, PlaylistCard, PlaylistId, TrackDescriptor, TrackId};
use aria_core::Catalog;
use async_trait::async_trait;

#[async_trait]
impl Catalog for CatalogClient {
    async fn track(&self, id: TrackId) -> aria_core::Result<TrackDescriptor> {
        Ok(self.get_track(id).await?)
    }

    async fn playlist_tracks(&self, id: PlaylistId) -> aria_core::Result<Vec<TrackId>> {
        Ok(self.get_playlist_tracks(id).await?)
    }

    async fn artists(&self) -> aria_core::Result<Vec<ArtistSummary>> {
        Ok(self.get_artists().await?)
    }

    async fn for_you_playlists(&self) -> aria_core::Result<Vec<PlaylistCard>> {
        Ok(self.get_for_you_playlists().await?)
    }
}
