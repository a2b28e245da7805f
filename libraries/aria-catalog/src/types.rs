//! Wire types for the catalog API.

use crate::error::{CatalogError, Result};
use aria_core::types::{ArtistId, ArtistSummary, PlaylistCard, PlaylistId, TrackDescriptor, TrackId};
use serde::Deserialize;
use url::Url;

/// `GET /api/track/{id}` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackResponse {
    pub id: TrackId,
    pub title: String,
    pub artist_name: String,
    pub album_title: Option<String>,
    pub album_art_url: Option<String>,
    pub file_path: String,
    pub duration_ms: Option<u64>,
}

impl TrackResponse {
    /// Convert into a `TrackDescriptor`, resolving relative media and art
    /// locations against the catalog base URL.
    pub(crate) fn into_descriptor(self, base: &Url) -> Result<TrackDescriptor> {
        let media_url = base.join(&self.file_path).map_err(|e| {
            CatalogError::ParseError(format!("Invalid media location {:?}: {}", self.file_path, e))
        })?;

        // A malformed art URL degrades to the placeholder instead of
        // failing the whole resolution.
        let album_art_url = self
            .album_art_url
            .as_deref()
            .and_then(|art| base.join(art).ok());

        Ok(TrackDescriptor {
            id: self.id,
            title: self.title,
            artist_name: self.artist_name,
            album_title: self.album_title,
            album_art_url,
            media_url,
            duration_ms: self.duration_ms,
        })
    }
}

/// `GET /api/artists` response element.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistResponse {
    pub id: ArtistId,
    pub name: String,
}

impl From<ArtistResponse> for ArtistSummary {
    fn from(artist: ArtistResponse) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
        }
    }
}

/// `GET /api/playlists/for-you` response element.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistCardResponse {
    pub id: PlaylistId,
    pub title: String,
    pub image_url: Option<String>,
}

impl From<PlaylistCardResponse> for PlaylistCard {
    fn from(card: PlaylistCardResponse) -> Self {
        Self {
            id: card.id,
            title: card.title,
            image_url: card.image_url,
        }
    }
}
