//! Track and catalog summary types

use crate::types::{ArtistId, PlaylistId, TrackId};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Artwork shown when a track carries no album art of its own
pub const ARTWORK_PLACEHOLDER_URL: &str = "https://via.placeholder.com/56";

/// Fully resolved track metadata
///
/// Immutable once fetched from the catalog. The playback controller owns
/// the descriptor for the duration of one playback session and replaces it
/// wholesale when a new track loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackDescriptor {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist_name: String,

    /// Album title
    pub album_title: Option<String>,

    /// Album art location
    pub album_art_url: Option<Url>,

    /// Media location consumed by the transport and the probe
    pub media_url: Url,

    /// Track duration in milliseconds, unknown until the media loads
    pub duration_ms: Option<u64>,
}

impl TrackDescriptor {
    /// Create a descriptor with minimal metadata
    pub fn new(
        id: TrackId,
        title: impl Into<String>,
        artist_name: impl Into<String>,
        media_url: Url,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist_name: artist_name.into(),
            album_title: None,
            album_art_url: None,
            media_url,
            duration_ms: None,
        }
    }

    /// Get the track duration as a `Duration`
    pub fn duration(&self) -> Option<Duration> {
        self.duration_ms.map(Duration::from_millis)
    }

    /// Album art location, falling back to the placeholder
    pub fn artwork_url(&self) -> String {
        self.album_art_url
            .as_ref()
            .map_or_else(|| ARTWORK_PLACEHOLDER_URL.to_string(), Url::to_string)
    }
}

/// Artist entry in the browsing grid (rendering-only collaborator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    /// Unique artist identifier
    pub id: ArtistId,

    /// Artist name
    pub name: String,
}

/// "For you" playlist card (rendering-only collaborator)
///
/// Each rendered card carries its playlist id so the UI sync layer can
/// attach the "now playing" badge to the originating card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistCard {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist title
    pub title: String,

    /// Cover image location
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media_url() -> Url {
        "https://media.example.com/tracks/1.mp3".parse().unwrap()
    }

    #[test]
    fn descriptor_creation() {
        let track = TrackDescriptor::new(TrackId::new(1), "Test Song", "Test Artist", media_url());
        assert_eq!(track.title, "Test Song");
        assert!(track.album_title.is_none());
        assert!(track.duration().is_none());
    }

    #[test]
    fn duration_conversion() {
        let mut track = TrackDescriptor::new(TrackId::new(1), "Song", "Artist", media_url());
        track.duration_ms = Some(180_000);
        assert_eq!(track.duration(), Some(Duration::from_secs(180)));
    }

    #[test]
    fn descriptor_round_trips_through_json() {
        let mut track = TrackDescriptor::new(TrackId::new(1), "Song", "Artist", media_url());
        track.album_art_url = Some("https://img.example.com/a.png".parse().unwrap());
        track.duration_ms = Some(214_000);

        let json = serde_json::to_string(&track).unwrap();
        assert!(json.contains("https://media.example.com/tracks/1.mp3"));

        let back: TrackDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, track);
    }

    #[test]
    fn artwork_falls_back_to_placeholder() {
        let mut track = TrackDescriptor::new(TrackId::new(1), "Song", "Artist", media_url());
        assert_eq!(track.artwork_url(), ARTWORK_PLACEHOLDER_URL);

        track.album_art_url = Some("https://img.example.com/a.png".parse().unwrap());
        assert_eq!(track.artwork_url(), "https://img.example.com/a.png");
    }
}
