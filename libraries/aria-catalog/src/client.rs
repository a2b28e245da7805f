//! HTTP client for the catalog API.

use crate::error::{CatalogError, Result};
use crate::types::{ArtistResponse, PlaylistCardResponse, TrackResponse};
use aria_core::types::{ArtistSummary, PlaylistCard, PlaylistId, TrackDescriptor, TrackId};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for the music catalog API.
///
/// Pure request/response: no caching, no retries. Every failed request
/// surfaces to the caller, which decides whether to abort or fall back.
///
/// # Example
///
/// ```ignore
/// use aria_catalog::CatalogClient;
/// use aria_core::TrackId;
///
/// let client = CatalogClient::new("https://music.example.com")?;
/// let descriptor = client.get_track(TrackId::new(42)).await?;
/// println!("{} - {}", descriptor.artist_name, descriptor.title);
/// ```
pub struct CatalogClient {
    http: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a new client for the given catalog base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let raw = base_url.as_ref();
        if raw.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let trimmed = raw.trim_end_matches('/');
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let base_url = Url::parse(trimmed).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("AriaPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the catalog base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a single track to its full metadata.
    pub async fn get_track(&self, id: TrackId) -> Result<TrackDescriptor> {
        let url = format!("{}/api/track/{}", self.base_url_str(), id);
        debug!(url = %url, track_id = %id, "Fetching track");

        let response = self.send_get(&url).await?;
        let status = response.status();

        if status.is_success() {
            let track: TrackResponse = response.json().await.map_err(|e| {
                CatalogError::ParseError(format!("Failed to parse track response: {}", e))
            })?;
            track.into_descriptor(&self.base_url)
        } else if status.is_client_error() {
            Err(CatalogError::TrackNotFound(id))
        } else {
            Err(self.server_error(response).await)
        }
    }

    /// Get the ordered track ids for a playlist.
    pub async fn get_playlist_tracks(&self, id: PlaylistId) -> Result<Vec<TrackId>> {
        let url = format!("{}/api/playlist/{}/tracks", self.base_url_str(), id);
        debug!(url = %url, playlist_id = %id, "Fetching playlist tracks");

        let response = self.send_get(&url).await?;
        let status = response.status();

        if status.is_success() {
            let ids: Vec<TrackId> = response.json().await.map_err(|e| {
                CatalogError::ParseError(format!("Failed to parse playlist response: {}", e))
            })?;

            debug!(playlist_id = %id, tracks = ids.len(), "Fetched playlist tracks");
            Ok(ids)
        } else if status.is_client_error() {
            Err(CatalogError::PlaylistNotFound(id))
        } else {
            Err(self.server_error(response).await)
        }
    }

    /// Get all artists (rendering-only collaborator).
    pub async fn get_artists(&self) -> Result<Vec<ArtistSummary>> {
        let url = format!("{}/api/artists", self.base_url_str());
        debug!(url = %url, "Fetching artists");

        let response = self.send_get(&url).await?;
        let status = response.status();

        if status.is_success() {
            let artists: Vec<ArtistResponse> = response.json().await.map_err(|e| {
                CatalogError::ParseError(format!("Failed to parse artists response: {}", e))
            })?;

            debug!(artists = artists.len(), "Fetched artists");
            Ok(artists.into_iter().map(Into::into).collect())
        } else {
            Err(self.server_error(response).await)
        }
    }

    /// Get the "for you" playlists (rendering-only collaborator).
    pub async fn get_for_you_playlists(&self) -> Result<Vec<PlaylistCard>> {
        let url = format!("{}/api/playlists/for-you", self.base_url_str());
        debug!(url = %url, "Fetching for-you playlists");

        let response = self.send_get(&url).await?;
        let status = response.status();

        if status.is_success() {
            let cards: Vec<PlaylistCardResponse> = response.json().await.map_err(|e| {
                CatalogError::ParseError(format!("Failed to parse playlists response: {}", e))
            })?;

            debug!(playlists = cards.len(), "Fetched for-you playlists");
            Ok(cards.into_iter().map(Into::into).collect())
        } else {
            Err(self.server_error(response).await)
        }
    }

    fn base_url_str(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    async fn send_get(&self, url: &str) -> Result<reqwest::Response> {
        self.http.get(url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                CatalogError::Unreachable(e.to_string())
            } else {
                CatalogError::Request(e)
            }
        })
    }

    async fn server_error(&self, response: reqwest::Response) -> CatalogError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        CatalogError::ServerError { status, message }
    }
}
