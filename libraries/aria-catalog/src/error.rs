//! Error types for the catalog client.

use aria_core::{PlayerError, PlaylistId, TrackId};
use thiserror::Error;

/// Errors that can occur when talking to the catalog API.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Catalog returned an error response
    #[error("Catalog error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Track does not exist in the catalog
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Playlist does not exist in the catalog
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Invalid catalog base URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a catalog response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Catalog is offline or unreachable
    #[error("Catalog unreachable: {0}")]
    Unreachable(String),
}

impl From<CatalogError> for PlayerError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::TrackNotFound(id) => PlayerError::TrackNotFound(id),
            CatalogError::PlaylistNotFound(id) => PlayerError::PlaylistNotFound(id),
            CatalogError::InvalidUrl(msg) => PlayerError::InvalidInput(msg),
            other => PlayerError::Network(other.to_string()),
        }
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
