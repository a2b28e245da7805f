//! Domain types for Aria Player

mod ids;
mod track;

pub use ids::{ArtistId, PlaylistId, TrackId};
pub use track::{ArtistSummary, PlaylistCard, TrackDescriptor, ARTWORK_PLACEHOLDER_URL};
