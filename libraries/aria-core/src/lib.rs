//! Aria Player Core
//!
//! Shared types, traits, and error handling for the Aria playback core.
//!
//! This crate defines:
//! - **Domain Types**: `TrackDescriptor`, `ArtistSummary`, `PlaylistCard` and
//!   the id newtypes used across the player
//! - **Collaborator Traits**: `Catalog`, the request/response seam to the
//!   backing music catalog
//! - **Error Handling**: the unified `PlayerError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use aria_core::types::{TrackDescriptor, TrackId};
//!
//! let descriptor = TrackDescriptor::new(
//!     TrackId::new(42),
//!     "Some Song",
//!     "Some Artist",
//!     "https://media.example.com/tracks/42.mp3".parse().unwrap(),
//! );
//!
//! assert_eq!(descriptor.id, TrackId::new(42));
//! assert!(descriptor.duration().is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{PlayerError, Result};
pub use traits::Catalog;
pub use types::{ArtistId, ArtistSummary, PlaylistCard, PlaylistId, TrackDescriptor, TrackId};
