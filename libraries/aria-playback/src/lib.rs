//! # Aria Playback
//!
//! Client-side playback engine for the Aria music player. Orchestrates
//! track resolution, media probing, transport control, a linear queue,
//! and UI synchronization behind a single [`PlayerController`].
//!
//! ## Architecture
//!
//! - **Controller**: session state machine with generation fencing for
//!   overlapping loads
//! - **Queue**: ordered track ids with a forward-only cursor
//! - **Transport**: the one live audio output device, behind a trait
//! - **Probe**: playability pre-check on a disposable surface
//! - **UI sync**: pure projection of player events onto widget sinks
//!
//! Platform audio stays behind the [`Transport`] and [`MediaProbe`]
//! seams, so the engine itself is host-agnostic and fully testable with
//! scripted fakes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod controller;
pub mod error;
pub mod events;
pub mod probe;
pub mod queue;
pub mod transport;
pub mod types;
pub mod ui;
pub mod volume;

pub use controller::PlayerController;
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use probe::MediaProbe;
pub use queue::{Advance, PlaybackQueue};
pub use transport::{Transport, TransportEvent};
pub use types::{PlaybackSession, PlaybackState, PlayerConfig};
pub use ui::{format_time, PlayPauseIcon, UiSurfaces, UiSync, VolumeIcon};
pub use volume::Volume;
