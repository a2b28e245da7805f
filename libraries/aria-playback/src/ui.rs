//! UI synchronization layer
//!
//! Pure projection of [`PlayerEvent`]s onto widget surfaces. The widgets
//! themselves live outside this crate; they are bound once as sink
//! closures through [`UiSurfaces`], and [`UiSync`] translates each event
//! into sink calls. The layer never reads or mutates session state, so
//! any widget toolkit that can hand over closures can host the player.

use crate::events::PlayerEvent;
use crate::types::PlaybackState;
use aria_core::error::{PlayerError, Result};
use aria_core::types::PlaylistId;

/// Format milliseconds as an `m:ss` clock label
pub fn format_time(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Play/pause button face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayPauseIcon {
    /// Pressing will start or resume playback
    Play,
    /// Pressing will pause playback
    Pause,
}

impl PlayPauseIcon {
    /// Icon matching a playback state
    pub fn for_state(state: PlaybackState) -> Self {
        if state == PlaybackState::Playing {
            Self::Pause
        } else {
            Self::Play
        }
    }

    /// Tooltip title for the button
    pub fn title(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Pause => "Pause",
        }
    }
}

/// Volume button face tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    /// Muted or zero volume
    Muted,
    /// Below half volume
    Low,
    /// Half volume and above
    High,
}

impl VolumeIcon {
    /// Icon tier for a volume level
    pub fn for_level(fraction: f32, muted: bool) -> Self {
        if muted || fraction == 0.0 {
            Self::Muted
        } else if fraction < 0.5 {
            Self::Low
        } else {
            Self::High
        }
    }
}

/// A bound widget sink
pub type Sink<T> = Box<dyn FnMut(T) + Send>;

/// The full set of widget surfaces the player drives
///
/// Built through [`UiSurfaces::builder`], which fails fast when any
/// surface was left unbound, so a missing widget is caught at startup
/// instead of silently dropping updates at runtime.
pub struct UiSurfaces {
    pub(crate) track_title: Sink<String>,
    pub(crate) artist_name: Sink<String>,
    pub(crate) album_art_url: Sink<String>,
    pub(crate) elapsed_label: Sink<String>,
    pub(crate) total_label: Sink<String>,
    pub(crate) progress_fraction: Sink<f64>,
    pub(crate) volume_fraction: Sink<f32>,
    pub(crate) volume_icon: Sink<VolumeIcon>,
    pub(crate) play_pause_icon: Sink<PlayPauseIcon>,
    pub(crate) now_playing_badge: Sink<Option<PlaylistId>>,
    pub(crate) error_banner: Sink<String>,
}

impl std::fmt::Debug for UiSurfaces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiSurfaces").finish_non_exhaustive()
    }
}

impl UiSurfaces {
    /// Start binding surfaces
    pub fn builder() -> UiSurfacesBuilder {
        UiSurfacesBuilder::default()
    }
}

/// Builder for [`UiSurfaces`]
#[derive(Default)]
pub struct UiSurfacesBuilder {
    track_title: Option<Sink<String>>,
    artist_name: Option<Sink<String>>,
    album_art_url: Option<Sink<String>>,
    elapsed_label: Option<Sink<String>>,
    total_label: Option<Sink<String>>,
    progress_fraction: Option<Sink<f64>>,
    volume_fraction: Option<Sink<f32>>,
    volume_icon: Option<Sink<VolumeIcon>>,
    play_pause_icon: Option<Sink<PlayPauseIcon>>,
    now_playing_badge: Option<Sink<Option<PlaylistId>>>,
    error_banner: Option<Sink<String>>,
}

macro_rules! bind {
    ($(#[$doc:meta])* $name:ident: $ty:ty) => {
        $(#[$doc])*
        #[must_use]
        pub fn $name(mut self, sink: impl FnMut($ty) + Send + 'static) -> Self {
            self.$name = Some(Box::new(sink));
            self
        }
    };
}

impl UiSurfacesBuilder {
    bind!(
        /// Bind the track title text
        track_title: String
    );
    bind!(
        /// Bind the artist name text
        artist_name: String
    );
    bind!(
        /// Bind the album art image location
        album_art_url: String
    );
    bind!(
        /// Bind the elapsed time label
        elapsed_label: String
    );
    bind!(
        /// Bind the total time label
        total_label: String
    );
    bind!(
        /// Bind the progress bar fill fraction
        progress_fraction: f64
    );
    bind!(
        /// Bind the volume bar fill fraction
        volume_fraction: f32
    );
    bind!(
        /// Bind the volume button face
        volume_icon: VolumeIcon
    );
    bind!(
        /// Bind the play/pause button face
        play_pause_icon: PlayPauseIcon
    );
    bind!(
        /// Bind the "now playing" playlist badge
        now_playing_badge: Option<PlaylistId>
    );
    bind!(
        /// Bind the error banner text
        error_banner: String
    );

    /// Finish binding
    ///
    /// # Errors
    /// `PlayerError::UiBinding` naming every surface left unbound.
    pub fn build(self) -> Result<UiSurfaces> {
        let mut missing = Vec::new();
        let mut require = |name: &'static str, bound: bool| {
            if !bound {
                missing.push(name);
            }
        };
        require("track_title", self.track_title.is_some());
        require("artist_name", self.artist_name.is_some());
        require("album_art_url", self.album_art_url.is_some());
        require("elapsed_label", self.elapsed_label.is_some());
        require("total_label", self.total_label.is_some());
        require("progress_fraction", self.progress_fraction.is_some());
        require("volume_fraction", self.volume_fraction.is_some());
        require("volume_icon", self.volume_icon.is_some());
        require("play_pause_icon", self.play_pause_icon.is_some());
        require("now_playing_badge", self.now_playing_badge.is_some());
        require("error_banner", self.error_banner.is_some());

        if !missing.is_empty() {
            return Err(PlayerError::ui_binding(format!(
                "unbound surfaces: {}",
                missing.join(", ")
            )));
        }

        // The checks above guarantee every field is Some
        let take = |name: &'static str| move || PlayerError::ui_binding(name);
        Ok(UiSurfaces {
            track_title: self.track_title.ok_or_else(take("track_title"))?,
            artist_name: self.artist_name.ok_or_else(take("artist_name"))?,
            album_art_url: self.album_art_url.ok_or_else(take("album_art_url"))?,
            elapsed_label: self.elapsed_label.ok_or_else(take("elapsed_label"))?,
            total_label: self.total_label.ok_or_else(take("total_label"))?,
            progress_fraction: self.progress_fraction.ok_or_else(take("progress_fraction"))?,
            volume_fraction: self.volume_fraction.ok_or_else(take("volume_fraction"))?,
            volume_icon: self.volume_icon.ok_or_else(take("volume_icon"))?,
            play_pause_icon: self.play_pause_icon.ok_or_else(take("play_pause_icon"))?,
            now_playing_badge: self.now_playing_badge.ok_or_else(take("now_playing_badge"))?,
            error_banner: self.error_banner.ok_or_else(take("error_banner"))?,
        })
    }
}

/// Applies player events to bound surfaces
pub struct UiSync {
    surfaces: UiSurfaces,
}

impl UiSync {
    /// Wrap a fully bound surface set
    pub fn new(surfaces: UiSurfaces) -> Self {
        Self { surfaces }
    }

    /// Project one event onto the surfaces
    pub fn apply(&mut self, event: &PlayerEvent) {
        let s = &mut self.surfaces;
        match event {
            PlayerEvent::StateChanged { state } => {
                (s.play_pause_icon)(PlayPauseIcon::for_state(*state));
                if *state == PlaybackState::Idle {
                    (s.elapsed_label)(format_time(0));
                    (s.progress_fraction)(0.0);
                }
            }
            PlayerEvent::TrackLoaded {
                title,
                artist_name,
                artwork_url,
                duration_ms,
                ..
            } => {
                (s.track_title)(title.clone());
                (s.artist_name)(artist_name.clone());
                (s.album_art_url)(artwork_url.clone());
                (s.elapsed_label)(format_time(0));
                (s.total_label)(format_time(duration_ms.unwrap_or(0)));
                (s.progress_fraction)(0.0);
            }
            PlayerEvent::DurationKnown { duration_ms } => {
                (s.total_label)(format_time(*duration_ms));
            }
            PlayerEvent::Progress {
                position_ms,
                duration_ms,
            } => {
                (s.elapsed_label)(format_time(*position_ms));
                let fraction = if *duration_ms == 0 {
                    0.0
                } else {
                    *position_ms as f64 / *duration_ms as f64
                };
                (s.progress_fraction)(fraction.clamp(0.0, 1.0));
            }
            PlayerEvent::VolumeChanged { fraction, muted } => {
                (s.volume_fraction)(if *muted { 0.0 } else { *fraction });
                (s.volume_icon)(VolumeIcon::for_level(*fraction, *muted));
            }
            PlayerEvent::PlaylistActivated { playlist_id } => {
                (s.now_playing_badge)(*playlist_id);
            }
            PlayerEvent::QueueChanged { .. } => {}
            PlayerEvent::Error { message } => {
                (s.error_banner)(message.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aria_core::types::TrackId;
    use std::sync::{Arc, Mutex};

    #[test]
    fn formats_zero() {
        assert_eq!(format_time(0), "0:00");
    }

    #[test]
    fn formats_seconds_with_leading_zero() {
        assert_eq!(format_time(9_000), "0:09");
        assert_eq!(format_time(59_999), "0:59");
    }

    #[test]
    fn formats_minutes() {
        assert_eq!(format_time(60_000), "1:00");
        assert_eq!(format_time(214_000), "3:34");
        assert_eq!(format_time(3_600_000), "60:00");
    }

    #[test]
    fn play_pause_icon_tracks_state() {
        assert_eq!(
            PlayPauseIcon::for_state(PlaybackState::Playing),
            PlayPauseIcon::Pause
        );
        assert_eq!(
            PlayPauseIcon::for_state(PlaybackState::Paused),
            PlayPauseIcon::Play
        );
        assert_eq!(
            PlayPauseIcon::for_state(PlaybackState::Idle),
            PlayPauseIcon::Play
        );
        assert_eq!(PlayPauseIcon::Pause.title(), "Pause");
        assert_eq!(PlayPauseIcon::Play.title(), "Play");
    }

    #[test]
    fn volume_icon_tiers() {
        assert_eq!(VolumeIcon::for_level(0.8, true), VolumeIcon::Muted);
        assert_eq!(VolumeIcon::for_level(0.0, false), VolumeIcon::Muted);
        assert_eq!(VolumeIcon::for_level(0.3, false), VolumeIcon::Low);
        assert_eq!(VolumeIcon::for_level(0.5, false), VolumeIcon::High);
        assert_eq!(VolumeIcon::for_level(1.0, false), VolumeIcon::High);
    }

    fn bound_surfaces() -> (UiSurfaces, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let push = |log: &Arc<Mutex<Vec<String>>>, tag: &'static str| {
            let log = Arc::clone(log);
            move |value: String| log.lock().unwrap().push(format!("{tag}={value}"))
        };

        let surfaces = UiSurfaces::builder()
            .track_title(push(&log, "title"))
            .artist_name(push(&log, "artist"))
            .album_art_url(push(&log, "art"))
            .elapsed_label(push(&log, "elapsed"))
            .total_label(push(&log, "total"))
            .progress_fraction({
                let log = Arc::clone(&log);
                move |f| log.lock().unwrap().push(format!("progress={f:.2}"))
            })
            .volume_fraction({
                let log = Arc::clone(&log);
                move |f| log.lock().unwrap().push(format!("volume={f:.2}"))
            })
            .volume_icon({
                let log = Arc::clone(&log);
                move |icon| log.lock().unwrap().push(format!("volume_icon={icon:?}"))
            })
            .play_pause_icon({
                let log = Arc::clone(&log);
                move |icon| log.lock().unwrap().push(format!("button={}", icon.title()))
            })
            .now_playing_badge({
                let log = Arc::clone(&log);
                move |id: Option<PlaylistId>| {
                    let text = id.map_or_else(|| "none".to_owned(), |id| id.to_string());
                    log.lock().unwrap().push(format!("badge={text}"));
                }
            })
            .error_banner(push(&log, "error"))
            .build()
            .unwrap();

        (surfaces, log)
    }

    #[test]
    fn builder_reports_every_missing_surface() {
        let err = UiSurfaces::builder()
            .track_title(|_| {})
            .build()
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("artist_name"), "{message}");
        assert!(message.contains("error_banner"), "{message}");
        assert!(!message.contains("track_title"), "{message}");
    }

    #[test]
    fn track_loaded_fills_header_and_clock() {
        let (surfaces, log) = bound_surfaces();
        let mut sync = UiSync::new(surfaces);

        sync.apply(&PlayerEvent::TrackLoaded {
            track_id: TrackId::new(5),
            title: "Night Drive".into(),
            artist_name: "The Commuters".into(),
            album_title: Some("Arterial".into()),
            artwork_url: "https://via.placeholder.com/56".into(),
            duration_ms: Some(214_000),
        });

        let log = log.lock().unwrap();
        assert!(log.contains(&"title=Night Drive".to_owned()));
        assert!(log.contains(&"artist=The Commuters".to_owned()));
        assert!(log.contains(&"art=https://via.placeholder.com/56".to_owned()));
        assert!(log.contains(&"elapsed=0:00".to_owned()));
        assert!(log.contains(&"total=3:34".to_owned()));
    }

    #[test]
    fn progress_updates_clock_and_bar() {
        let (surfaces, log) = bound_surfaces();
        let mut sync = UiSync::new(surfaces);

        sync.apply(&PlayerEvent::Progress {
            position_ms: 30_000,
            duration_ms: 120_000,
        });

        let log = log.lock().unwrap();
        assert!(log.contains(&"elapsed=0:30".to_owned()));
        assert!(log.contains(&"progress=0.25".to_owned()));
    }

    #[test]
    fn progress_with_unknown_duration_stays_at_zero() {
        let (surfaces, log) = bound_surfaces();
        let mut sync = UiSync::new(surfaces);

        sync.apply(&PlayerEvent::Progress {
            position_ms: 5_000,
            duration_ms: 0,
        });

        assert!(log.lock().unwrap().contains(&"progress=0.00".to_owned()));
    }

    #[test]
    fn mute_drains_the_volume_bar_but_keeps_the_level() {
        let (surfaces, log) = bound_surfaces();
        let mut sync = UiSync::new(surfaces);

        sync.apply(&PlayerEvent::VolumeChanged {
            fraction: 0.7,
            muted: true,
        });

        let log = log.lock().unwrap();
        assert!(log.contains(&"volume=0.00".to_owned()));
        assert!(log.contains(&"volume_icon=Muted".to_owned()));
    }

    #[test]
    fn state_changes_flip_the_button() {
        let (surfaces, log) = bound_surfaces();
        let mut sync = UiSync::new(surfaces);

        sync.apply(&PlayerEvent::StateChanged {
            state: PlaybackState::Playing,
        });
        sync.apply(&PlayerEvent::StateChanged {
            state: PlaybackState::Paused,
        });

        let log = log.lock().unwrap();
        assert_eq!(log[0], "button=Pause");
        assert_eq!(log[1], "button=Play");
    }

    #[test]
    fn badge_follows_playlist_activation() {
        let (surfaces, log) = bound_surfaces();
        let mut sync = UiSync::new(surfaces);

        sync.apply(&PlayerEvent::PlaylistActivated {
            playlist_id: Some(PlaylistId::new(3)),
        });
        sync.apply(&PlayerEvent::PlaylistActivated { playlist_id: None });

        let log = log.lock().unwrap();
        assert_eq!(log[0], "badge=3");
        assert_eq!(log[1], "badge=none");
    }
}
