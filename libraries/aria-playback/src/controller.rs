//! Playback controller - core orchestration
//!
//! Mediates between the catalog, the media probe, the transport, and the
//! queue. Owns the playback session (the single source of truth the UI
//! reads from via events) and the generation counter that fences stale
//! asynchronous continuations.
//!
//! Concurrency model: suspension points are exactly the three boundary
//! calls (metadata resolution, media probing, device play commitment).
//! Starting a new load bumps the generation synchronously, before any
//! await; every deferred continuation compares its captured generation
//! against the current one before mutating session or transport state,
//! and stale continuations are dropped silently. That fencing is the sole
//! cancellation mechanism, and it guarantees at most one committed source
//! per session no matter how many overlapping loads were requested.

use crate::{
    error::{PlayerError, Result},
    events::PlayerEvent,
    probe::MediaProbe,
    queue::{Advance, PlaybackQueue},
    transport::{Transport, TransportEvent},
    types::{PlaybackSession, PlaybackState, PlayerConfig},
    volume::Volume,
};
use aria_core::types::{PlaylistId, TrackId};
use aria_core::Catalog;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Central playback controller
///
/// Exposes the entry points the UI calls (`play_track`,
/// `play_queue_from_playlist`, `toggle_play_pause`, seek/volume/mute) and
/// absorbs every failure at its boundary: a terminal `Failed` state plus
/// exactly one reported [`PlayerEvent::Error`]. Nothing is retried
/// automatically; the only implicit retry is the user selecting a track
/// again.
pub struct PlayerController {
    catalog: Arc<dyn Catalog>,
    probe: Arc<dyn MediaProbe>,
    transport: Arc<dyn Transport>,

    session: Mutex<PlaybackSession>,
    queue: Mutex<PlaybackQueue>,
    volume: Mutex<Volume>,

    /// Monotonic fencing token; bumped synchronously on every new load
    generation: AtomicU64,

    events: broadcast::Sender<PlayerEvent>,
}

impl PlayerController {
    /// Create a new controller over the given collaborators
    pub fn new(
        config: PlayerConfig,
        catalog: Arc<dyn Catalog>,
        probe: Arc<dyn MediaProbe>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            catalog,
            probe,
            transport,
            session: Mutex::new(PlaybackSession::new()),
            queue: Mutex::new(PlaybackQueue::new()),
            volume: Mutex::new(Volume::new(config.initial_volume)),
            generation: AtomicU64::new(0),
            events,
        }
    }

    /// Subscribe to player events
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.events.subscribe()
    }

    /// Snapshot of the current session
    pub fn session(&self) -> PlaybackSession {
        lock(&self.session).clone()
    }

    // ===== Entry points =====

    /// Load and play a single track
    ///
    /// Bumps the generation (invalidating any in-flight load), resolves
    /// the track, probes its media, and commits it to the transport.
    /// Failures end in `Failed` with one error event; stale results are
    /// discarded without touching the session or the transport.
    pub async fn play_track(&self, id: TrackId) {
        let generation = self.bump_generation();
        self.start_load(generation, id).await;
    }

    /// Load the queue from a playlist and start playing its first track
    ///
    /// Bumps the generation before the playlist fetch, so an older track
    /// load settling mid-fetch is already superseded. An empty playlist is
    /// reported once, clears any prior playlist association, and leaves
    /// the transport untouched.
    pub async fn play_queue_from_playlist(&self, id: PlaylistId) {
        let generation = self.bump_generation();
        debug!(playlist_id = %id, generation, "Loading queue from playlist");

        let track_ids = match self.catalog.playlist_tracks(id).await {
            Ok(ids) => ids,
            Err(err) => {
                if self.is_current(generation) {
                    self.fail_session(&err);
                } else {
                    debug!(playlist_id = %id, generation, error = %err, "Stale playlist failure dropped");
                }
                return;
            }
        };
        if !self.is_current(generation) {
            debug!(playlist_id = %id, generation, "Stale playlist resolution dropped");
            return;
        }

        if track_ids.is_empty() {
            lock(&self.queue).clear();
            lock(&self.session).playlist = None;
            self.emit(PlayerEvent::QueueChanged { length: 0 });
            self.emit(PlayerEvent::PlaylistActivated { playlist_id: None });
            self.report_error(&PlayerError::EmptyPlaylist(id));
            return;
        }

        let first = track_ids[0];
        let length = track_ids.len();
        lock(&self.queue).load(track_ids);
        lock(&self.session).playlist = Some(id);
        self.emit(PlayerEvent::QueueChanged { length });
        self.emit(PlayerEvent::PlaylistActivated {
            playlist_id: Some(id),
        });

        self.start_load(generation, first).await;
    }

    /// Flip between playing and paused
    ///
    /// A logged no-op when no source is committed yet.
    pub async fn toggle_play_pause(&self) {
        let state = lock(&self.session).state;
        match state {
            PlaybackState::Playing => {
                self.transport.pause();
                self.set_state(PlaybackState::Paused);
            }
            PlaybackState::Paused => {
                let generation = self.current_generation();
                match self.transport.play().await {
                    Ok(()) if self.is_current(generation) => {
                        self.set_state(PlaybackState::Playing);
                    }
                    Ok(()) => {
                        debug!(generation, "Stale resume dropped");
                    }
                    Err(err) => {
                        if self.is_current(generation) {
                            self.fail_session(&err);
                        }
                    }
                }
            }
            _ => {
                debug!(state = ?state, "Toggle ignored, no committed source");
            }
        }
    }

    /// Seek to a fraction of the committed media's duration
    ///
    /// The fraction is clamped to [0, 1]. A no-op when no source is
    /// committed or the duration is not yet known.
    pub fn seek_to_fraction(&self, fraction: f64) {
        if !lock(&self.session).state.has_committed_source() {
            debug!("Seek ignored, no committed source");
            return;
        }
        let Some(duration) = self.transport.duration() else {
            debug!("Seek ignored, duration unknown");
            return;
        };

        let fraction = clamp_unit_f64(fraction);
        self.transport.seek_to(duration.mul_f64(fraction));
    }

    /// Set the volume fraction (clamped to [0, 1])
    ///
    /// The fraction is always recorded and reported so the volume bar
    /// stays live; it is passed through to the device only while a source
    /// is committed (it is re-applied on the next commit).
    pub fn set_volume_fraction(&self, fraction: f32) {
        let (fraction, muted) = {
            let mut volume = lock(&self.volume);
            volume.set_fraction(fraction);
            (volume.fraction(), volume.is_muted())
        };

        if lock(&self.session).state.has_committed_source() {
            self.transport.set_volume(fraction);
        }
        self.emit(PlayerEvent::VolumeChanged { fraction, muted });
    }

    /// Toggle mute, preserving the volume level
    pub fn toggle_mute(&self) {
        let (fraction, muted) = {
            let mut volume = lock(&self.volume);
            volume.toggle_mute();
            (volume.fraction(), volume.is_muted())
        };

        if lock(&self.session).state.has_committed_source() {
            self.transport.set_muted(muted);
        }
        self.emit(PlayerEvent::VolumeChanged { fraction, muted });
    }

    // ===== Transport events =====

    /// Pump transport events until the device channel closes
    pub async fn run(self: Arc<Self>) {
        let mut receiver = self.transport.subscribe();
        loop {
            match receiver.recv().await {
                Ok(event) => self.handle_transport_event(event).await,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Transport events lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }

    /// React to a single device event
    pub async fn handle_transport_event(&self, event: TransportEvent) {
        match event {
            TransportEvent::MetadataReady { duration_ms } => {
                if let Some(track) = lock(&self.session).track.as_mut() {
                    track.duration_ms = Some(duration_ms);
                }
                self.emit(PlayerEvent::DurationKnown { duration_ms });
            }
            TransportEvent::TimeAdvanced {
                position_ms,
                duration_ms,
            } => {
                self.emit(PlayerEvent::Progress {
                    position_ms,
                    duration_ms,
                });
            }
            TransportEvent::Ended => self.on_ended().await,
            TransportEvent::Error { reason } => {
                if lock(&self.session).state.has_committed_source() {
                    self.fail_session(&PlayerError::Other(reason));
                } else {
                    debug!(reason, "Device error without committed source dropped");
                }
            }
        }
    }

    async fn on_ended(&self) {
        self.set_state(PlaybackState::Ended);

        match lock(&self.queue).advance() {
            Advance::Next(next) => {
                debug!(track_id = %next, "Advancing queue");
                self.play_track(next).await;
            }
            Advance::Exhausted => {
                debug!("Queue exhausted");
                self.transport.stop();
                {
                    let mut session = lock(&self.session);
                    session.track = None;
                    session.playlist = None;
                }
                self.emit(PlayerEvent::Progress {
                    position_ms: 0,
                    duration_ms: 0,
                });
                self.emit(PlayerEvent::PlaylistActivated { playlist_id: None });
                self.set_state(PlaybackState::Idle);
            }
        }
    }

    // ===== Load pipeline =====

    /// Take ownership of the session by invalidating every in-flight load
    fn bump_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Run the load pipeline under an already-claimed generation
    async fn start_load(&self, generation: u64, id: TrackId) {
        if let Err(err) = self.load_and_play(generation, id).await {
            if self.is_current(generation) {
                self.fail_session(&err);
            } else {
                debug!(track_id = %id, generation, error = %err, "Stale load failure dropped");
            }
        }
    }

    async fn load_and_play(&self, generation: u64, id: TrackId) -> Result<()> {
        self.set_state(PlaybackState::Loading);
        debug!(track_id = %id, generation, "Resolving track");

        let descriptor = self.catalog.track(id).await?;
        if !self.is_current(generation) {
            debug!(track_id = %id, generation, "Stale resolution dropped");
            return Ok(());
        }

        self.emit(PlayerEvent::TrackLoaded {
            track_id: descriptor.id,
            title: descriptor.title.clone(),
            artist_name: descriptor.artist_name.clone(),
            album_title: descriptor.album_title.clone(),
            artwork_url: descriptor.artwork_url(),
            duration_ms: descriptor.duration_ms,
        });

        let media_url = descriptor.media_url.clone();
        lock(&self.session).track = Some(descriptor);
        self.set_state(PlaybackState::Probing);

        debug!(track_id = %id, url = %media_url, "Probing media");
        self.probe.probe(&media_url).await?;
        if !self.is_current(generation) {
            debug!(track_id = %id, generation, "Stale probe result dropped");
            return Ok(());
        }

        // Commit: the location passed the probe for this generation
        self.transport.load(&media_url);
        {
            let volume = lock(&self.volume);
            self.transport.set_volume(volume.fraction());
            self.transport.set_muted(volume.is_muted());
        }

        self.transport.play().await?;
        if !self.is_current(generation) {
            debug!(track_id = %id, generation, "Stale play commitment dropped");
            return Ok(());
        }

        self.set_state(PlaybackState::Playing);
        Ok(())
    }

    // ===== Internals =====

    fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn is_current(&self, generation: u64) -> bool {
        self.current_generation() == generation
    }

    fn set_state(&self, state: PlaybackState) {
        lock(&self.session).state = state;
        self.emit(PlayerEvent::StateChanged { state });
    }

    /// Absorb a failure: clear any stale source, enter `Failed`, report once
    fn fail_session(&self, err: &PlayerError) {
        warn!(error = %err, "Playback failed");
        self.transport.stop();
        self.report_error(err);
        self.emit(PlayerEvent::Progress {
            position_ms: 0,
            duration_ms: 0,
        });
        self.set_state(PlaybackState::Failed);
    }

    fn report_error(&self, err: &PlayerError) {
        self.emit(PlayerEvent::Error {
            message: err.to_string(),
        });
    }

    fn emit(&self, event: PlayerEvent) {
        // Nobody listening is fine
        let _ = self.events.send(event);
    }
}

/// Lock a mutex, recovering the guard if a panicking thread poisoned it
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn clamp_unit_f64(fraction: f64) -> f64 {
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
