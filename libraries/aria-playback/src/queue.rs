//! Linear playback queue
//!
//! Ordered sequence of track identifiers plus a cursor. The cursor is
//! `None` exactly when the sequence is empty; advancing past the last
//! index reports exhaustion rather than wrapping (no repeat-by-default).

use aria_core::types::TrackId;

/// Outcome of advancing the queue cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The cursor moved to the next track
    Next(TrackId),

    /// No further track exists; terminal for this queue
    Exhausted,
}

/// Linear queue of track identifiers
#[derive(Debug, Clone, Default)]
pub struct PlaybackQueue {
    tracks: Vec<TrackId>,
    cursor: Option<usize>,
}

impl PlaybackQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            cursor: None,
        }
    }

    /// Replace the queue contents and reset the cursor to the first track
    ///
    /// An empty list leaves the queue cleared; callers report that as an
    /// empty playlist before ever reaching this point.
    pub fn load(&mut self, tracks: Vec<TrackId>) {
        self.cursor = if tracks.is_empty() { None } else { Some(0) };
        self.tracks = tracks;
    }

    /// The track under the cursor, if any
    pub fn current(&self) -> Option<TrackId> {
        self.cursor.and_then(|i| self.tracks.get(i).copied())
    }

    /// Move the cursor to the next track
    ///
    /// Returns [`Advance::Exhausted`] when no further track exists; the
    /// cursor stays on the last index, so repeated calls keep reporting
    /// exhaustion instead of wrapping.
    pub fn advance(&mut self) -> Advance {
        match self.cursor {
            Some(i) if i + 1 < self.tracks.len() => {
                self.cursor = Some(i + 1);
                Advance::Next(self.tracks[i + 1])
            }
            _ => Advance::Exhausted,
        }
    }

    /// Whether a further track exists past the cursor
    pub fn has_next(&self) -> bool {
        matches!(self.cursor, Some(i) if i + 1 < self.tracks.len())
    }

    /// Reset to the empty queue
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.cursor = None;
    }

    /// Number of tracks in the queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
