//! Volume control
//!
//! Fraction-based volume (0.0-1.0) with mute/unmute. The live output
//! device takes a linear 0..1 volume, so no perceptual curve is applied
//! here; the device side owns that concern.

/// Volume controller
///
/// Mute preserves the underlying level so unmuting restores it.
#[derive(Debug, Clone)]
pub struct Volume {
    /// Volume fraction (0.0-1.0)
    fraction: f32,

    /// Mute state (preserves the fraction)
    muted: bool,
}

impl Volume {
    /// Create a new volume controller
    ///
    /// # Arguments
    /// * `fraction` - Initial volume (0.0-1.0, clamped)
    pub fn new(fraction: f32) -> Self {
        Self {
            fraction: clamp_fraction(fraction),
            muted: false,
        }
    }

    /// Set the volume fraction (clamped to 0.0-1.0, never panics)
    pub fn set_fraction(&mut self, fraction: f32) {
        self.fraction = clamp_fraction(fraction);
    }

    /// Get the current volume fraction
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Mute audio (preserves the fraction)
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute audio (restores the previous fraction)
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Effective output fraction: 0.0 when muted
    pub fn effective(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.fraction
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Clamp to [0, 1]; non-finite input falls back to silence
fn clamp_fraction(fraction: f32) -> f32 {
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
