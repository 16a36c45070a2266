//! Dial configuration
//!
//! All host-supplied knobs are optional with defaults. Malformed values are
//! clamped here, at the boundary, so the engine itself never has to validate.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{normalize_signed_180, to_internal_from_signed};

/// Host-facing dial configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    /// Minimum slice count (inclusive)
    pub min_slices: u32,
    /// Maximum slice count (inclusive)
    pub max_slices: u32,
    /// Initial stick tilt in signed degrees [-90, 90]
    pub initial_angle: f32,
    /// Start the autoplay sweep at mount
    pub auto_play: bool,
    /// Reduced motion preference; zeroes the autoplay step
    pub reduced_motion: bool,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            min_slices: MIN_SLICES,
            max_slices: MAX_SLICES,
            initial_angle: 0.0,
            auto_play: false,
            reduced_motion: false,
        }
    }
}

impl DialConfig {
    /// Repair a misconfigured instance: slice bounds must satisfy
    /// `1 <= min <= max`, the initial angle must be finite.
    pub fn sanitized(mut self) -> Self {
        self.min_slices = self.min_slices.max(1);
        self.max_slices = self.max_slices.max(self.min_slices);
        if !self.initial_angle.is_finite() {
            self.initial_angle = 0.0;
        }
        self
    }

    /// Round a requested slice count to the nearest integer and clamp it to
    /// the configured bounds
    pub fn clamp_slices(&self, n: f32) -> u32 {
        if !n.is_finite() {
            return self.min_slices;
        }
        let rounded = n.round();
        let lo = self.min_slices as f32;
        let hi = self.max_slices as f32;
        rounded.clamp(lo, hi) as u32
    }

    /// Slice count used at mount, folded into the configured bounds
    pub fn initial_slices(&self) -> u32 {
        DEFAULT_SLICES.clamp(self.min_slices, self.max_slices)
    }

    /// Initial angle converted to the internal [0, 180] representation
    pub fn initial_internal_angle(&self) -> f32 {
        to_internal_from_signed(normalize_signed_180(self.initial_angle))
    }

    /// Autoplay step per frame, zero when reduced motion is requested
    pub fn autoplay_step(&self) -> f32 {
        if self.reduced_motion {
            0.0
        } else {
            AUTOPLAY_STEP_DEGREES
        }
    }
}
