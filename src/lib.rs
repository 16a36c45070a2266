//! Meridian Dial - an interactive circular dial core
//!
//! Core modules:
//! - `dial`: Deterministic dial engine (geometry, slice partition, active set,
//!   input throttling, autoplay, controller)
//! - `config`: Host-facing configuration with boundary clamping
//! - `platform`: Browser platform glue (frame handles, listener guards)

pub mod config;
pub mod dial;
pub mod platform;

pub use config::DialConfig;
pub use dial::{ActiveSet, Autoplay, DialController, DialState, FrameThrottle, SlicePartition};

use glam::Vec2;

/// Dial configuration constants
pub mod consts {
    /// Slice count bounds (inclusive)
    pub const MIN_SLICES: u32 = 2;
    pub const MAX_SLICES: u32 = 72;
    /// Slice count at mount
    pub const DEFAULT_SLICES: u32 = 12;

    /// Angular margin subtracted from half-slice-width to prevent boundary
    /// flicker (degrees)
    pub const GAP_DEGREES: f32 = 2.0;

    /// Samples per meridian sweep; controls smoothness only, not shape
    pub const BAND_SAMPLES: usize = 72;

    /// Autoplay sweep step per animation frame (internal degrees)
    pub const AUTOPLAY_STEP_DEGREES: f32 = 0.5;

    /// Signed angle bounds (user-facing stick tilt)
    pub const SIGNED_MIN: f32 = -90.0;
    pub const SIGNED_MAX: f32 = 90.0;
    /// Internal angle bounds (storage representation, signed + 90 folded)
    pub const INTERNAL_MIN: f32 = 0.0;
    pub const INTERNAL_MAX: f32 = 180.0;
}

/// Wrap an angle to [0, 360) degrees; negative inputs wrap positively
#[inline]
pub fn wrap360(angle: f32) -> f32 {
    let a = angle % 360.0;
    let a = if a < 0.0 { a + 360.0 } else { a };
    // f32 rounding can land a tiny negative input exactly on 360.0
    if a >= 360.0 { 0.0 } else { a }
}

/// Shortest-path angular separation between two angles, in [0, 180]
#[inline]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let diff = (wrap360(a) - wrap360(b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Fold any angle onto [0, 180] by mirroring values above 180 around the
/// 180 degree axis: 200 -> 160, 181 -> 179. The mirror is `360 - w`, not
/// `w - 180` (which would give 200 -> 20).
#[inline]
pub fn normalize_angle_180(angle: f32) -> f32 {
    let w = wrap360(angle);
    if w > 180.0 { 360.0 - w } else { w }
}

/// Wrap an angle to [-180, 180) degrees
#[inline]
pub fn normalize_signed_180(angle: f32) -> f32 {
    wrap360(angle + 180.0) - 180.0
}

/// Signed stick tilt [-90, 90] -> internal storage angle [0, 180]
#[inline]
pub fn to_internal_from_signed(signed: f32) -> f32 {
    normalize_angle_180(signed + 90.0)
}

/// Internal storage angle [0, 180] -> signed stick tilt [-90, 90]
#[inline]
pub fn to_signed_from_internal(internal: f32) -> f32 {
    normalize_signed_180(internal - 90.0)
}

/// Convert polar (r, theta in radians) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
