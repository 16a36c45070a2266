//! Deterministic dial engine
//!
//! All dial logic lives here. This module must stay pure and deterministic:
//! - Degrees in, points out; no internal randomness
//! - Frame-driven mutation only (one committed update per tick)
//! - No rendering or platform dependencies

pub mod active;
pub mod autoplay;
pub mod controller;
pub mod geometry;
pub mod hotkeys;
pub mod slices;
pub mod throttle;

pub use active::{ActiveDiff, ActiveSet};
pub use autoplay::{Autoplay, Direction};
pub use controller::{DialController, DialState};
pub use geometry::{meridian_band, meridian_curve, svg_path_data};
pub use hotkeys::DialKey;
pub use slices::{Slice, SlicePartition};
pub use throttle::FrameThrottle;
