//! Equal-angle slice partition
//!
//! N slices cover longitude [-90, 90] in equal steps of 180/N. Each slice
//! carries two angle conventions that must not be conflated:
//! - `lambda_start`/`lambda_end`: longitude in [-90, 90] for band geometry
//! - `center_angle`: position in the [0, 180) internal space used for
//!   active-set distance comparisons

use glam::Vec2;

use super::geometry::meridian_band;
use crate::consts::BAND_SAMPLES;

/// One slice of the partition
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub index: usize,
    /// Longitude of the leading boundary meridian (degrees)
    pub lambda_start: f32,
    /// Longitude of the trailing boundary meridian (degrees)
    pub lambda_end: f32,
    /// Slice center in internal [0, 180) space (degrees)
    pub center_angle: f32,
    /// Closed boundary polygon of the meridian band
    pub boundary: Vec<Vec2>,
}

/// The full partition for a given slice count, radius and center.
///
/// Pure function of its inputs; hosts may cache it keyed on
/// `(slice count, radius, center)` and recompute when any of them change.
#[derive(Debug, Clone, PartialEq)]
pub struct SlicePartition {
    pub slices: Vec<Slice>,
    /// Angular width of one slice (degrees), 180 / N
    pub delta_theta: f32,
}

impl SlicePartition {
    pub fn compute(slice_count: u32, center: Vec2, radius: f32) -> Self {
        let n = slice_count.max(1);
        let delta = 180.0 / n as f32;

        let slices = (0..n as usize)
            .map(|i| {
                let lambda_start = -90.0 + i as f32 * delta;
                let lambda_end = lambda_start + delta;
                Slice {
                    index: i,
                    lambda_start,
                    lambda_end,
                    center_angle: i as f32 * delta + delta / 2.0,
                    boundary: meridian_band(center, radius, lambda_start, lambda_end, BAND_SAMPLES),
                }
            })
            .collect();

        Self {
            slices,
            delta_theta: delta,
        }
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
