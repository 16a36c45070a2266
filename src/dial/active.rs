//! Active-set selection
//!
//! The stick is a diameter: one internal angle in [0, 180) stands for a full
//! physical rotation collapsed by symmetry, so each slice is tested against
//! both the angle and its antipode. A slice is active when the stick falls
//! strictly inside it, shrunk by the gap tolerance to avoid boundary flicker.

use std::collections::BTreeSet;

use crate::{angular_distance, normalize_angle_180};

/// The set of slice indices illuminated by the stick. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSet {
    indices: BTreeSet<usize>,
    /// Slice whose center is nearest the (non-antipodal) stick angle; used as
    /// the fallback and as the primary slice for announcements
    nearest: usize,
}

impl ActiveSet {
    /// Compute the active set for `angle` (internal degrees) over
    /// `slice_count` slices with the given gap tolerance (degrees).
    pub fn compute(slice_count: u32, gap: f32, angle: f32) -> Self {
        let n = slice_count.max(1);
        let delta = 180.0 / n as f32;
        let norm = normalize_angle_180(angle);

        let mut indices = BTreeSet::new();
        let mut nearest = 0;
        let mut nearest_dist = f32::INFINITY;

        for i in 0..n as usize {
            let center = i as f32 * delta + delta / 2.0;
            let dist1 = angular_distance(norm, center);
            let dist2 = angular_distance(norm + 180.0, center);
            let min_dist = dist1.min(dist2);

            if min_dist <= delta / 2.0 - gap {
                indices.insert(i);
            }
            if dist1 < nearest_dist {
                nearest_dist = dist1;
                nearest = i;
            }
        }

        // Very fine partitions (delta/2 <= gap) can leave nothing qualified;
        // force the nearest slice so the set is never empty
        if indices.is_empty() {
            indices.insert(nearest);
        }

        Self { indices, nearest }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// First active index; the set is never empty after `compute`
    pub fn primary(&self) -> Option<usize> {
        self.indices.iter().next().copied()
    }

    /// Slice nearest the stick angle (fallback candidate)
    pub fn nearest(&self) -> usize {
        self.nearest
    }

    /// Indices entering and leaving between `previous` and `self`.
    ///
    /// Callers fire activation callbacks for `entered` before deactivation
    /// callbacks for `exited` within one change event.
    pub fn diff_from(&self, previous: &ActiveSet) -> ActiveDiff {
        ActiveDiff {
            entered: self.indices.difference(&previous.indices).copied().collect(),
            exited: previous.indices.difference(&self.indices).copied().collect(),
        }
    }
}

/// Transition between two active sets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveDiff {
    pub entered: Vec<usize>,
    pub exited: Vec<usize>,
}

impl ActiveDiff {
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}
