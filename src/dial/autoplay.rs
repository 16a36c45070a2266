//! Autoplay sweep
//!
//! A self-driving oscillator that walks the internal angle between 0 and 180
//! degrees, one step per animation frame, reversing exactly at the bounds.
//! It reads whatever the authoritative angle is at each tick, so external
//! control (drag, keyboard, slider) can override it between frames.

use serde::{Deserialize, Serialize};

use crate::consts::{INTERNAL_MAX, INTERNAL_MIN};

/// Sweep direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Direction {
    /// Toward 180 internal (+90 signed)
    #[default]
    Ascending,
    /// Toward 0 internal (-90 signed)
    Descending,
}

impl Direction {
    fn sign(self) -> f32 {
        match self {
            Direction::Ascending => 1.0,
            Direction::Descending => -1.0,
        }
    }
}

/// Per-frame oscillation generator
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Autoplay {
    /// Step magnitude per frame in internal degrees; zero under reduced motion
    pub step: f32,
    pub direction: Direction,
    enabled: bool,
}

impl Autoplay {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            direction: Direction::Ascending,
            enabled: true,
        }
    }

    /// Whether the host should keep scheduling frames for this driver
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Stop the sweep; the host must cancel any pending frame callback
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Advance one frame from the current internal angle, clamping exactly to
    /// the bound and reversing when it is reached. Disabled drivers return
    /// the angle unchanged.
    pub fn tick(&mut self, current: f32) -> f32 {
        if !self.enabled {
            return current;
        }
        let mut next = current + self.direction.sign() * self.step;
        if next >= INTERNAL_MAX {
            next = INTERNAL_MAX;
            self.direction = Direction::Descending;
        }
        if next <= INTERNAL_MIN {
            next = INTERNAL_MIN;
            self.direction = Direction::Ascending;
        }
        next
    }
}
