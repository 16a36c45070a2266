//! Per-frame input coalescing
//!
//! Pointer drags and slider input arrive far faster than the display refreshes.
//! `FrameThrottle` keeps only the latest requested value and arms at most one
//! scheduled frame at a time: `request` records the value and tells the caller
//! whether a frame callback needs scheduling; `fire` consumes the value when
//! that frame arrives. Intermediate values are discarded, not queued.

/// Coalesces a stream of values into at most one applied update per frame
#[derive(Debug, Default)]
pub struct FrameThrottle<T> {
    latest: Option<T>,
    armed: bool,
}

impl<T> FrameThrottle<T> {
    pub fn new() -> Self {
        Self {
            latest: None,
            armed: false,
        }
    }

    /// Record a value. Returns true when the caller must schedule a frame
    /// callback; false means one is already pending and will pick this value
    /// up instead of the one it was armed with.
    pub fn request(&mut self, value: T) -> bool {
        self.latest = Some(value);
        if self.armed {
            false
        } else {
            self.armed = true;
            true
        }
    }

    /// Consume the pending value at the scheduled frame. Returns None for a
    /// frame that fires with nothing armed (e.g. after `cancel`).
    pub fn fire(&mut self) -> Option<T> {
        if !self.armed {
            return None;
        }
        self.armed = false;
        self.latest.take()
    }

    /// Drop any pending update. Callers must also cancel the scheduled frame
    /// callback itself; this only invalidates the value so a late frame
    /// becomes a no-op.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.latest = None;
    }

    /// A frame is currently scheduled and will apply a value
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
