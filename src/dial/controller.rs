//! Dial state and orchestration
//!
//! `DialController` owns the committed `{slices, angle}` pair - or mirrors it
//! when the host supplies the state externally - applies boundary clamps,
//! converts between signed and internal angle representations, and recomputes
//! the active set on every commit, firing enter/exit notifications.

use serde::{Deserialize, Serialize};

use super::active::ActiveSet;
use super::hotkeys::DialKey;
use crate::config::DialConfig;
use crate::consts::GAP_DEGREES;
use crate::{normalize_angle_180, to_internal_from_signed, to_signed_from_internal};

/// The single unit of mutable dial state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DialState {
    /// Number of slices in the partition
    pub slices: u32,
    /// Stick angle in internal degrees [0, 180]
    pub angle: f32,
}

type ChangeCallback = Box<dyn FnMut(DialState)>;
type SliceCallback = Box<dyn FnMut(usize)>;

/// Where the committed state lives. Resolved once at construction: either the
/// controller owns a mutable cell, or every write is forwarded through the
/// host's callback and only a read mirror is kept. Never both.
enum Backing {
    Owned(DialState),
    External {
        mirror: DialState,
        on_change: ChangeCallback,
    },
}

/// Orchestrates angle state, clamping and active-set notifications
pub struct DialController {
    config: DialConfig,
    backing: Backing,
    active: ActiveSet,
    on_activate: Option<SliceCallback>,
    on_deactivate: Option<SliceCallback>,
}

impl DialController {
    /// Uncontrolled mode: the controller owns its state
    pub fn new(config: DialConfig) -> Self {
        let config = config.sanitized();
        let state = DialState {
            slices: config.initial_slices(),
            angle: config.initial_internal_angle(),
        };
        let active = ActiveSet::compute(state.slices, GAP_DEGREES, state.angle);
        log::debug!(
            "dial mounted: {} slices, internal angle {}",
            state.slices,
            state.angle
        );
        Self {
            config,
            backing: Backing::Owned(state),
            active,
            on_activate: None,
            on_deactivate: None,
        }
    }

    /// Controlled mode: the host owns the state and receives every update
    /// through `on_change`; the controller keeps a read mirror only.
    pub fn controlled(
        config: DialConfig,
        initial: DialState,
        on_change: impl FnMut(DialState) + 'static,
    ) -> Self {
        let config = config.sanitized();
        let active = ActiveSet::compute(initial.slices, GAP_DEGREES, initial.angle);
        Self {
            config,
            backing: Backing::External {
                mirror: initial,
                on_change: Box::new(on_change),
            },
            active,
            on_activate: None,
            on_deactivate: None,
        }
    }

    /// Callback fired once per slice index entering the active set
    pub fn on_slice_activate(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_activate = Some(Box::new(callback));
    }

    /// Callback fired once per slice index leaving the active set
    pub fn on_slice_deactivate(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_deactivate = Some(Box::new(callback));
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    /// Committed state (owned cell or external mirror)
    pub fn state(&self) -> DialState {
        match &self.backing {
            Backing::Owned(state) => *state,
            Backing::External { mirror, .. } => *mirror,
        }
    }

    /// User-facing stick tilt in [-90, 90]
    pub fn signed_angle(&self) -> f32 {
        to_signed_from_internal(self.state().angle)
    }

    /// Slices currently illuminated by the stick
    pub fn active_slices(&self) -> &ActiveSet {
        &self.active
    }

    /// Request a slice count; rounded to the nearest integer and clamped to
    /// the configured bounds. The angle stays put in internal space (only
    /// re-normalized).
    pub fn set_slice_count(&mut self, n: f32) {
        let state = self.state();
        let next = DialState {
            slices: self.config.clamp_slices(n),
            angle: normalize_angle_180(state.angle),
        };
        self.commit(next);
    }

    /// Commit a signed stick tilt
    pub fn set_signed_angle(&mut self, signed: f32) {
        let state = self.state();
        let next = DialState {
            slices: state.slices,
            angle: to_internal_from_signed(signed),
        };
        self.commit(next);
    }

    /// Commit an internal angle directly (autoplay path)
    pub fn set_internal_angle(&mut self, internal: f32) {
        let state = self.state();
        let next = DialState {
            slices: state.slices,
            angle: normalize_angle_180(internal),
        };
        self.commit(next);
    }

    /// Apply a keyboard command to the current tilt
    pub fn handle_key(&mut self, key: DialKey) {
        self.set_signed_angle(key.apply(self.signed_angle()));
    }

    /// Controlled mode: the host committed a new state on its own; refresh
    /// the mirror and the active set without echoing through `on_change`.
    pub fn sync(&mut self, state: DialState) {
        self.refresh_active(state);
        if let Backing::External { mirror, .. } = &mut self.backing {
            *mirror = state;
        }
    }

    fn commit(&mut self, next: DialState) {
        self.refresh_active(next);
        match &mut self.backing {
            Backing::Owned(state) => *state = next,
            Backing::External { mirror, on_change } => {
                *mirror = next;
                on_change(next);
            }
        }
    }

    fn refresh_active(&mut self, next: DialState) {
        let next_active = ActiveSet::compute(next.slices, GAP_DEGREES, next.angle);
        let diff = next_active.diff_from(&self.active);
        // Entered notifications fire before exited within one change event
        if let Some(callback) = &mut self.on_activate {
            for &index in &diff.entered {
                callback(index);
            }
        }
        if let Some(callback) = &mut self.on_deactivate {
            for &index in &diff.exited {
                callback(index);
            }
        }
        if !diff.is_empty() {
            log::trace!(
                "active set changed: +{:?} -{:?} (primary {:?})",
                diff.entered,
                diff.exited,
                next_active.primary()
            );
        }
        self.active = next_active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_mount_defaults() {
        let controller = DialController::new(DialConfig::default());
        let state = controller.state();
        assert_eq!(state.slices, 12);
        assert_eq!(state.angle, 90.0); // signed 0 at the midpoint
        assert_eq!(controller.signed_angle(), 0.0);
        assert!(!controller.active_slices().is_empty());
    }

    #[test]
    fn test_slice_count_clamping() {
        let mut controller = DialController::new(DialConfig::default());
        controller.set_slice_count(1000.0);
        assert_eq!(controller.state().slices, 72);
        controller.set_slice_count(-5.0);
        assert_eq!(controller.state().slices, 2);
        controller.set_slice_count(11.7);
        assert_eq!(controller.state().slices, 12);
    }

    #[test]
    fn test_signed_angle_round_trip() {
        let mut controller = DialController::new(DialConfig::default());
        controller.set_signed_angle(45.0);
        assert_eq!(controller.state().angle, 135.0);
        assert_eq!(controller.signed_angle(), 45.0);
    }

    #[test]
    fn test_keyboard_home_end() {
        let mut controller = DialController::new(DialConfig::default());
        controller.set_signed_angle(33.0);
        controller.handle_key(DialKey::Home);
        assert_eq!(controller.signed_angle(), -90.0);
        controller.handle_key(DialKey::End);
        assert_eq!(controller.signed_angle(), 90.0);
        controller.handle_key(DialKey::ArrowRight);
        assert_eq!(controller.signed_angle(), 90.0); // clamped
    }

    #[test]
    fn test_enter_exit_notifications() {
        let entered = Rc::new(RefCell::new(Vec::new()));
        let exited = Rc::new(RefCell::new(Vec::new()));

        let mut controller = DialController::new(DialConfig::default());
        {
            let entered = entered.clone();
            controller.on_slice_activate(move |i| entered.borrow_mut().push(i));
        }
        {
            let exited = exited.clone();
            controller.on_slice_deactivate(move |i| exited.borrow_mut().push(i));
        }

        // Mount active set sits on slice 5/6 boundary fallback; move the
        // stick well into slice 2 (internal 37.5 = signed -52.5)
        controller.set_signed_angle(-52.5);
        assert!(entered.borrow().contains(&2));
        assert!(!exited.borrow().is_empty());

        // Committing the same angle again changes nothing
        let enter_count = entered.borrow().len();
        controller.set_signed_angle(-52.5);
        assert_eq!(entered.borrow().len(), enter_count);
    }

    #[test]
    fn test_controlled_mode_forwards_writes() {
        let committed: Rc<RefCell<Vec<DialState>>> = Rc::new(RefCell::new(Vec::new()));
        let initial = DialState {
            slices: 12,
            angle: 90.0,
        };

        let sink = committed.clone();
        let mut controller = DialController::controlled(DialConfig::default(), initial, move |s| {
            sink.borrow_mut().push(s)
        });

        controller.set_signed_angle(10.0);
        assert_eq!(committed.borrow().len(), 1);
        assert_eq!(committed.borrow()[0].angle, 100.0);
        // Mirror tracks the forwarded write
        assert_eq!(controller.state().angle, 100.0);
    }

    #[test]
    fn test_controlled_mode_sync_does_not_echo() {
        let committed: Rc<RefCell<Vec<DialState>>> = Rc::new(RefCell::new(Vec::new()));
        let initial = DialState {
            slices: 12,
            angle: 90.0,
        };

        let sink = committed.clone();
        let mut controller = DialController::controlled(DialConfig::default(), initial, move |s| {
            sink.borrow_mut().push(s)
        });

        controller.sync(DialState {
            slices: 12,
            angle: 7.5,
        });
        assert!(committed.borrow().is_empty());
        assert_eq!(controller.state().angle, 7.5);
        assert!(controller.active_slices().contains(0));
    }

    #[test]
    fn test_slice_count_change_renormalizes_angle() {
        let mut controller = DialController::new(DialConfig::default());
        controller.set_signed_angle(30.0);
        controller.set_slice_count(24.0);
        // Angle unchanged in internal space
        assert_eq!(controller.state().angle, 120.0);
        assert_eq!(controller.state().slices, 24);
    }
}
