//! Keyboard contract
//!
//! Maps browser `KeyboardEvent.key` names to signed-angle commands. Arrow keys
//! step relative to the current tilt, Home/End jump to the bounds; everything
//! clamps to [-90, 90].

use crate::consts::{SIGNED_MAX, SIGNED_MIN};

/// A key the dial responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
}

impl DialKey {
    /// Parse a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }

    /// Apply this key to a signed angle, clamped to [-90, 90]
    pub fn apply(self, signed: f32) -> f32 {
        let next = match self {
            Self::ArrowLeft => signed - 1.0,
            Self::ArrowRight => signed + 1.0,
            Self::ArrowUp => signed - 10.0,
            Self::ArrowDown => signed + 10.0,
            Self::Home => return SIGNED_MIN,
            Self::End => return SIGNED_MAX,
        };
        next.clamp(SIGNED_MIN, SIGNED_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_steps() {
        assert_eq!(DialKey::ArrowLeft.apply(0.0), -1.0);
        assert_eq!(DialKey::ArrowRight.apply(0.0), 1.0);
        assert_eq!(DialKey::ArrowUp.apply(0.0), -10.0);
        assert_eq!(DialKey::ArrowDown.apply(0.0), 10.0);
    }

    #[test]
    fn test_steps_clamp_at_bounds() {
        assert_eq!(DialKey::ArrowRight.apply(90.0), 90.0);
        assert_eq!(DialKey::ArrowLeft.apply(-90.0), -90.0);
        assert_eq!(DialKey::ArrowDown.apply(85.0), 90.0);
        assert_eq!(DialKey::ArrowUp.apply(-85.0), -90.0);
    }

    #[test]
    fn test_home_end_jump_regardless_of_prior() {
        for prior in [-90.0, -37.0, 0.0, 64.5, 90.0] {
            assert_eq!(DialKey::Home.apply(prior), -90.0);
            assert_eq!(DialKey::End.apply(prior), 90.0);
        }
    }

    #[test]
    fn test_from_key_names() {
        assert_eq!(DialKey::from_key("ArrowLeft"), Some(DialKey::ArrowLeft));
        assert_eq!(DialKey::from_key("Home"), Some(DialKey::Home));
        assert_eq!(DialKey::from_key("End"), Some(DialKey::End));
        assert_eq!(DialKey::from_key("Enter"), None);
        assert_eq!(DialKey::from_key("a"), None);
    }
}
