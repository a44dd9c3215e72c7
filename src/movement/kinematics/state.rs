//! Mutable per-character data.

use bevy::prelude::*;
use serde::Serialize;

/// Jump press memory.
///
/// `pressed_at` holds the time of the last rising edge of the jump button
/// and is cleared on the falling edge or when a jump consumes it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JumpBuffer {
    pub pressed_at: Option<f32>,
    pub last_input: bool,
}

impl JumpBuffer {
    /// Feed the current button state. Returns true on a rising edge.
    pub fn record(&mut self, now: f32, held: bool) -> bool {
        let rising = held && !self.last_input;
        if rising {
            self.pressed_at = Some(now);
        } else if !held && self.last_input {
            self.pressed_at = None;
        }
        self.last_input = held;
        rising
    }

    /// A press is consumable while `now - pressed_at < window`.
    pub fn is_live(&self, now: f32, window: f32) -> bool {
        self.pressed_at.is_some_and(|at| now - at < window)
    }

    pub fn consume(&mut self) {
        self.pressed_at = None;
    }
}

/// Which side a confirmed wall stop happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
}

/// The controller's implicit state machine, read off the flag pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MotionPhase {
    Grounded,
    Falling,
    /// Neither grounded nor falling: moving up, or at rest mid-air for the
    /// single tick before gravity kicks in.
    Ascending,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KinematicState {
    /// Center of the collider bounds.
    pub position: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
    /// Set as soon as `velocity.y < 0`; cleared only by a ground hit.
    pub falling: bool,
    pub jump: JumpBuffer,
    /// Last confirmed wall stop, reset every tick the wall probe runs.
    pub wall: WallContact,
}

impl KinematicState {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> MotionPhase {
        if self.grounded {
            MotionPhase::Grounded
        } else if self.falling {
            MotionPhase::Falling
        } else {
            MotionPhase::Ascending
        }
    }

    /// The ground probe only runs while grounded or descending.
    pub fn wants_ground_probe(&self) -> bool {
        self.grounded || self.falling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rising_edge_records_press_time() {
        let mut buffer = JumpBuffer::default();
        assert!(buffer.record(1.5, true));
        assert_eq!(buffer.pressed_at, Some(1.5));

        // Holding is not a new press.
        assert!(!buffer.record(1.6, true));
        assert_eq!(buffer.pressed_at, Some(1.5));
    }

    #[test]
    fn falling_edge_clears_press() {
        let mut buffer = JumpBuffer::default();
        buffer.record(0.0, true);
        buffer.record(0.02, false);
        assert_eq!(buffer.pressed_at, None);
        assert!(!buffer.is_live(0.03, 0.1));
    }

    #[test]
    fn press_expires_after_window() {
        let mut buffer = JumpBuffer::default();
        buffer.record(0.0, true);
        assert!(buffer.is_live(0.05, 0.1));
        assert!(!buffer.is_live(0.1, 0.1));
        assert!(!buffer.is_live(0.15, 0.1));
    }

    #[test]
    fn phase_follows_flags() {
        let mut state = KinematicState::default();
        assert_eq!(state.phase(), MotionPhase::Ascending);
        state.falling = true;
        assert_eq!(state.phase(), MotionPhase::Falling);
        state.grounded = true;
        state.falling = false;
        assert_eq!(state.phase(), MotionPhase::Grounded);
    }
}
