//! Velocity integration: gravity, lateral acceleration/deceleration and the
//! jump impulse.

use super::config::{ControllerConfig, JumpTrigger};
use super::observer::JumpReport;
use super::state::KinematicState;

/// Accumulate gravity while airborne, clamped to the terminal fall speed,
/// and raise `falling` as soon as the character moves down.
pub fn apply_gravity(state: &mut KinematicState, config: &ControllerConfig, dt: f32) {
    if !state.grounded {
        state.velocity.y = (state.velocity.y - config.gravity * dt).max(-config.max_fall);
    }

    if state.velocity.y < 0.0 {
        state.falling = true;
    }
}

/// Clamp a raw input axis into `[-1, 1]`, treating NaN as no input.
pub fn sanitize_axis(axis: f32) -> f32 {
    if axis.is_nan() {
        0.0
    } else {
        axis.clamp(-1.0, 1.0)
    }
}

/// Accelerate along the input axis, or step-decelerate toward zero without
/// input. Deceleration stops at zero instead of flipping direction.
pub fn apply_lateral(state: &mut KinematicState, config: &ControllerConfig, axis: f32, dt: f32) {
    let axis = sanitize_axis(axis);
    let vx = state.velocity.x;

    let vx = if axis != 0.0 {
        vx + config.acceleration(state.grounded) * axis * dt
    } else if vx != 0.0 {
        let step = config.deceleration(state.grounded) * dt;
        if vx > 0.0 {
            (vx - step).max(0.0)
        } else {
            (vx + step).min(0.0)
        }
    } else {
        vx
    };

    state.velocity.x = vx.clamp(-config.max_speed, config.max_speed);
}

/// Feed the jump button for this frame and launch if a press is consumable
/// while grounded. A jump always clears `grounded` in the same call.
pub fn try_jump(
    state: &mut KinematicState,
    config: &ControllerConfig,
    now: f32,
    held: bool,
) -> Option<JumpReport> {
    let rising = state.jump.record(now, held);

    let triggered = match config.jump_trigger {
        JumpTrigger::Buffered => {
            state.grounded && state.jump.is_live(now, config.jump_buffer_window)
        }
        JumpTrigger::Immediate => state.grounded && rising,
    };
    if !triggered {
        return None;
    }

    let pressed_at = state.jump.pressed_at.unwrap_or(now);
    let velocity = config.jump_velocity();
    state.grounded = false;
    state.falling = false;
    state.velocity.y = velocity;
    state.jump.consume();

    Some(JumpReport {
        at: now,
        velocity,
        buffered_for: now - pressed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::kinematics::config::JumpImpulse;
    use bevy::prelude::*;

    #[test]
    fn gravity_is_clamped_to_terminal_speed() {
        let config = ControllerConfig::default();
        let mut state = KinematicState::default();
        for _ in 0..500 {
            apply_gravity(&mut state, &config, 1.0 / 50.0);
            assert!(state.velocity.y >= -config.max_fall);
        }
        assert_eq!(state.velocity.y, -config.max_fall);
        assert!(state.falling);
    }

    #[test]
    fn grounded_characters_ignore_gravity() {
        let config = ControllerConfig::default();
        let mut state = KinematicState {
            grounded: true,
            ..Default::default()
        };
        apply_gravity(&mut state, &config, 0.02);
        assert_eq!(state.velocity.y, 0.0);
        assert!(!state.falling);
    }

    #[test]
    fn falling_is_set_even_while_grounded() {
        let config = ControllerConfig::default();
        let mut state = KinematicState {
            grounded: true,
            velocity: Vec2::new(0.0, -1.0),
            ..Default::default()
        };
        apply_gravity(&mut state, &config, 0.02);
        assert!(state.falling);
    }

    #[test]
    fn sustained_input_reaches_exactly_max_speed() {
        let config = ControllerConfig::default();
        let mut state = KinematicState {
            grounded: true,
            ..Default::default()
        };
        for _ in 0..1000 {
            apply_lateral(&mut state, &config, 1.0, 0.02);
            assert!(state.velocity.x <= config.max_speed);
        }
        assert_eq!(state.velocity.x, config.max_speed);

        for _ in 0..1000 {
            apply_lateral(&mut state, &config, -1.0, 0.02);
        }
        assert_eq!(state.velocity.x, -config.max_speed);
    }

    #[test]
    fn deceleration_stops_at_zero() {
        let config = ControllerConfig {
            ground_deceleration: 70.0,
            ..Default::default()
        };
        let mut state = KinematicState {
            grounded: true,
            velocity: Vec2::new(5.0, 0.0),
            ..Default::default()
        };
        apply_lateral(&mut state, &config, 0.0, 1.0);
        assert_eq!(state.velocity.x, 0.0);

        state.velocity.x = -5.0;
        apply_lateral(&mut state, &config, 0.0, 1.0);
        assert_eq!(state.velocity.x, 0.0);
    }

    #[test]
    fn air_deceleration_override_applies_only_airborne() {
        let config = ControllerConfig {
            air_deceleration: Some(0.0),
            ..Default::default()
        };
        let mut state = KinematicState {
            velocity: Vec2::new(100.0, 0.0),
            ..Default::default()
        };
        apply_lateral(&mut state, &config, 0.0, 0.02);
        assert_eq!(state.velocity.x, 100.0);

        state.grounded = true;
        apply_lateral(&mut state, &config, 0.0, 0.02);
        assert!(state.velocity.x < 100.0);
    }

    #[test]
    fn axis_is_sanitized() {
        assert_eq!(sanitize_axis(f32::NAN), 0.0);
        assert_eq!(sanitize_axis(3.0), 1.0);
        assert_eq!(sanitize_axis(-3.0), -1.0);
        assert_eq!(sanitize_axis(0.25), 0.25);
    }

    #[test]
    fn buffered_press_jumps_on_landing_within_window() {
        let config = ControllerConfig::default();
        let mut state = KinematicState::default();

        assert!(try_jump(&mut state, &config, 0.0, true).is_none());

        state.grounded = true;
        let report = try_jump(&mut state, &config, 0.05, true).unwrap();
        assert_eq!(report.velocity, config.jump_velocity());
        assert!((report.buffered_for - 0.05).abs() < 1e-6);
        assert!(!state.grounded);
        assert_eq!(state.velocity.y, config.jump_velocity());
        assert_eq!(state.jump.pressed_at, None);
    }

    #[test]
    fn buffered_press_expires() {
        let config = ControllerConfig::default();
        let mut state = KinematicState::default();

        try_jump(&mut state, &config, 0.0, true);
        state.grounded = true;
        assert!(try_jump(&mut state, &config, 0.15, true).is_none());
        assert!(state.grounded);
        assert_eq!(state.velocity.y, 0.0);
    }

    #[test]
    fn held_button_does_not_rejump_after_consumption() {
        let config = ControllerConfig::default();
        let mut state = KinematicState {
            grounded: true,
            ..Default::default()
        };
        assert!(try_jump(&mut state, &config, 0.0, true).is_some());

        state.grounded = true;
        state.velocity.y = 0.0;
        assert!(try_jump(&mut state, &config, 0.02, true).is_none());
    }

    #[test]
    fn immediate_trigger_ignores_presses_made_airborne() {
        let config = ControllerConfig {
            jump_trigger: JumpTrigger::Immediate,
            jump_impulse: JumpImpulse::Direct,
            jump_height: 10.0,
            ..Default::default()
        };
        let mut state = KinematicState::default();
        assert!(try_jump(&mut state, &config, 0.0, true).is_none());

        state.grounded = true;
        assert!(try_jump(&mut state, &config, 0.02, true).is_none());

        try_jump(&mut state, &config, 0.04, false);
        let report = try_jump(&mut state, &config, 0.06, true).unwrap();
        assert_eq!(report.velocity, 10.0);
        assert_eq!(report.buffered_for, 0.0);
    }
}
