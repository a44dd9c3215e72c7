//! Step driver: runs the probes and integrator in order for one character.
//!
//! Two cadences drive it. [`StepDriver::fixed_step`] runs once per fixed
//! physics tick; [`StepDriver::frame_step`] runs once per displayed frame and
//! handles jump edge detection. Both run on the same thread, and the buffer
//! write inside `frame_step` always happens before the grounded check that
//! consumes it.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::bounds::BoundingBox;
use super::config::ControllerConfig;
use super::error::ConfigError;
use super::ground::probe_ground;
use super::input::InputPort;
use super::integrator::{apply_gravity, apply_lateral, try_jump};
use super::observer::{JumpReport, ProbeObserver, ProbeResult};
use super::raycast::RayCastPort;
use super::state::{KinematicState, WallContact};
use super::wall::probe_wall;

/// Outcome of one fixed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Total translation this tick, probe snaps included.
    pub displacement: Vec2,
    pub ground: Option<ProbeResult>,
    pub wall: Option<ProbeResult>,
    pub landed: bool,
    pub left_ground: bool,
}

/// Validated controller for one character body.
#[derive(Debug, Clone)]
pub struct StepDriver {
    config: ControllerConfig,
    mask: LayerMask,
    body_size: Vec2,
    fixed_dt: f32,
}

impl StepDriver {
    /// Fails on any configuration that could divide by zero or go NaN
    /// during a step.
    pub fn new(config: ControllerConfig, body_size: Vec2, fixed_dt: f32) -> Result<Self, ConfigError> {
        config.validate()?;

        if !body_size.is_finite() || body_size.x <= 0.0 || body_size.y <= 0.0 {
            return Err(ConfigError::InvalidBodySize {
                width: body_size.x,
                height: body_size.y,
            });
        }
        if !fixed_dt.is_finite() || fixed_dt <= 0.0 {
            return Err(ConfigError::InvalidTimestep(fixed_dt));
        }

        let mask = config.collision_mask();
        Ok(Self {
            config,
            mask,
            body_size,
            fixed_dt,
        })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn body_size(&self) -> Vec2 {
        self.body_size
    }

    pub fn fixed_dt(&self) -> f32 {
        self.fixed_dt
    }

    pub fn bounds(&self, state: &KinematicState) -> BoundingBox {
        BoundingBox::from_center(state.position, self.body_size)
    }

    /// One fixed tick: rebuild bounds, integrate gravity, probe ground
    /// (grounded or falling only), accelerate laterally, probe walls
    /// (moving horizontally only), then translate by `velocity * dt`.
    ///
    /// Probes resolve against the bounds taken at the start of the tick;
    /// the velocity translation comes last so snaps and motion are never
    /// counted twice.
    pub fn fixed_step<P, I>(
        &self,
        state: &mut KinematicState,
        port: &P,
        input: &I,
        observer: &mut dyn ProbeObserver,
    ) -> StepReport
    where
        P: RayCastPort + ?Sized,
        I: InputPort + ?Sized,
    {
        let dt = self.fixed_dt;
        let start = state.position;
        let was_grounded = state.grounded;
        let bounds = self.bounds(state);
        state.wall = WallContact::None;

        apply_gravity(state, &self.config, dt);

        let ground = if state.wants_ground_probe() {
            probe_ground(state, &bounds, &self.config, self.mask, dt, port, observer)
        } else {
            None
        };

        apply_lateral(state, &self.config, input.horizontal_axis(), dt);

        let wall = if state.velocity.x != 0.0 {
            probe_wall(state, &bounds, &self.config, self.mask, dt, port, observer)
        } else {
            None
        };

        state.position += state.velocity * dt;

        let landed = state.grounded && !was_grounded;
        let left_ground = !state.grounded && was_grounded;
        if landed {
            debug!("Landed at {:?}", state.position);
        } else if left_ground {
            debug!("Left ground at {:?}, vy={:.2}", state.position, state.velocity.y);
        }

        StepReport {
            displacement: state.position - start,
            ground,
            wall,
            landed,
            left_ground,
        }
    }

    /// One display frame: edge-detect the jump button at time `now` and
    /// launch if a buffered press is consumable.
    pub fn frame_step<I>(
        &self,
        state: &mut KinematicState,
        now: f32,
        input: &I,
        observer: &mut dyn ProbeObserver,
    ) -> Option<JumpReport>
    where
        I: InputPort + ?Sized,
    {
        let report = try_jump(state, &self.config, now, input.jump_held())?;
        observer.jumped(&report);
        Some(report)
    }
}
