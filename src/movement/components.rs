//! Movement domain: components and physics layers for the kinematic body.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::kinematics::{KinematicState, MotionPhase, StepDriver, StepReport};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Decorative colliders the controller never probes
    Scenery,
}

#[derive(Component, Debug)]
pub struct Player;

/// A character moved by the kinematic controller instead of the physics
/// solver. The transform is the source of truth between ticks; the state
/// position is synced from it before every step.
#[derive(Component, Debug)]
pub struct KinematicBody {
    pub driver: StepDriver,
    pub state: KinematicState,
    pub last_step: Option<StepReport>,
}

impl KinematicBody {
    pub fn new(driver: StepDriver, position: Vec2) -> Self {
        Self {
            driver,
            state: KinematicState::at(position),
            last_step: None,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.state.grounded
    }

    pub fn phase(&self) -> MotionPhase {
        self.state.phase()
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
