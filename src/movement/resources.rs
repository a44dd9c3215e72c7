//! Movement domain: input resources.

use bevy::prelude::*;

use crate::movement::kinematics::InputPort;

/// Latest sampled player input, written once per frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_held: bool,
}

impl InputPort for MovementInput {
    fn horizontal_axis(&self) -> f32 {
        self.axis.x
    }

    fn jump_held(&self) -> bool {
        self.jump_held
    }
}
