//! Movement domain: ray-probed kinematic character controller and its ECS
//! wiring.

mod bootstrap;
mod components;
mod dev;
pub mod kinematics;
mod resources;
mod systems;

use bevy::prelude::*;

pub use components::{GameLayer, Ground, KinematicBody, Player, Wall};
pub use resources::MovementInput;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(
                Startup,
                (dev::spawn_test_room, bootstrap::bootstrap_player_from_data),
            )
            .add_systems(
                Update,
                (systems::read_input, systems::buffer_jump_input).chain(),
            )
            .add_systems(FixedUpdate, systems::step_kinematic_bodies);
    }
}
