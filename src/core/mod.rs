//! Core domain: app-level timing and camera.

mod resources;
mod systems;

use bevy::prelude::*;

pub use resources::CameraFollow;

/// Physics ticks per second. The controller's fixed timestep is derived
/// from this when the player spawns.
pub const FIXED_HZ: f64 = 50.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            .init_resource::<CameraFollow>()
            .add_systems(Startup, systems::setup_camera)
            .add_systems(Update, systems::follow_player);
    }
}
