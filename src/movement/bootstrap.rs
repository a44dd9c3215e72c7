//! Movement domain: player bootstrap from loaded content.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::movement::kinematics::StepDriver;
use crate::movement::{GameLayer, KinematicBody, Player};

/// Spawn the player from the loaded controller tuning. A configuration the
/// controller rejects is logged and no player is spawned.
pub(crate) fn bootstrap_player_from_data(
    mut commands: Commands,
    registry: Option<Res<ContentRegistry>>,
    fixed_time: Res<Time<Fixed>>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let Some(registry) = registry else {
        error!("ContentRegistry not available, cannot spawn player");
        return;
    };

    let level = &registry.level;
    let body_size = level.body_size();
    let fixed_dt = fixed_time.timestep().as_secs_f32();

    let driver = match StepDriver::new(registry.controller.clone(), body_size, fixed_dt) {
        Ok(driver) => driver,
        Err(e) => {
            error!("Rejected controller configuration: {}", e);
            return;
        }
    };

    let spawn = level.spawn_point();
    info!(
        "Spawning player at {:?}: body {}x{}, dt {:.4}, jump v0 {:.1}",
        spawn,
        body_size.x,
        body_size.y,
        fixed_dt,
        driver.config().jump_velocity()
    );

    commands.spawn((
        Player,
        KinematicBody::new(driver, spawn),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(body_size),
            ..default()
        },
        Transform::from_xyz(spawn.x, spawn.y, 0.0),
        // Physics: moved by the controller, never by the solver
        (
            RigidBody::Kinematic,
            Collider::rectangle(body_size.x, body_size.y),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
