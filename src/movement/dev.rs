//! Movement domain: demo room spawning from the loaded level.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{ContentRegistry, PlatformDef, SurfaceKind};
use crate::level::generate_rubble;
use crate::movement::{GameLayer, Ground, Wall};

fn spawn_platform(commands: &mut Commands, platform: &PlatformDef) {
    let size = platform.size();
    let center = platform.center();
    let layers = CollisionLayers::new(platform.surface.layer(), [GameLayer::Player]);

    let mut entity = commands.spawn((
        Sprite {
            color: platform.surface.color(),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 0.0)
            .with_rotation(Quat::from_rotation_z(platform.rotation_degrees.to_radians())),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        layers,
    ));

    match platform.surface {
        SurfaceKind::Ground => {
            entity.insert(Ground);
        }
        SurfaceKind::Wall => {
            entity.insert(Wall);
        }
        SurfaceKind::Scenery => {}
    }
}

pub(crate) fn spawn_test_room(mut commands: Commands, registry: Option<Res<ContentRegistry>>) {
    let Some(registry) = registry else {
        warn!("ContentRegistry not available, room left empty");
        return;
    };
    let level = &registry.level;

    for platform in &level.platforms {
        spawn_platform(&mut commands, platform);
    }

    let rubble = level.rubble.as_ref().map(generate_rubble).unwrap_or_default();
    for piece in &rubble {
        spawn_platform(&mut commands, piece);
    }

    info!(
        "Spawned room '{}': {} platforms, {} rubble",
        level.id,
        level.platforms.len(),
        rubble.len()
    );
}
