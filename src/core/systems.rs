//! Core domain: camera setup and follow.

use bevy::prelude::*;

use crate::core::CameraFollow;
use crate::movement::Player;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn follow_player(
    time: Res<Time>,
    follow: Res<CameraFollow>,
    player: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player) = player.single() else {
        return;
    };
    let Ok(mut camera) = camera.single_mut() else {
        return;
    };

    let next = follow.step(
        camera.translation.truncate(),
        player.translation.truncate(),
        time.delta_secs(),
    );
    camera.translation.x = next.x;
    camera.translation.y = next.y;
}
