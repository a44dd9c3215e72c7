//! Core domain: shared resources.

use bevy::prelude::*;

/// How tightly the camera trails the player.
#[derive(Resource, Debug, Clone)]
pub struct CameraFollow {
    /// Exponential smoothing rate per second; higher is snappier.
    pub smoothing: f32,
    /// Offset from the player, so more floor is visible than sky.
    pub offset: Vec2,
}

impl Default for CameraFollow {
    fn default() -> Self {
        Self {
            smoothing: 8.0,
            offset: Vec2::new(0.0, 60.0),
        }
    }
}

impl CameraFollow {
    /// Next camera position after `dt` seconds of trailing `target`.
    pub fn step(&self, current: Vec2, target: Vec2, dt: f32) -> Vec2 {
        let t = 1.0 - (-self.smoothing * dt).exp();
        current.lerp(target + self.offset, t.clamp(0.0, 1.0))
    }
}
