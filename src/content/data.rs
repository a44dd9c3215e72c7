//! Data definitions for the RON content files.
//!
//! `assets/data/controller.ron` holds a bare `ControllerConfig`;
//! `assets/data/level.ron` holds the demo room below.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

// ============================================================================
// Level (level.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    /// Player spawn, body center.
    pub spawn: (f32, f32),
    /// Width and height of the player body.
    #[serde(default = "default_body_size")]
    pub body_size: (f32, f32),
    pub platforms: Vec<PlatformDef>,
    #[serde(default)]
    pub rubble: Option<RubbleDef>,
}

fn default_body_size() -> (f32, f32) {
    (24.0, 48.0)
}

impl LevelDef {
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.spawn.0, self.spawn.1)
    }

    pub fn body_size(&self) -> Vec2 {
        Vec2::new(self.body_size.0, self.body_size.1)
    }
}

impl Default for LevelDef {
    fn default() -> Self {
        Self {
            id: "level_test_room".to_string(),
            spawn: (0.0, 100.0),
            body_size: default_body_size(),
            platforms: vec![
                PlatformDef::new(SurfaceKind::Ground, (0.0, -200.0), (800.0, 40.0)),
                PlatformDef::new(SurfaceKind::Wall, (-420.0, 50.0), (40.0, 500.0)),
                PlatformDef::new(SurfaceKind::Wall, (420.0, 50.0), (40.0, 500.0)),
                PlatformDef::new(SurfaceKind::Ground, (-250.0, -50.0), (150.0, 20.0)),
                PlatformDef::new(SurfaceKind::Ground, (250.0, 50.0), (150.0, 20.0)),
                PlatformDef::new(SurfaceKind::Ground, (0.0, 150.0), (120.0, 20.0)),
                PlatformDef::new(SurfaceKind::Wall, (-100.0, -80.0), (30.0, 200.0)),
            ],
            rubble: None,
        }
    }
}

/// What a static rectangle is for. Decides its physics layer and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum SurfaceKind {
    #[default]
    Ground,
    Wall,
    /// Drawn but never probed by the controller.
    Scenery,
}

impl SurfaceKind {
    pub fn layer(self) -> GameLayer {
        match self {
            SurfaceKind::Ground => GameLayer::Ground,
            SurfaceKind::Wall => GameLayer::Wall,
            SurfaceKind::Scenery => GameLayer::Scenery,
        }
    }

    pub fn color(self) -> Color {
        match self {
            SurfaceKind::Ground => Color::srgb(0.4, 0.5, 0.4),
            SurfaceKind::Wall => Color::srgb(0.3, 0.3, 0.4),
            SurfaceKind::Scenery => Color::srgb(0.5, 0.4, 0.3),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlatformDef {
    #[serde(default)]
    pub surface: SurfaceKind,
    pub center: (f32, f32),
    pub size: (f32, f32),
    /// Counter-clockwise rotation. Tilted pieces exercise the wall filter.
    #[serde(default)]
    pub rotation_degrees: f32,
}

impl PlatformDef {
    pub fn new(surface: SurfaceKind, center: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            surface,
            center,
            size,
            rotation_degrees: 0.0,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center.0, self.center.1)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.size.0, self.size.1)
    }
}

// ============================================================================
// Rubble
// ============================================================================

/// Seeded scatter of small tilted blocks, generated at spawn time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RubbleDef {
    pub seed: u64,
    pub count: u32,
    pub area_min: (f32, f32),
    pub area_max: (f32, f32),
    pub min_size: (f32, f32),
    pub max_size: (f32, f32),
    #[serde(default = "default_max_tilt")]
    pub max_tilt_degrees: f32,
}

fn default_max_tilt() -> f32 {
    35.0
}
