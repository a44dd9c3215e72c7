//! ContentRegistry resource holding the loaded controller tuning and level.

use bevy::prelude::*;

use super::data::LevelDef;
use crate::movement::kinematics::ControllerConfig;

/// Everything read from `assets/data` at startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct ContentRegistry {
    pub controller: ControllerConfig,
    pub level: LevelDef,
}

impl ContentRegistry {
    /// Returns a summary of loaded content for logging.
    pub fn summary(&self) -> String {
        let rubble = self.level.rubble.as_ref().map_or(0, |r| r.count);
        format!(
            "ContentRegistry loaded:\n\
             - Level: {} ({} platforms, {} rubble)\n\
             - Jump: height {}, {:?}/{:?}, v0 {:.1}\n\
             - Rays: {} horizontal, {} vertical, margin {}%\n\
             - Ground: {:?}, walls: {:?}, reach: {:?}",
            self.level.id,
            self.level.platforms.len(),
            rubble,
            self.controller.jump_height,
            self.controller.jump_impulse,
            self.controller.jump_trigger,
            self.controller.jump_velocity(),
            self.controller.horizontal_rays,
            self.controller.vertical_rays,
            self.controller.margin_percent,
            self.controller.ground_selection,
            self.controller.wall_filter,
            self.controller.wall_reach,
        )
    }
}
