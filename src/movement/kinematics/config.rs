//! Per-character controller tuning and the policy switches between the
//! controller's probing/jump variants.

use avian2d::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::movement::GameLayer;

/// How the ground probe picks between several rays that report a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum GroundSelection {
    /// The first ray (left to right) that hits wins. Jitters on uneven ground.
    FirstHit,
    /// The hit with the smallest fraction wins.
    #[default]
    ClosestHit,
}

/// Which wall-ray hits are allowed to stop horizontal motion.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub enum WallFilter {
    /// Any hit stops the character.
    None,
    /// Two consecutive hits must form a segment within
    /// `90° ± tolerance_degrees` of the horizontal axis.
    AngleThreshold { tolerance_degrees: f32 },
}

impl Default for WallFilter {
    fn default() -> Self {
        WallFilter::AngleThreshold {
            tolerance_degrees: 40.0,
        }
    }
}

impl WallFilter {
    /// Angle tolerance in degrees, or `None` when hits are unfiltered.
    pub fn tolerance(&self) -> Option<f32> {
        match self {
            WallFilter::None => None,
            WallFilter::AngleThreshold { tolerance_degrees } => Some(*tolerance_degrees),
        }
    }
}

/// Length of the horizontal rays beyond the current velocity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum WallReach {
    /// `width / 2 + |vx| * dt`, measured from the box center.
    #[default]
    HalfWidth,
    /// `margin + |vx| * dt`.
    Margin,
}

/// Meaning of [`ControllerConfig::jump_height`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum JumpImpulse {
    /// `jump_height` is assigned directly as the initial vertical velocity.
    Direct,
    /// `jump_height` is the apex height; velocity is `sqrt(2 * h * gravity)`.
    #[default]
    PeakHeight,
}

/// How jump presses are turned into jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum JumpTrigger {
    /// A press is remembered for `jump_buffer_window` seconds.
    #[default]
    Buffered,
    /// Only a press on a frame where the character is grounded jumps.
    Immediate,
}

/// Tuning for a single kinematic character.
///
/// Rates are per second and get scaled by the fixed timestep.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Downward acceleration while not grounded (units/second^2).
    pub gravity: f32,
    /// Horizontal speed ceiling (units/second).
    pub max_speed: f32,
    /// Terminal fall speed (units/second).
    pub max_fall: f32,
    /// Horizontal acceleration from full input (units/second^2).
    pub walk_acceleration: f32,
    /// Horizontal acceleration while airborne. Falls back to `walk_acceleration`.
    pub air_acceleration: Option<f32>,
    /// Step deceleration toward zero when there is no input (units/second^2).
    pub ground_deceleration: f32,
    /// Deceleration while airborne. Falls back to `ground_deceleration`.
    pub air_deceleration: Option<f32>,
    /// Apex height or initial velocity, depending on `jump_impulse`.
    pub jump_height: f32,
    pub jump_impulse: JumpImpulse,
    pub jump_trigger: JumpTrigger,
    /// Seconds a jump press stays consumable.
    pub jump_buffer_window: f32,
    pub horizontal_rays: usize,
    pub vertical_rays: usize,
    /// Inset of the ray fans, in percent of the box size.
    pub margin_percent: f32,
    pub ground_selection: GroundSelection,
    pub wall_filter: WallFilter,
    pub wall_reach: WallReach,
    /// Layers the probes collide with.
    pub collision_layers: Vec<GameLayer>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            gravity: 1800.0,
            max_speed: 320.0,
            max_fall: 900.0,
            walk_acceleration: 3000.0,
            air_acceleration: None,
            ground_deceleration: 2600.0,
            air_deceleration: None,
            jump_height: 128.0,
            jump_impulse: JumpImpulse::PeakHeight,
            jump_trigger: JumpTrigger::Buffered,
            jump_buffer_window: 0.1,
            horizontal_rays: 6,
            vertical_rays: 4,
            margin_percent: 20.0,
            ground_selection: GroundSelection::ClosestHit,
            wall_filter: WallFilter::default(),
            wall_reach: WallReach::HalfWidth,
            collision_layers: vec![GameLayer::Ground, GameLayer::Wall],
        }
    }
}

impl ControllerConfig {
    /// Reject configurations that would produce NaN or divide by zero mid-step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("gravity", self.gravity),
            ("max_speed", self.max_speed),
            ("max_fall", self.max_fall),
            ("walk_acceleration", self.walk_acceleration),
            ("air_acceleration", self.air_acceleration.unwrap_or(0.0)),
            ("ground_deceleration", self.ground_deceleration),
            ("air_deceleration", self.air_deceleration.unwrap_or(0.0)),
            ("jump_height", self.jump_height),
            ("jump_buffer_window", self.jump_buffer_window),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTuning { field, value });
            }
        }

        if self.horizontal_rays < 2 {
            return Err(ConfigError::TooFewRays {
                fan: "horizontal_rays",
                count: self.horizontal_rays,
            });
        }
        if self.vertical_rays < 2 {
            return Err(ConfigError::TooFewRays {
                fan: "vertical_rays",
                count: self.vertical_rays,
            });
        }

        if !self.margin_percent.is_finite() || !(0.0..50.0).contains(&self.margin_percent) {
            return Err(ConfigError::InvalidMargin(self.margin_percent));
        }

        if let Some(tolerance) = self.wall_filter.tolerance() {
            if !tolerance.is_finite() || tolerance <= 0.0 || tolerance > 90.0 {
                return Err(ConfigError::InvalidWallTolerance(tolerance));
            }
        }

        if self.collision_layers.is_empty() {
            return Err(ConfigError::NoCollisionLayers);
        }

        Ok(())
    }

    /// Mask handed to every ray cast.
    pub fn collision_mask(&self) -> LayerMask {
        LayerMask(
            self.collision_layers
                .iter()
                .fold(0, |bits, layer| bits | layer.to_bits()),
        )
    }

    pub fn acceleration(&self, grounded: bool) -> f32 {
        if grounded {
            self.walk_acceleration
        } else {
            self.air_acceleration.unwrap_or(self.walk_acceleration)
        }
    }

    pub fn deceleration(&self, grounded: bool) -> f32 {
        if grounded {
            self.ground_deceleration
        } else {
            self.air_deceleration.unwrap_or(self.ground_deceleration)
        }
    }

    /// Initial vertical velocity of a jump.
    pub fn jump_velocity(&self) -> f32 {
        match self.jump_impulse {
            JumpImpulse::Direct => self.jump_height,
            JumpImpulse::PeakHeight => (2.0 * self.jump_height * self.gravity).sqrt(),
        }
    }

    /// Apex height reached by a jump under constant gravity: h = v² / (2g).
    pub fn apex_height(&self) -> f32 {
        match self.jump_impulse {
            JumpImpulse::PeakHeight => self.jump_height,
            JumpImpulse::Direct if self.gravity > 0.0 => {
                self.jump_height * self.jump_height / (2.0 * self.gravity)
            }
            JumpImpulse::Direct => f32::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ControllerConfig::default().validate().is_ok());
    }

    #[test]
    fn single_ray_fans_are_rejected() {
        let config = ControllerConfig {
            vertical_rays: 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooFewRays {
                fan: "vertical_rays",
                count: 1
            })
        ));

        let config = ControllerConfig {
            horizontal_rays: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooFewRays {
                fan: "horizontal_rays",
                ..
            })
        ));
    }

    #[test]
    fn margin_must_leave_room_for_the_fan() {
        for margin in [-1.0, 50.0, 75.0, f32::NAN] {
            let config = ControllerConfig {
                margin_percent: margin,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidMargin(_))
            ));
        }
    }

    #[test]
    fn negative_tuning_is_rejected() {
        let config = ControllerConfig {
            max_fall: -5.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTuning {
                field: "max_fall",
                ..
            })
        ));

        let config = ControllerConfig {
            air_acceleration: Some(f32::INFINITY),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn wall_tolerance_is_bounded() {
        let config = ControllerConfig {
            wall_filter: WallFilter::AngleThreshold {
                tolerance_degrees: 0.0,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWallTolerance(_))
        ));
    }

    #[test]
    fn empty_layer_set_is_rejected() {
        let config = ControllerConfig {
            collision_layers: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoCollisionLayers)
        ));
    }

    #[test]
    fn peak_height_impulse_reaches_the_configured_apex() {
        let config = ControllerConfig::default();
        let v = config.jump_velocity();
        let apex = v * v / (2.0 * config.gravity);
        assert!((apex - config.jump_height).abs() < 1e-3);
    }

    #[test]
    fn direct_impulse_uses_jump_height_as_velocity() {
        let config = ControllerConfig {
            jump_impulse: JumpImpulse::Direct,
            jump_height: 12.0,
            gravity: 6.0,
            ..Default::default()
        };
        assert_eq!(config.jump_velocity(), 12.0);
        assert_eq!(config.apex_height(), 12.0);
    }

    #[test]
    fn air_overrides_fall_back_to_ground_values() {
        let mut config = ControllerConfig::default();
        assert_eq!(config.acceleration(false), config.walk_acceleration);
        assert_eq!(config.deceleration(false), config.ground_deceleration);

        config.air_acceleration = Some(100.0);
        config.air_deceleration = Some(0.0);
        assert_eq!(config.acceleration(false), 100.0);
        assert_eq!(config.acceleration(true), config.walk_acceleration);
        assert_eq!(config.deceleration(false), 0.0);
    }

    #[test]
    fn collision_mask_unions_layers() {
        let config = ControllerConfig::default();
        let mask = config.collision_mask();
        assert_eq!(
            mask.0,
            GameLayer::Ground.to_bits() | GameLayer::Wall.to_bits()
        );
    }
}
