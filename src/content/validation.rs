//! Validation for loaded content beyond what deserialization checks.

use super::data::{LevelDef, PlatformDef, RubbleDef};
use super::registry::ContentRegistry;
use crate::movement::kinematics::ConfigError;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub problem: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid '{}': {}",
            self.source_type, self.source_id, self.field, self.problem
        )
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    fn level(level: &LevelDef, field: &'static str, problem: impl Into<String>) -> Self {
        Self {
            source_type: "Level",
            source_id: level.id.clone(),
            field,
            problem: problem.into(),
        }
    }
}

impl From<ConfigError> for ValidationError {
    fn from(error: ConfigError) -> Self {
        Self {
            source_type: "Controller",
            source_id: super::loader::CONTROLLER_FILE.to_string(),
            field: error.field(),
            problem: error.to_string(),
        }
    }
}

fn positive_size(size: (f32, f32)) -> bool {
    size.0.is_finite() && size.1.is_finite() && size.0 > 0.0 && size.1 > 0.0
}

fn check_platform(errors: &mut Vec<ValidationError>, level: &LevelDef, index: usize, platform: &PlatformDef) {
    if !positive_size(platform.size) {
        errors.push(ValidationError::level(
            level,
            "platforms",
            format!("platform {} has size {:?}", index, platform.size),
        ));
    }
    if !platform.center.0.is_finite()
        || !platform.center.1.is_finite()
        || !platform.rotation_degrees.is_finite()
    {
        errors.push(ValidationError::level(
            level,
            "platforms",
            format!("platform {} has a non-finite placement", index),
        ));
    }
}

fn check_rubble(errors: &mut Vec<ValidationError>, level: &LevelDef, rubble: &RubbleDef) {
    if rubble.area_min.0 > rubble.area_max.0 || rubble.area_min.1 > rubble.area_max.1 {
        errors.push(ValidationError::level(
            level,
            "rubble.area",
            format!("min {:?} exceeds max {:?}", rubble.area_min, rubble.area_max),
        ));
    }
    if !positive_size(rubble.min_size)
        || rubble.min_size.0 > rubble.max_size.0
        || rubble.min_size.1 > rubble.max_size.1
    {
        errors.push(ValidationError::level(
            level,
            "rubble.size",
            format!("range {:?}..{:?} is empty or non-positive", rubble.min_size, rubble.max_size),
        ));
    }
    if !rubble.max_tilt_degrees.is_finite() || !(0.0..=90.0).contains(&rubble.max_tilt_degrees) {
        errors.push(ValidationError::level(
            level,
            "rubble.max_tilt_degrees",
            format!("{} is outside [0, 90]", rubble.max_tilt_degrees),
        ));
    }
}

/// Validate the whole registry.
/// Returns a list of validation errors, empty if everything is usable.
pub fn validate_content(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Err(error) = registry.controller.validate() {
        errors.push(error.into());
    }

    let level = &registry.level;
    if !positive_size(level.body_size) {
        errors.push(ValidationError::level(
            level,
            "body_size",
            format!("{:?} is not a positive size", level.body_size),
        ));
    }
    if !level.spawn.0.is_finite() || !level.spawn.1.is_finite() {
        errors.push(ValidationError::level(
            level,
            "spawn",
            format!("{:?} is not finite", level.spawn),
        ));
    }
    for (index, platform) in level.platforms.iter().enumerate() {
        check_platform(&mut errors, level, index, platform);
    }
    if let Some(rubble) = &level.rubble {
        check_rubble(&mut errors, level, rubble);
    }

    errors
}
