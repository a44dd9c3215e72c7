//! Configuration errors raised when a controller is built.

/// A configuration that cannot be stepped without producing NaN or
/// dividing by zero.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A ray fan needs at least two rays to lerp across the box.
    TooFewRays { fan: &'static str, count: usize },
    /// Margin percent must lie in `[0, 50)`.
    InvalidMargin(f32),
    /// A tuning value is negative, NaN or infinite.
    InvalidTuning { field: &'static str, value: f32 },
    /// Wall angle tolerance must lie in `(0, 90]` degrees.
    InvalidWallTolerance(f32),
    /// Probes must collide with at least one layer.
    NoCollisionLayers,
    /// Collider bounds must have a positive, finite width and height.
    InvalidBodySize { width: f32, height: f32 },
    /// The fixed timestep must be positive and finite.
    InvalidTimestep(f32),
}

impl ConfigError {
    /// Name of the offending setting.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::TooFewRays { fan, .. } => *fan,
            ConfigError::InvalidMargin(_) => "margin_percent",
            ConfigError::InvalidTuning { field, .. } => *field,
            ConfigError::InvalidWallTolerance(_) => "wall_filter",
            ConfigError::NoCollisionLayers => "collision_layers",
            ConfigError::InvalidBodySize { .. } => "body_size",
            ConfigError::InvalidTimestep(_) => "fixed_dt",
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::TooFewRays { fan, count } => {
                write!(f, "{} must be at least 2, got {}", fan, count)
            }
            ConfigError::InvalidMargin(percent) => {
                write!(f, "margin_percent must be in [0, 50), got {}", percent)
            }
            ConfigError::InvalidTuning { field, value } => {
                write!(f, "{} must be finite and non-negative, got {}", field, value)
            }
            ConfigError::InvalidWallTolerance(degrees) => {
                write!(
                    f,
                    "wall angle tolerance must be in (0, 90] degrees, got {}",
                    degrees
                )
            }
            ConfigError::NoCollisionLayers => write!(f, "collision_layers is empty"),
            ConfigError::InvalidBodySize { width, height } => {
                write!(f, "collider bounds must be positive, got {}x{}", width, height)
            }
            ConfigError::InvalidTimestep(dt) => {
                write!(f, "fixed timestep must be positive, got {}", dt)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
