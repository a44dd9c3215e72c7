//! Content domain: RON-backed controller tuning and level layout.

pub mod data;
pub mod loader;
pub mod registry;
pub mod validation;


use bevy::prelude::*;
use std::path::Path;

pub use data::{LevelDef, PlatformDef, RubbleDef, SurfaceKind};
pub use loader::{ContentLoadError, load_all_content, load_controller_config, load_level, parse_ron};
pub use registry::ContentRegistry;
pub use validation::{ValidationError, validate_content};

pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // Loaded before Startup so spawners can read it.
        app.add_systems(PreStartup, load_content);
    }
}

fn load_content(mut commands: Commands) {
    let registry = match load_all_content(Path::new(CONTENT_DIR)) {
        Ok(registry) => registry,
        Err(errors) => {
            for error in &errors {
                error!("{}", error);
            }
            warn!(
                "{} content file(s) failed to load, using built-in defaults",
                errors.len()
            );
            ContentRegistry::default()
        }
    };

    let problems = validate_content(&registry);
    for problem in &problems {
        warn!("Content validation: {}", problem);
    }

    info!("{}", registry.summary());
    commands.insert_resource(registry);
}
