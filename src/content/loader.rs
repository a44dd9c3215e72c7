//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::LevelDef;
use super::registry::ContentRegistry;
use crate::movement::kinematics::ControllerConfig;

pub const CONTROLLER_FILE: &str = "controller.ron";
pub const LEVEL_FILE: &str = "level.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse RON text; `file` only labels the error.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_ron(&file_name, &contents)
}

pub fn load_controller_config(path: &Path) -> Result<ControllerConfig, ContentLoadError> {
    load_single_file(path)
}

pub fn load_level(path: &Path) -> Result<LevelDef, ContentLoadError> {
    load_single_file(path)
}

/// Load controller tuning and the level from `base_path`.
/// Returns errors for every file that fails to load.
pub fn load_all_content(base_path: &Path) -> Result<ContentRegistry, Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let controller = load_controller_config(&base_path.join(CONTROLLER_FILE))
        .map_err(|e| errors.push(e))
        .ok();
    let level = load_level(&base_path.join(LEVEL_FILE))
        .map_err(|e| errors.push(e))
        .ok();

    match (controller, level) {
        (Some(controller), Some(level)) => Ok(ContentRegistry { controller, level }),
        _ => Err(errors),
    }
}
