//! Debug domain: probe telemetry for tuning the controller.
//!
//! Hotkeys:
//! - F8 toggles recording
//! - F9 writes the log to `probe_log.json`

mod state;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use state::{DEFAULT_CAPACITY, ProbeLog, ProbeRecord, ProbeTotals, RayRecord};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProbeLog>().add_systems(
            Update,
            (systems::toggle_probe_recording, systems::export_probe_log),
        );
    }
}
