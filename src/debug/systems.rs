//! Debug domain: hotkeys for probe telemetry.

use bevy::prelude::*;
use std::fs;

use crate::debug::state::ProbeLog;

pub const EXPORT_PATH: &str = "probe_log.json";

/// Toggle recording with F8
pub(crate) fn toggle_probe_recording(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut probe_log: ResMut<ProbeLog>,
) {
    if keyboard.just_pressed(KeyCode::F8) {
        probe_log.recording = !probe_log.recording;
        info!(
            "[DEBUG] Probe recording {}",
            if probe_log.recording { "ON" } else { "OFF" }
        );
    }
}

/// Dump the probe log as JSON with F9
pub(crate) fn export_probe_log(keyboard: Res<ButtonInput<KeyCode>>, probe_log: Res<ProbeLog>) {
    if !keyboard.just_pressed(KeyCode::F9) {
        return;
    }

    let json = match probe_log.to_json() {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize probe log: {}", e);
            return;
        }
    };

    match fs::write(EXPORT_PATH, json) {
        Ok(()) => info!(
            "[DEBUG] Wrote {} probe records to {}",
            probe_log.len(),
            EXPORT_PATH
        ),
        Err(e) => error!("Failed to write {}: {}", EXPORT_PATH, e),
    }
}
