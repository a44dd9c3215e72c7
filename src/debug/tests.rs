//! Debug domain: unit tests for probe telemetry.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::{ProbeLog, ProbeRecord};
use crate::movement::kinematics::{
    ControllerConfig, HeldInput, KinematicState, RayHit, RayCastPort, StepDriver,
};

const DT: f32 = 0.02;

/// Flat floor along y = 0.
fn floor() -> impl RayCastPort {
    |origin: Vec2, dir: Dir2, max: f32, _mask: LayerMask| {
        if dir.y >= 0.0 {
            return None;
        }
        let distance = origin.y / -dir.y;
        (distance >= 0.0 && distance <= max)
            .then(|| RayHit::along(origin, dir, distance, max, Vec2::Y))
    }
}

fn driver() -> StepDriver {
    StepDriver::new(ControllerConfig::default(), Vec2::new(24.0, 48.0), DT).unwrap()
}

fn run_ticks(log: &mut ProbeLog, ticks: usize) -> KinematicState {
    let driver = driver();
    let port = floor();
    let mut state = KinematicState::at(Vec2::new(0.0, 24.0));
    for _ in 0..ticks {
        driver.fixed_step(&mut state, &port, &HeldInput::default(), &mut *log);
    }
    state
}

// ---------------------------------------------------------------------------
// Recording
// ---------------------------------------------------------------------------

#[test]
fn test_ground_probes_are_recorded() {
    let mut log = ProbeLog::default();
    let state = run_ticks(&mut log, 3);

    assert!(state.grounded);
    assert_eq!(log.len(), 3);
    assert_eq!(log.totals().ground_probes, 3);
    assert_eq!(log.totals().ground_hits, 3);
    assert_eq!(log.totals().wall_probes, 0);

    match log.records().next() {
        Some(ProbeRecord::Ground {
            seq, rays, selected, ..
        }) => {
            assert_eq!(*seq, 0);
            assert_eq!(rays.len(), 4);
            assert!(selected.is_some());
            assert!(rays.iter().all(|r| r.hit.is_some()));
        }
        other => panic!("expected a ground record, got {:?}", other),
    }
}

#[test]
fn test_capacity_evicts_oldest() {
    let mut log = ProbeLog::with_capacity(3);
    run_ticks(&mut log, 5);

    assert_eq!(log.len(), 3);
    assert_eq!(log.totals().ground_probes, 5);
    let seqs: Vec<u64> = log
        .records()
        .map(|r| match r {
            ProbeRecord::Ground { seq, .. }
            | ProbeRecord::Wall { seq, .. }
            | ProbeRecord::Jump { seq, .. } => *seq,
        })
        .collect();
    assert_eq!(seqs, vec![2, 3, 4]);
}

#[test]
fn test_paused_recording_still_counts() {
    let mut log = ProbeLog::default();
    log.recording = false;
    run_ticks(&mut log, 4);

    assert!(log.is_empty());
    assert_eq!(log.totals().ground_probes, 4);
}

#[test]
fn test_jumps_are_recorded() {
    let mut log = ProbeLog::default();
    let driver = driver();
    let mut state = KinematicState {
        grounded: true,
        ..KinematicState::at(Vec2::new(0.0, 24.0))
    };

    let report = driver.frame_step(&mut state, 1.0, &HeldInput::jump(), &mut log);
    assert!(report.is_some());
    assert_eq!(log.totals().jumps, 1);
    assert!(matches!(
        log.records().last(),
        Some(ProbeRecord::Jump { at, .. }) if *at == 1.0
    ));
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[test]
fn test_json_export() {
    let mut log = ProbeLog::default();
    run_ticks(&mut log, 2);

    let json = log.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["totals"]["ground_probes"], 2);
    let records = value["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["kind"], "ground");
    assert_eq!(records[0]["rays"].as_array().unwrap().len(), 4);
}

#[test]
fn test_clear_resets_totals() {
    let mut log = ProbeLog::default();
    run_ticks(&mut log, 2);
    log.clear();
    assert!(log.is_empty());
    assert_eq!(log.totals().ground_probes, 0);
}
