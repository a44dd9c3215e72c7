//! Movement domain: systems driving the kinematic controller at its two
//! cadences.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::debug::ProbeLog;
use crate::movement::kinematics::{LogObserver, ProbeObserver};
use crate::movement::systems::collisions::SpatialRayCaster;
use crate::movement::{KinematicBody, MovementInput};

/// Fixed cadence: probe, integrate and translate every kinematic body once
/// per physics tick.
pub(crate) fn step_kinematic_bodies(
    spatial_query: SpatialQuery,
    input: Res<MovementInput>,
    mut probe_log: Option<ResMut<ProbeLog>>,
    mut query: Query<(Entity, &mut Transform, &mut KinematicBody)>,
) {
    let mut log_observer = LogObserver;
    let observer: &mut dyn ProbeObserver = match probe_log.as_deref_mut() {
        Some(log) => log,
        None => &mut log_observer,
    };

    for (entity, mut transform, mut body) in &mut query {
        let body = &mut *body;

        // Anything that moved the transform since the last tick wins.
        body.state.position = transform.translation.truncate();

        let caster = SpatialRayCaster::new(&spatial_query, entity);
        let report = body
            .driver
            .fixed_step(&mut body.state, &caster, &*input, observer);

        transform.translation.x = body.state.position.x;
        transform.translation.y = body.state.position.y;
        body.last_step = Some(report);
    }
}

/// Frame cadence: feed the jump button to every body so presses between
/// physics ticks are buffered rather than lost.
pub(crate) fn buffer_jump_input(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut probe_log: Option<ResMut<ProbeLog>>,
    mut query: Query<&mut KinematicBody>,
) {
    let now = time.elapsed_secs();
    let mut log_observer = LogObserver;
    let observer: &mut dyn ProbeObserver = match probe_log.as_deref_mut() {
        Some(log) => log,
        None => &mut log_observer,
    };

    for mut body in &mut query {
        let body = &mut *body;
        body.driver
            .frame_step(&mut body.state, now, &*input, observer);
    }
}
