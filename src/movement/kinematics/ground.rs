//! Ground probe: a fan of downward rays that decides whether the character
//! stands on something and snaps it onto the surface.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::bounds::BoundingBox;
use super::config::{ControllerConfig, GroundSelection};
use super::observer::{GroundReport, ProbeObserver, ProbeResult};
use super::raycast::{RayCast, RayCastPort, RayHit};
use super::state::KinematicState;

/// Pick the ray to act on among the fan's results.
///
/// `ClosestHit` takes the smallest fraction, with ties going to the earlier
/// ray. `FirstHit` takes the earliest ray that hit anything.
pub fn select_hit(hits: &[Option<RayHit>], policy: GroundSelection) -> Option<(usize, RayHit)> {
    let mut candidates = hits
        .iter()
        .enumerate()
        .filter_map(|(index, hit)| hit.map(|hit| (index, hit)));

    match policy {
        GroundSelection::FirstHit => candidates.next(),
        GroundSelection::ClosestHit => {
            candidates.min_by(|(_, a), (_, b)| a.fraction.total_cmp(&b.fraction))
        }
    }
}

/// Length of every downward ray: half the box height plus either the
/// grounded skin margin or this tick's fall distance.
pub fn ground_cast_distance(
    bounds: &BoundingBox,
    state: &KinematicState,
    config: &ControllerConfig,
    dt: f32,
) -> f32 {
    let extension = if state.grounded {
        bounds.vertical_margin(config.margin_percent)
    } else {
        (state.velocity.y * dt).abs()
    };
    bounds.half_height() + extension
}

/// Cast the downward fan and resolve ground contact.
///
/// On a hit the character is grounded, stops falling, is moved down by
/// `distance - height / 2` and loses its vertical velocity. Without a hit it
/// is no longer grounded; `falling` is left to the gravity step.
pub fn probe_ground<P>(
    state: &mut KinematicState,
    bounds: &BoundingBox,
    config: &ControllerConfig,
    mask: LayerMask,
    dt: f32,
    port: &P,
    observer: &mut dyn ProbeObserver,
) -> Option<ProbeResult>
where
    P: RayCastPort + ?Sized,
{
    let cast_distance = ground_cast_distance(bounds, state, config, dt);
    let mut casts = Vec::with_capacity(config.vertical_rays);

    for origin in bounds.ground_fan(config.vertical_rays, config.margin_percent) {
        let hit = port.cast(origin, Dir2::NEG_Y, cast_distance, mask);
        casts.push(RayCast {
            origin,
            direction: Dir2::NEG_Y,
            length: cast_distance,
            hit,
        });
        if hit.is_some() && config.ground_selection == GroundSelection::FirstHit {
            break;
        }
    }

    let hits: Vec<Option<RayHit>> = casts.iter().map(|cast| cast.hit).collect();
    let selected = select_hit(&hits, config.ground_selection).map(|(ray, hit)| ProbeResult {
        ray,
        cast_distance,
        hit,
    });

    let mut snap = 0.0;
    match &selected {
        Some(result) => {
            state.grounded = true;
            state.falling = false;
            snap = result.hit.distance - bounds.half_height();
            state.position.y -= snap;
            state.velocity.y = 0.0;
        }
        None => {
            state.grounded = false;
        }
    }

    observer.ground_probe(&GroundReport {
        casts,
        selected,
        snap,
    });

    selected
}
