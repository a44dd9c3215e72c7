//! Wall probe: a fan of rays along the direction of travel that halts
//! horizontal motion on real walls and ignores glancing hits on steps and
//! slopes.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::bounds::BoundingBox;
use super::config::{ControllerConfig, WallReach};
use super::observer::{ProbeObserver, ProbeResult, WallReport};
use super::raycast::{RayCast, RayCastPort, RayHit};
use super::state::{KinematicState, WallContact};

/// Pairs sitting exactly on the tolerance boundary count as glancing.
const ANGLE_EPSILON: f32 = 1e-3;

/// Angle in degrees between the segment `a -> b` and the horizontal axis,
/// in `[0, 180]`. A vertical wall is 90.
pub fn connecting_angle(a: Vec2, b: Vec2) -> f32 {
    let delta = b - a;
    delta.y.abs().atan2(delta.x).to_degrees()
}

/// Whether two consecutive hit points lie on a wall within
/// `90° ± tolerance_degrees`.
pub fn is_wall_segment(a: Vec2, b: Vec2, tolerance_degrees: f32) -> bool {
    (connecting_angle(a, b) - 90.0).abs() < tolerance_degrees - ANGLE_EPSILON
}

/// Length of every horizontal ray this tick.
pub fn wall_cast_distance(
    bounds: &BoundingBox,
    state: &KinematicState,
    config: &ControllerConfig,
    dt: f32,
) -> f32 {
    let base = match config.wall_reach {
        WallReach::HalfWidth => bounds.half_width(),
        WallReach::Margin => bounds.horizontal_margin(config.margin_percent),
    };
    base + (state.velocity.x * dt).abs()
}

/// Cast the sideways fan in the direction of travel and resolve wall
/// contact. Does nothing while `velocity.x == 0`.
///
/// With an angle filter, contact is only confirmed once two consecutive rays
/// hit and the segment between their hit points is steep enough; a lone hit
/// clipping a ledge corner leaves the velocity alone. On contact the
/// character is moved to the wall, `velocity.x` is zeroed and the remaining
/// rays are skipped.
pub fn probe_wall<P>(
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
    if state.velocity.x == 0.0 {
        return None;
    }

    let (direction, side) = if state.velocity.x > 0.0 {
        (Dir2::X, WallContact::Right)
    } else {
        (Dir2::NEG_X, WallContact::Left)
    };
    let cast_distance = wall_cast_distance(bounds, state, config, dt);
    let tolerance = config.wall_filter.tolerance();

    let mut casts = Vec::with_capacity(config.horizontal_rays);
    let mut pair_angles = Vec::new();
    let mut previous: Option<(usize, RayHit)> = None;
    let mut confirmed = None;

    for (ray, origin) in bounds
        .wall_fan(config.horizontal_rays, config.margin_percent)
        .enumerate()
    {
        let hit = port.cast(origin, direction, cast_distance, mask);
        casts.push(RayCast {
            origin,
            direction,
            length: cast_distance,
            hit,
        });

        let Some(hit) = hit else {
            previous = None;
            continue;
        };

        let Some(tolerance) = tolerance else {
            confirmed = Some((ray, hit));
            break;
        };

        if let Some((previous_ray, previous_hit)) = previous {
            pair_angles.push(connecting_angle(previous_hit.point, hit.point));
            if is_wall_segment(previous_hit.point, hit.point, tolerance) {
                confirmed = Some(if previous_hit.distance <= hit.distance {
                    (previous_ray, previous_hit)
                } else {
                    (ray, hit)
                });
                break;
            }
        }
        previous = Some((ray, hit));
    }

    let confirmed = confirmed.map(|(ray, hit)| ProbeResult {
        ray,
        cast_distance,
        hit,
    });

    let mut push = 0.0;
    let mut contact = WallContact::None;
    if let Some(result) = &confirmed {
        push = result.hit.distance - bounds.half_width();
        state.position += *direction * push;
        state.velocity.x = 0.0;
        contact = side;
        state.wall = side;
    }

    observer.wall_probe(&WallReport {
        casts,
        confirmed,
        contact,
        pair_angles,
        push,
    });

    confirmed
}
