//! The ray-cast query the probes are built on.
//!
//! The controller never intersects geometry itself; whatever owns the world
//! (avian's `SpatialQuery` in the game, closures in tests) implements
//! [`RayCastPort`].

use avian2d::prelude::*;
use bevy::prelude::*;

/// Nearest hit along a cast ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
    /// `distance / max_distance`, in `[0, 1]`.
    pub fraction: f32,
    /// World position of the hit.
    pub point: Vec2,
    /// Surface normal at the hit.
    pub normal: Vec2,
}

impl RayHit {
    /// Builds a hit for a ray of length `max_distance`, deriving the fraction
    /// and clamping it into `[0, 1]`.
    pub fn new(distance: f32, max_distance: f32, point: Vec2, normal: Vec2) -> Self {
        let fraction = if max_distance > 0.0 {
            (distance / max_distance).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            distance,
            fraction,
            point,
            normal,
        }
    }

    /// Hit for a ray starting at `origin`, pointing along `direction`.
    pub fn along(origin: Vec2, direction: Dir2, distance: f32, max_distance: f32, normal: Vec2) -> Self {
        Self::new(distance, max_distance, origin + *direction * distance, normal)
    }
}

/// "Cast a ray from `origin` along `direction` for at most `max_distance`,
/// against colliders in `mask`; return the nearest hit or `None`."
///
/// `None` is an ordinary outcome. Failed queries must also be reported as
/// `None`.
pub trait RayCastPort {
    fn cast(&self, origin: Vec2, direction: Dir2, max_distance: f32, mask: LayerMask)
    -> Option<RayHit>;
}

impl<F> RayCastPort for F
where
    F: Fn(Vec2, Dir2, f32, LayerMask) -> Option<RayHit>,
{
    fn cast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        self(origin, direction, max_distance, mask)
    }
}

/// One ray a probe cast, kept for telemetry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCast {
    pub origin: Vec2,
    pub direction: Dir2,
    pub length: f32,
    pub hit: Option<RayHit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_distance_over_length() {
        let hit = RayHit::new(3.0, 12.0, Vec2::ZERO, Vec2::Y);
        assert_eq!(hit.fraction, 0.25);
    }

    #[test]
    fn hit_at_origin_is_still_a_hit() {
        let port = |origin: Vec2, _: Dir2, max: f32, _: LayerMask| {
            Some(RayHit::new(0.0, max, origin, Vec2::Y))
        };
        let hit = port.cast(Vec2::ZERO, Dir2::NEG_Y, 5.0, LayerMask::ALL);
        assert_eq!(hit.map(|h| h.fraction), Some(0.0));
    }

    #[test]
    fn along_places_point_on_the_ray() {
        let hit = RayHit::along(Vec2::new(1.0, 10.0), Dir2::NEG_Y, 4.0, 8.0, Vec2::Y);
        assert_eq!(hit.point, Vec2::new(1.0, 6.0));
        assert_eq!(hit.fraction, 0.5);
    }
}
