//! Movement domain: avian spatial queries behind the controller's ray-cast
//! port.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::kinematics::{RayCastPort, RayHit};

/// Casts against the avian world on behalf of one body, never hitting the
/// body's own collider.
pub(crate) struct SpatialRayCaster<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    body: Entity,
}

impl<'a, 'w, 's> SpatialRayCaster<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>, body: Entity) -> Self {
        Self {
            spatial_query,
            body,
        }
    }
}

impl RayCastPort for SpatialRayCaster<'_, '_, '_> {
    fn cast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        if !origin.is_finite() || !max_distance.is_finite() || max_distance <= 0.0 {
            return None;
        }

        let filter = SpatialQueryFilter::from_mask(mask).with_excluded_entities([self.body]);
        let hit = self
            .spatial_query
            .cast_ray(origin, direction, max_distance, true, &filter)?;

        Some(RayHit::along(
            origin,
            direction,
            hit.distance,
            max_distance,
            hit.normal,
        ))
    }
}
