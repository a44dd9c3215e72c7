//! Hook for watching probe results without putting debug drawing or
//! logging inside the probes.

use bevy::prelude::*;

use super::raycast::{RayCast, RayHit};
use super::state::WallContact;

/// The ray a probe acted on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeResult {
    /// Index of the ray within its fan.
    pub ray: usize,
    /// Length the ray was cast with.
    pub cast_distance: f32,
    pub hit: RayHit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroundReport {
    pub casts: Vec<RayCast>,
    pub selected: Option<ProbeResult>,
    /// Downward translation applied to snap onto the surface.
    pub snap: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WallReport {
    pub casts: Vec<RayCast>,
    /// The hit that stopped the character, if any.
    pub confirmed: Option<ProbeResult>,
    pub contact: WallContact,
    /// Angles (degrees from horizontal) of every consecutive hit pair that
    /// was examined.
    pub pair_angles: Vec<f32>,
    /// Translation applied along the travel direction.
    pub push: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpReport {
    pub at: f32,
    pub velocity: f32,
    /// How long the press waited in the buffer.
    pub buffered_for: f32,
}

/// Receives probe and jump results as they happen. All methods default to
/// doing nothing.
pub trait ProbeObserver {
    fn ground_probe(&mut self, _report: &GroundReport) {}

    fn wall_probe(&mut self, _report: &WallReport) {}

    fn jumped(&mut self, _report: &JumpReport) {}
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProbeObserver for NoopObserver {}

/// Forwards contact changes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ProbeObserver for LogObserver {
    fn ground_probe(&mut self, report: &GroundReport) {
        match &report.selected {
            Some(result) => trace!(
                "Ground probe: ray {} hit at fraction {:.3}, snap {:.3}",
                result.ray, result.hit.fraction, report.snap
            ),
            None => trace!("Ground probe: no hit over {} rays", report.casts.len()),
        }
    }

    fn wall_probe(&mut self, report: &WallReport) {
        if let Some(result) = &report.confirmed {
            debug!(
                "Wall stop: {:?} via ray {} at {:?}, push {:.3}",
                report.contact, result.ray, result.hit.point, report.push
            );
        } else if !report.pair_angles.is_empty() {
            trace!("Wall hits rejected, angles {:?}", report.pair_angles);
        }
    }

    fn jumped(&mut self, report: &JumpReport) {
        debug!(
            "Jump at t={:.3}: vy={:.2}, buffered {:.3}s",
            report.at, report.velocity, report.buffered_for
        );
    }
}
