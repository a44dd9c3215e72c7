//! Kinematic controller core: ray-probed ground and wall resolution plus
//! velocity integration, independent of the ECS schedule.
//!
//! Per fixed tick the [`StepDriver`] rebuilds the bounding box, integrates
//! gravity, probes the ground, applies lateral acceleration, probes walls
//! and finally translates by velocity. Jump input is edge-detected per frame
//! and buffered for a short window.

mod bounds;
mod config;
mod driver;
mod error;
mod ground;
mod input;
mod integrator;
mod observer;
mod raycast;
mod state;
mod wall;


pub use bounds::{BoundingBox, RayFan};
pub use config::{
    ControllerConfig, GroundSelection, JumpImpulse, JumpTrigger, WallFilter, WallReach,
};
pub use driver::{StepDriver, StepReport};
pub use error::ConfigError;
pub use ground::{ground_cast_distance, probe_ground, select_hit};
pub use input::{HeldInput, InputPort};
pub use integrator::{apply_gravity, apply_lateral, sanitize_axis, try_jump};
pub use observer::{
    GroundReport, JumpReport, LogObserver, NoopObserver, ProbeObserver, ProbeResult, WallReport,
};
pub use raycast::{RayCast, RayCastPort, RayHit};
pub use state::{JumpBuffer, KinematicState, MotionPhase, WallContact};
pub use wall::{connecting_angle, is_wall_segment, probe_wall, wall_cast_distance};
