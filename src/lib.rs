//! Ray-probed kinematic character controller for 2D platformers, built on
//! bevy and avian2d.
//!
//! [`movement::kinematics`] holds the controller itself and does not depend
//! on the ECS schedule; the remaining modules wire it into a demo app.

pub mod content;
pub mod core;
pub mod debug;
pub mod level;
pub mod movement;
