//! Player look and movement.
//!
//! This module implements Quake-style first-person movement with:
//!
//! - Ground and air movement sharing one acceleration rule
//! - Friction with a stop-speed snap on the ground only
//! - Gravity, jumping and a ground-snap bias
//! - Yaw/pitch look with inversion, sensitivity and a pitch clamp
//!
//! # Design
//!
//! [`PlayerController`] takes [`InputFrame`]s and returns new [`MotionState`]s.
//! Look ([`LookController`]) and velocity ([`VelocityIntegrator`]) are separate
//! so the host can run them on different cadences.

mod config;
mod controller;
mod integrator;
mod look;
mod state;

pub use config::MovementConfig;
pub use controller::PlayerController;
pub use integrator::{accelerate, VelocityIntegrator};
pub use look::{LookController, LookUpdate};
pub use state::{InputFrame, MotionState};
