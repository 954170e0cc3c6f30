//! Strafe Physics
//!
//! First-person character movement in the Quake tradition: ground friction with
//! a stop-speed snap, clamped acceleration that still allows air strafing,
//! gravity, jumping and a small downward bias that keeps ground contact stable.
//!
//! # Architecture
//!
//! The crate is split into two systems:
//!
//! - **Body**: the [`CharacterBody`] seam. The host owns collision; it reports
//!   whether the character is grounded and performs collision-resolved moves.
//! - **Movement**: look and velocity integration that feed the body.
//!
//! # Design Principles
//!
//! 1. **Values in, values out**: every update takes a [`MotionState`] and
//!    returns a new one. Nothing is hidden between ticks.
//! 2. **Two cadences**: look runs every rendered frame, velocity integration
//!    runs on a fixed physics tick. They are separate entry points.
//! 3. **Validate at the boundary**: configs and input frames are checked once
//!    on the way in; the math after that is total.

pub mod body;
pub mod error;
pub mod movement;

// Re-export commonly used types
pub use body::CharacterBody;
pub use error::{ConfigError, InputError};
pub use movement::{
    InputFrame, LookController, LookUpdate, MotionState, MovementConfig, PlayerController,
    VelocityIntegrator,
};
