//! Strafe Game Glue
//!
//! This crate contains everything between a host engine and the movement
//! core that is still plain Rust:
//!
//! - Raw input mapping with one-shot jump detection
//! - The fixed-timestep driver loop
//! - A flat-floor reference body
//! - The debug readout
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Simulation                            │
//! │  ┌─────────┐   every frame   ┌──────┐                        │
//! │  │ Input   │────────────────►│ Look │──► yaw / pitch         │
//! │  │ Mapper  │                 └──────┘                        │
//! │  │         │   fixed tick    ┌────────────┐    ┌──────────┐  │
//! │  │         │────────────────►│ Integrator │───►│ Body     │  │
//! │  └─────────┘                 └────────────┘    │ move_by  │  │
//! │                                    ▲           └────┬─────┘  │
//! │                                    └──── grounded ──┘        │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod body;
pub mod debug;
pub mod input;
pub mod simulation;

// Re-export main types
pub use body::{Arena, FlatGroundBody};
pub use debug::DebugReadout;
pub use input::{InputMapper, PlayerInput};
pub use simulation::{FrameReport, Simulation, SimulationConfig, SimulationError};

// Re-export physics types for convenience
pub use strafe_physics::{
    CharacterBody, InputFrame, LookUpdate, MotionState, MovementConfig, PlayerController,
};
