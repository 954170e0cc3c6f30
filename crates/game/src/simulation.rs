//! Game simulation - the driver loop.
//!
//! Look runs once per rendered frame. Velocity integration runs on a fixed
//! tick fed by an accumulator, so physics sees the same delta time no matter
//! how fast frames arrive.

use serde::{Deserialize, Serialize};
use strafe_physics::{
    CharacterBody, ConfigError, InputError, InputFrame, LookUpdate, MotionState, MovementConfig,
    PlayerController,
};
use thiserror::Error;

/// Errors raised by the simulation driver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("invalid movement config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("tick rate must be at least 1")]
    ZeroTickRate,

    #[error("max substeps must be at least 1")]
    ZeroSubsteps,

    #[error("max frame time must be finite and positive, got {0}")]
    InvalidMaxFrameTime(f32),
}

/// Game simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Physics tick rate (ticks per second).
    pub tick_rate: u32,

    /// Most physics ticks run for a single rendered frame.
    pub max_substeps: u32,

    /// Longest frame time fed to the accumulator (seconds). Longer frames
    /// (a debugger pause, a window drag) are cut to this.
    pub max_frame_time: f32,

    /// Movement physics configuration.
    pub movement: MovementConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 50,
            max_substeps: 8,
            max_frame_time: 0.25,
            movement: MovementConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Get the time step per tick in seconds.
    pub fn delta_time(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Check the driver settings and the movement config.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.tick_rate == 0 {
            return Err(SimulationError::ZeroTickRate);
        }
        if self.max_substeps == 0 {
            return Err(SimulationError::ZeroSubsteps);
        }
        if !(self.max_frame_time.is_finite() && self.max_frame_time > 0.0) {
            return Err(SimulationError::InvalidMaxFrameTime(self.max_frame_time));
        }
        self.movement.validate()?;
        Ok(())
    }
}

/// What one rendered frame did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Physics ticks run this frame.
    pub ticks: u32,

    /// Look result for the host to apply to its transforms.
    pub look: LookUpdate,

    /// Fraction of a tick left in the accumulator, for render interpolation.
    pub alpha: f32,
}

/// The driver loop for one controlled character.
#[derive(Debug)]
pub struct Simulation<B: CharacterBody> {
    /// Rendered frames processed.
    pub frame: u64,

    /// Physics ticks run.
    pub tick: u64,

    config: SimulationConfig,
    controller: PlayerController,
    state: MotionState,
    body: B,

    /// Unsimulated time carried between frames (seconds).
    accumulator: f32,

    /// A jump pressed on a frame that had no tick waits for the next one.
    pending_jump: bool,
}

impl<B: CharacterBody> Simulation<B> {
    /// Create a new simulation driving the given body.
    pub fn new(config: SimulationConfig, body: B) -> Result<Self, SimulationError> {
        config.validate()?;
        let controller = PlayerController::new(config.movement.clone())?;
        let state = MotionState {
            grounded: body.is_grounded(),
            ..Default::default()
        };

        Ok(Self {
            frame: 0,
            tick: 0,
            config,
            controller,
            state,
            body,
            accumulator: 0.0,
            pending_jump: false,
        })
    }

    /// Start from a given motion state instead of rest.
    pub fn with_state(mut self, state: MotionState) -> Self {
        self.state = state;
        self
    }

    /// Advance by one rendered frame.
    ///
    /// # Arguments
    ///
    /// * `input` - This frame's input
    /// * `frame_time` - Seconds since the previous rendered frame
    pub fn frame(
        &mut self,
        input: &InputFrame,
        frame_time: f32,
    ) -> Result<FrameReport, SimulationError> {
        input.validate()?;
        if !(frame_time.is_finite() && frame_time >= 0.0) {
            return Err(InputError::InvalidDeltaTime(frame_time).into());
        }

        // Visual cadence
        let (state, look) = self.controller.look(self.state, input, frame_time)?;
        self.state = state;
        self.pending_jump |= input.jump_requested;

        // Physics cadence
        if frame_time > self.config.max_frame_time {
            tracing::debug!(frame_time, max = self.config.max_frame_time, "frame time clamped");
        }
        self.accumulator += frame_time.min(self.config.max_frame_time);

        let delta_time = self.config.delta_time();
        let mut ticks = 0;
        while self.accumulator >= delta_time && ticks < self.config.max_substeps {
            let tick_input = InputFrame {
                jump_requested: self.pending_jump,
                ..*input
            };
            self.state = self
                .controller
                .fixed_update(self.state, &tick_input, &mut self.body, delta_time)?;
            self.pending_jump = false;

            self.accumulator -= delta_time;
            self.tick += 1;
            ticks += 1;
        }

        if self.accumulator >= delta_time {
            tracing::debug!(
                behind = self.accumulator,
                max_substeps = self.config.max_substeps,
                "substep limit reached, dropping time"
            );
            self.accumulator %= delta_time;
        }

        self.frame += 1;

        Ok(FrameReport {
            ticks,
            look,
            alpha: self.accumulator / delta_time,
        })
    }

    /// Current motion state.
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// The driven body.
    pub fn body(&self) -> &B {
        &self.body
    }

    /// Mutable access to the body (teleports, spawning).
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// The movement controller.
    pub fn controller(&self) -> &PlayerController {
        &self.controller
    }

    /// Simulation configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Get the physics time step.
    pub fn delta_time(&self) -> f32 {
        self.config.delta_time()
    }
}

// ============================================================================
// Tests
// ============================================================================
