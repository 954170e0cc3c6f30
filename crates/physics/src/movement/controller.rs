//! Player movement controller.
//!
//! This is the main entry point for player movement. It takes input frames
//! and threads the motion state through look, velocity integration and the
//! host's body.

use crate::body::CharacterBody;
use crate::error::{check_delta_time, ConfigError, InputError};

use super::config::MovementConfig;
use super::integrator::VelocityIntegrator;
use super::look::{LookController, LookUpdate};
use super::state::{InputFrame, MotionState};

/// Player movement controller.
///
/// Owns a validated config and the two update routines built from it:
/// - [`look`](Self::look) on every rendered frame
/// - [`fixed_update`](Self::fixed_update) on every physics tick
///
/// # Example
///
/// ```ignore
/// let controller = PlayerController::new(MovementConfig::default())?;
/// let mut state = MotionState::default();
///
/// // Each rendered frame:
/// let (next, look) = controller.look(state, &input, frame_time)?;
/// state = next;
///
/// // Each physics tick:
/// state = controller.fixed_update(state, &input, &mut body, tick_time)?;
/// ```
#[derive(Debug, Clone)]
pub struct PlayerController {
    config: MovementConfig,
    look: LookController,
    integrator: VelocityIntegrator,
}

impl PlayerController {
    /// Create a new controller, rejecting configs the integrator cannot use.
    pub fn new(config: MovementConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Create a controller with default configuration.
    pub fn with_default_config() -> Self {
        let config = MovementConfig::default();
        debug_assert!(config.validate().is_ok(), "default movement config must validate");
        Self::from_validated(config)
    }

    fn from_validated(config: MovementConfig) -> Self {
        Self {
            look: LookController::from_validated(&config),
            integrator: VelocityIntegrator::from_validated(&config),
            config,
        }
    }

    /// The config this controller was built from.
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// The look routine.
    pub fn look_controller(&self) -> &LookController {
        &self.look
    }

    /// The velocity routine.
    pub fn integrator(&self) -> &VelocityIntegrator {
        &self.integrator
    }

    // ========================================================================
    // Visual cadence
    // ========================================================================

    /// Update view angles for one rendered frame.
    pub fn look(
        &self,
        state: MotionState,
        input: &InputFrame,
        delta_time: f32,
    ) -> Result<(MotionState, LookUpdate), InputError> {
        input.validate()?;
        check_delta_time(delta_time)?;

        Ok(self.look.apply(state, input, delta_time))
    }

    // ========================================================================
    // Physics cadence
    // ========================================================================

    /// Advance velocity by one physics tick and move the body.
    ///
    /// # Arguments
    ///
    /// * `state` - Motion state from the previous tick
    /// * `input` - This tick's input; `move_delta` and `jump_requested` are read
    /// * `body` - The host collider, queried for ground contact and moved
    /// * `delta_time` - Tick duration in seconds
    pub fn fixed_update<B: CharacterBody>(
        &self,
        state: MotionState,
        input: &InputFrame,
        body: &mut B,
        delta_time: f32,
    ) -> Result<MotionState, InputError> {
        input.validate()?;
        check_delta_time(delta_time)?;

        let grounded = body.is_grounded();
        let mut state = MotionState { grounded, ..state };

        // A jump that arrives before integration takes this tick
        if input.jump_requested {
            state = self.jump(state);
        }

        let wish_direction = state.wish_direction(input.move_delta);
        let velocity = self
            .integrator
            .step(wish_direction, state.velocity, grounded, delta_time);

        // The body may shorten this move; velocity is not reconciled with it
        body.move_by(velocity * delta_time);

        let landed = body.is_grounded();
        if landed && !grounded {
            tracing::debug!(?velocity, "landed");
        }
        tracing::trace!(?wish_direction, ?velocity, grounded = landed, "tick");

        Ok(MotionState {
            velocity,
            grounded: landed,
            wish_direction,
            ..state
        })
    }

    /// Jump if grounded. Airborne requests are dropped.
    pub fn jump(&self, state: MotionState) -> MotionState {
        if !state.grounded {
            tracing::trace!("jump ignored while airborne");
            return state;
        }

        tracing::debug!(impulse = self.config.jump_impulse, "jump");
        MotionState {
            velocity: self.integrator.jump(state.velocity, state.grounded),
            ..state
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
