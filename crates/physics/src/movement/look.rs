//! Mouse/stick look.
//!
//! Yaw turns the body and accumulates without bound. Pitch is an absolute
//! angle on the camera pivot, clamped, and recomputed from the stored value
//! every frame so it cannot drift.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::config::MovementConfig;
use super::state::{InputFrame, MotionState};

/// Result of one look update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LookUpdate {
    /// Degrees to rotate the body about world up this frame.
    pub yaw_delta: f32,

    /// New absolute pitch of the camera pivot in degrees.
    pub pitch: f32,
}

/// Turns look input into yaw and pitch.
///
/// Runs on the visual cadence (every rendered frame), independent of the
/// physics tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookController {
    look_speed: f32,
    sensitivity: f32,
    invert_factor_x: f32,
    invert_factor_y: f32,
    pitch_limit: f32,
}

impl LookController {
    /// Build from config, rejecting configs that fail validation.
    /// Invert factors are fixed here.
    pub fn new(config: &MovementConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Build from a config that has already passed [`MovementConfig::validate`].
    pub(crate) fn from_validated(config: &MovementConfig) -> Self {
        Self {
            look_speed: config.look_speed,
            sensitivity: config.sensitivity,
            invert_factor_x: config.invert_factor_x(),
            invert_factor_y: config.invert_factor_y(),
            pitch_limit: config.pitch_limit,
        }
    }

    /// Compute the yaw delta and the new pitch for one frame.
    ///
    /// # Arguments
    ///
    /// * `pitch` - The current camera pitch in degrees
    /// * `input` - This frame's input; only `look_delta` is read
    /// * `delta_time` - Frame time in seconds
    pub fn update_look(&self, pitch: f32, input: &InputFrame, delta_time: f32) -> LookUpdate {
        let scale = self.look_speed * delta_time * self.sensitivity;

        let yaw_delta = input.look_delta.x * scale * self.invert_factor_x;
        let pitch_delta = input.look_delta.y * scale * self.invert_factor_y;

        // Looking up (positive y) lowers the pitch angle
        let pitch = (pitch - pitch_delta).clamp(-self.pitch_limit, self.pitch_limit);

        LookUpdate { yaw_delta, pitch }
    }

    /// Apply one frame of look to a state.
    ///
    /// Returns the new state along with the update, so the host can rotate its
    /// body transform by `yaw_delta` and set the pivot to `pitch`.
    pub fn apply(
        &self,
        state: MotionState,
        input: &InputFrame,
        delta_time: f32,
    ) -> (MotionState, LookUpdate) {
        let update = self.update_look(state.pitch, input, delta_time);
        let state = MotionState {
            yaw: state.yaw + update.yaw_delta,
            pitch: update.pitch,
            ..state
        };
        (state, update)
    }
}
