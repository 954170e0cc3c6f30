//! Validation errors for configuration and per-frame input.

use thiserror::Error;

/// A [`MovementConfig`](crate::MovementConfig) that cannot drive the integrator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("sensitivity must be within [0, 1], got {0}")]
    SensitivityOutOfRange(f32),

    #[error("pitch limit must be within (0, 90] degrees, got {0}")]
    PitchLimitOutOfRange(f32),
}

/// An [`InputFrame`](crate::InputFrame) or delta time the host should not have sent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} has a non-finite component: ({x}, {y})")]
    NonFiniteAxis { field: &'static str, x: f32, y: f32 },

    #[error("delta time must be finite and non-negative, got {0}")]
    InvalidDeltaTime(f32),
}

/// Reject NaN, infinities and negative frame times.
pub(crate) fn check_delta_time(delta_time: f32) -> Result<(), InputError> {
    if delta_time.is_finite() && delta_time >= 0.0 {
        Ok(())
    } else {
        Err(InputError::InvalidDeltaTime(delta_time))
    }
}
