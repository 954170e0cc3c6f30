//! Movement configuration constants.
//!
//! All tuning lives here. Defaults are the classic feel: quick ground
//! acceleration, strong friction, a heavy-ish jump.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for player look and movement.
///
/// All values use metric units (meters, seconds) unless otherwise noted.
/// Set once when the [`PlayerController`](super::PlayerController) is built and
/// read-only after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    // ========================================================================
    // Movement
    // ========================================================================
    /// Speed cap along the wish direction (meters/second).
    pub max_speed: f32,

    /// Acceleration toward the wish direction, ground and air (meters/second²).
    pub acceleration: f32,

    /// Horizontal speed at or below which ground movement stops dead (meters/second).
    pub stop_speed: f32,

    /// Ground friction coefficient (fraction of speed lost per second).
    pub friction: f32,

    // ========================================================================
    // Vertical
    // ========================================================================
    /// Gravity acceleration (meters/second²).
    pub gravity: f32,

    /// Vertical velocity set by a jump (meters/second).
    pub jump_impulse: f32,

    /// Downward speed forced while grounded, so contact keeps registering on
    /// slopes and uneven ground (meters/second, applied as `-ground_snap_speed`).
    pub ground_snap_speed: f32,

    // ========================================================================
    // Look
    // ========================================================================
    /// Look rate in degrees per second at full input deflection.
    pub look_speed: f32,

    /// Look sensitivity multiplier, within [0, 1].
    pub sensitivity: f32,

    /// Flip horizontal look.
    pub invert_x: bool,

    /// Flip vertical look.
    pub invert_y: bool,

    /// Pitch clamp in degrees, applied symmetrically.
    pub pitch_limit: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            // Movement
            max_speed: 6.0,
            acceleration: 60.0, // reaches max speed in 0.1s from rest
            stop_speed: 0.5,
            friction: 4.0,

            // Vertical
            gravity: 15.0, // Slightly higher than real for game feel
            jump_impulse: 10.0,
            ground_snap_speed: 2.0,

            // Look
            look_speed: 60.0,
            sensitivity: 1.0,
            invert_x: false,
            invert_y: false,
            pitch_limit: 90.0,
        }
    }
}

impl MovementConfig {
    /// Create a "fast arcade" config: snappier acceleration, floatier jumps.
    pub fn arcade() -> Self {
        Self {
            max_speed: 9.0,
            acceleration: 120.0,
            friction: 6.0,
            gravity: 12.0,
            jump_impulse: 8.0,
            look_speed: 120.0,
            ..Default::default()
        }
    }

    /// Create a "heavy" config: slow to start, slides less, short jumps.
    pub fn heavy() -> Self {
        Self {
            max_speed: 4.0,
            acceleration: 20.0,
            stop_speed: 1.0,
            friction: 8.0,
            gravity: 20.0,
            jump_impulse: 6.0,
            ..Default::default()
        }
    }

    /// Check every field before the config reaches the integrator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("max_speed", self.max_speed),
            ("acceleration", self.acceleration),
            ("stop_speed", self.stop_speed),
            ("friction", self.friction),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("ground_snap_speed", self.ground_snap_speed),
            ("look_speed", self.look_speed),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if !(0.0..=1.0).contains(&self.sensitivity) {
            return Err(ConfigError::SensitivityOutOfRange(self.sensitivity));
        }

        if !(self.pitch_limit > 0.0 && self.pitch_limit <= 90.0) {
            return Err(ConfigError::PitchLimitOutOfRange(self.pitch_limit));
        }

        Ok(())
    }

    /// Look multiplier for the horizontal axis: -1 when inverted, else +1.
    #[inline]
    pub fn invert_factor_x(&self) -> f32 {
        if self.invert_x { -1.0 } else { 1.0 }
    }

    /// Look multiplier for the vertical axis: -1 when inverted, else +1.
    #[inline]
    pub fn invert_factor_y(&self) -> f32 {
        if self.invert_y { -1.0 } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MovementConfig::default();
        assert_eq!(config.max_speed, 6.0);
        assert_eq!(config.acceleration, 60.0);
        assert_eq!(config.gravity, 15.0);
        assert_eq!(config.stop_speed, 0.5);
        assert_eq!(config.jump_impulse, 10.0);
        assert_eq!(config.friction, 4.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(MovementConfig::arcade().validate().is_ok());
        assert!(MovementConfig::heavy().validate().is_ok());
    }

    #[test]
    fn test_invert_factors() {
        let mut config = MovementConfig::default();
        assert_eq!(config.invert_factor_x(), 1.0);
        assert_eq!(config.invert_factor_y(), 1.0);

        config.invert_x = true;
        config.invert_y = true;
        assert_eq!(config.invert_factor_x(), -1.0);
        assert_eq!(config.invert_factor_y(), -1.0);
    }

    #[test]
    fn test_validate_rejects_negative() {
        let config = MovementConfig { gravity: -9.8, ..Default::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative { field: "gravity", value: -9.8 })
        );
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let config = MovementConfig { friction: f32::INFINITY, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "friction", .. })
        ));

        let config = MovementConfig { max_speed: f32::NAN, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "max_speed", .. })
        ));
    }

    #[test]
    fn test_validate_sensitivity_range() {
        let config = MovementConfig { sensitivity: 1.2, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::SensitivityOutOfRange(1.2)));

        let config = MovementConfig { sensitivity: f32::NAN, ..Default::default() };
        assert!(config.validate().is_err());

        let config = MovementConfig { sensitivity: 0.0, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_pitch_limit() {
        let config = MovementConfig { pitch_limit: 0.0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = MovementConfig { pitch_limit: 120.0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::PitchLimitOutOfRange(120.0)));

        let config = MovementConfig { pitch_limit: 89.0, ..Default::default() };
        assert!(config.validate().is_ok());
    }
}
