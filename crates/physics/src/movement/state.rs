//! Motion state and input structures.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Complete motion state for a character.
///
/// This is a plain value. Every update takes one and returns a new one, so
/// nothing carries over between ticks except what is written here:
/// - Velocity and ground contact
/// - View angles (yaw on the body, pitch on the camera pivot)
/// - The last wish direction, for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    /// Velocity in world space (meters/second).
    pub velocity: Vec3,

    /// Ground contact as last reported by the body.
    pub grounded: bool,

    /// Horizontal look angle of the camera pivot in degrees.
    ///
    /// Positive looks down. Always within the configured pitch limit.
    pub pitch: f32,

    /// Body heading in degrees about world up. Unbounded.
    ///
    /// Yaw 0 faces +Z; positive yaw turns right (clockwise seen from above).
    pub yaw: f32,

    /// Wish direction used by the most recent physics tick.
    pub wish_direction: Vec3,
}

impl MotionState {
    /// Create a state at rest, facing the given yaw.
    pub fn facing(yaw: f32) -> Self {
        Self {
            yaw,
            ..Default::default()
        }
    }

    /// Forward direction from yaw (horizontal only).
    pub fn forward_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        Vec3::new(sin_yaw, 0.0, cos_yaw)
    }

    /// Right direction from yaw (horizontal only).
    pub fn right_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        Vec3::new(cos_yaw, 0.0, -sin_yaw)
    }

    /// World-space unit direction the move input asks for, or zero.
    ///
    /// `move_delta.x` strafes right, `move_delta.y` moves forward.
    pub fn wish_direction(&self, move_delta: Vec2) -> Vec3 {
        let wish = self.right_direction() * move_delta.x + self.forward_direction() * move_delta.y;
        wish.normalize_or_zero()
    }

    /// Get current horizontal speed.
    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }
}

/// Input for a single frame or tick.
///
/// Supplied fresh by the host every time; never stored by the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Look input. x turns right, y looks up.
    pub look_delta: Vec2,

    /// Movement input, each axis conventionally in [-1, 1].
    /// x strafes right, y moves forward.
    pub move_delta: Vec2,

    /// A jump was pressed since the last tick (edge, not level).
    pub jump_requested: bool,
}

impl InputFrame {
    /// Create an input frame with no jump.
    pub fn new(look_delta: Vec2, move_delta: Vec2) -> Self {
        Self {
            look_delta,
            move_delta,
            jump_requested: false,
        }
    }

    /// The same frame with a jump requested.
    pub fn with_jump(mut self) -> Self {
        self.jump_requested = true;
        self
    }

    /// Check if any movement input is active.
    #[inline]
    pub fn has_movement_input(&self) -> bool {
        self.move_delta != Vec2::ZERO
    }

    /// Reject frames with NaN or infinite components.
    pub fn validate(&self) -> Result<(), InputError> {
        for (field, axis) in [("look_delta", self.look_delta), ("move_delta", self.move_delta)] {
            if !axis.is_finite() {
                return Err(InputError::NonFiniteAxis {
                    field,
                    x: axis.x,
                    y: axis.y,
                });
            }
        }
        Ok(())
    }
}
