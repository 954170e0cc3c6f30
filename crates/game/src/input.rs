//! Player input handling.
//!
//! This module converts raw input (keyboard, mouse, gamepad) into
//! [`InputFrame`]s for the movement controller.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use strafe_physics::InputFrame;

/// Raw player input for a single rendered frame.
///
/// This is the input format received from the host's input system.
/// It gets converted to [`InputFrame`] by an [`InputMapper`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Movement keys held.
    pub movement: MovementInput,

    /// Analog movement stick (x = right, y = forward). Overrides keys when non-zero.
    pub move_axis: (f32, f32),

    /// Look delta this frame (mouse or right stick; x = right, y = up).
    pub look_delta: (f32, f32),

    /// Jump button held.
    pub jump: bool,
}

/// Movement key states.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl PlayerInput {
    /// Movement axes in [-1, 1], diagonal magnitude clamped to 1.
    pub fn move_axes(&self) -> Vec2 {
        let stick = Vec2::new(self.move_axis.0, self.move_axis.1);
        let axes = if stick != Vec2::ZERO {
            stick
        } else {
            let mut keys = Vec2::ZERO;
            if self.movement.forward {
                keys.y += 1.0;
            }
            if self.movement.backward {
                keys.y -= 1.0;
            }
            if self.movement.right {
                keys.x += 1.0;
            }
            if self.movement.left {
                keys.x -= 1.0;
            }
            keys
        };

        // Normalize diagonal movement
        axes.clamp_length_max(1.0)
    }

    /// Check if any movement input is active.
    pub fn has_movement(&self) -> bool {
        self.move_axes() != Vec2::ZERO
    }
}

/// Converts raw input to input frames, turning the held jump button into a
/// one-shot request.
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    /// Previous frame's jump input (for edge detection).
    prev_jump_pressed: bool,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert one frame of raw input.
    ///
    /// `jump_requested` is set only on the frame the button goes down.
    pub fn map(&mut self, input: &PlayerInput) -> InputFrame {
        let jump_just_pressed = input.jump && !self.prev_jump_pressed;
        self.prev_jump_pressed = input.jump;

        InputFrame {
            look_delta: Vec2::new(input.look_delta.0, input.look_delta.1),
            move_delta: input.move_axes(),
            jump_requested: jump_just_pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_to_axes() {
        let mut input = PlayerInput::default();
        input.movement.forward = true;

        let frame = InputMapper::new().map(&input);
        assert_eq!(frame.move_delta, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_diagonal_normalized() {
        let mut input = PlayerInput::default();
        input.movement.forward = true;
        input.movement.right = true;

        let axes = input.move_axes();
        assert!(axes.x > 0.0 && axes.x < 1.0);
        assert!(axes.y > 0.0 && axes.y < 1.0);
        assert!((axes.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut input = PlayerInput::default();
        input.movement.left = true;
        input.movement.right = true;

        assert!(!input.has_movement());
    }

    #[test]
    fn test_stick_overrides_keys() {
        let mut input = PlayerInput::default();
        input.movement.forward = true;
        input.move_axis = (0.5, 0.0);

        assert_eq!(input.move_axes(), Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_jump_fires_once_per_press() {
        let mut mapper = InputMapper::new();
        let held = PlayerInput {
            jump: true,
            ..Default::default()
        };
        let released = PlayerInput::default();

        assert!(mapper.map(&held).jump_requested);
        assert!(!mapper.map(&held).jump_requested);
        assert!(!mapper.map(&held).jump_requested);
        assert!(!mapper.map(&released).jump_requested);
        assert!(mapper.map(&held).jump_requested);
    }

    #[test]
    fn test_look_delta_passthrough() {
        let input = PlayerInput {
            look_delta: (3.0, -1.5),
            ..Default::default()
        };

        let frame = InputMapper::new().map(&input);
        assert_eq!(frame.look_delta, Vec2::new(3.0, -1.5));
        assert!(!frame.jump_requested);
    }
}
