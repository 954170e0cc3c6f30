//! Debug readout for an on-screen overlay or log line.

use std::fmt;

use glam::Vec3;
use strafe_physics::MotionState;

/// Snapshot of the values worth watching while tuning movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugReadout {
    pub wish_direction: Vec3,
    pub velocity: Vec3,
    /// Speed on the x/z plane.
    pub speed: f32,
    pub grounded: bool,
}

impl From<&MotionState> for DebugReadout {
    fn from(state: &MotionState) -> Self {
        Self {
            wish_direction: state.wish_direction,
            velocity: state.velocity,
            speed: state.horizontal_speed(),
            grounded: state.grounded,
        }
    }
}

struct Vector(Vec3);

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.0.x, self.0.y, self.0.z)
    }
}

impl fmt::Display for DebugReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "wish dir: {}", Vector(self.wish_direction))?;
        writeln!(f, "velocity: {}", Vector(self.velocity))?;
        writeln!(f, "speed: {:.2}", self.speed)?;
        write!(f, "ground: {}", self.grounded)
    }
}
