//! Reference character body: an infinite flat floor with optional walls.
//!
//! Stands in for an engine's capsule collider in the demo and in tests.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use strafe_physics::CharacterBody;

/// Distance above the floor still counted as contact (meters).
pub const CONTACT_TOLERANCE: f32 = 0.001;

/// Axis-aligned walls on the x/z plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub min: Vec2,
    pub max: Vec2,
}

impl Arena {
    /// An arena spanning two opposite corners, given in any order.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// A square arena centered on the origin.
    pub fn square(half_extent: f32) -> Self {
        let half_extent = half_extent.abs();
        Self::new(Vec2::splat(-half_extent), Vec2::splat(half_extent))
    }

    /// Clamp an x/z point inside the walls.
    ///
    /// Bounds are reordered first, so an arena deserialized or built with
    /// `min` and `max` swapped still confines instead of panicking.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        let lo = self.min.min(self.max);
        let hi = self.min.max(self.max);
        point.max(lo).min(hi)
    }
}

/// A point collider over a horizontal floor.
///
/// Moves that would sink below the floor stop on it; moves that would leave
/// the arena stop at the wall. Either way the displacement is shortened and
/// the caller's velocity is left as it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatGroundBody {
    /// Feet position in world space.
    pub position: Vec3,

    /// Height of the floor plane.
    pub floor_height: f32,

    /// Optional walls.
    pub arena: Option<Arena>,

    grounded: bool,
}

impl FlatGroundBody {
    /// Create a body at the given position over a floor at `floor_height`.
    pub fn new(position: Vec3, floor_height: f32) -> Self {
        let position = Vec3::new(position.x, position.y.max(floor_height), position.z);
        Self {
            position,
            floor_height,
            arena: None,
            grounded: position.y - floor_height <= CONTACT_TOLERANCE,
        }
    }

    /// Create a body standing on a floor at y = 0.
    pub fn on_floor() -> Self {
        Self::new(Vec3::ZERO, 0.0)
    }

    /// The same body, confined to an arena.
    pub fn with_arena(mut self, arena: Arena) -> Self {
        let clamped = arena.clamp(Vec2::new(self.position.x, self.position.z));
        self.position.x = clamped.x;
        self.position.z = clamped.y;
        self.arena = Some(arena);
        self
    }

    /// Height of the feet above the floor.
    pub fn height_above_floor(&self) -> f32 {
        self.position.y - self.floor_height
    }
}

impl CharacterBody for FlatGroundBody {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, displacement: Vec3) {
        let mut target = self.position + displacement;

        if let Some(arena) = self.arena {
            let clamped = arena.clamp(Vec2::new(target.x, target.z));
            if clamped.x != target.x || clamped.y != target.z {
                tracing::trace!(?target, "move clipped by arena wall");
            }
            target.x = clamped.x;
            target.z = clamped.y;
        }

        if target.y <= self.floor_height {
            target.y = self.floor_height;
        }

        self.position = target;
        self.grounded = self.height_above_floor() <= CONTACT_TOLERANCE;
    }
}
