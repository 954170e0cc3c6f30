//! The seam between the movement model and the host's collision system.

use glam::Vec3;

/// A collider the host moves on behalf of the controller.
///
/// The controller never resolves collisions itself. Each physics tick it asks
/// the body whether it rests on walkable ground, integrates velocity, then
/// hands the body `velocity * dt` to move. The body may shorten that
/// displacement when it hits something; the controller does not read the
/// achieved displacement back into its velocity.
pub trait CharacterBody {
    /// Whether the collider currently reports resting contact with walkable ground.
    fn is_grounded(&self) -> bool;

    /// Move by a world-space displacement, resolving collisions.
    fn move_by(&mut self, displacement: Vec3);
}
