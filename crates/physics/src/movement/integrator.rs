//! Per-tick velocity integration.
//!
//! Ground and air share one acceleration rule. The ground path runs friction
//! on the horizontal plane first; the air path does not. Gravity and the
//! ground snap run after either one.

use glam::Vec3;

use crate::error::ConfigError;

use super::config::MovementConfig;

/// Accelerate `velocity` toward `wish_direction`.
///
/// Only the component of velocity already aligned with the wish direction is
/// capped at `max_speed`. Speed in other directions is left alone, which is
/// what makes air strafing work. A zero wish direction returns `velocity`
/// unchanged.
#[inline]
pub fn accelerate(
    wish_direction: Vec3,
    velocity: Vec3,
    acceleration: f32,
    max_speed: f32,
    delta_time: f32,
) -> Vec3 {
    let projected_speed = velocity.dot(wish_direction);
    let mut accel_speed = acceleration * delta_time;

    if projected_speed + accel_speed > max_speed {
        accel_speed = max_speed - projected_speed;
    }

    velocity + wish_direction * accel_speed
}

/// Produces the next velocity from the current one each physics tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityIntegrator {
    max_speed: f32,
    acceleration: f32,
    stop_speed: f32,
    friction: f32,
    gravity: f32,
    jump_impulse: f32,
    ground_snap_speed: f32,
}

impl VelocityIntegrator {
    /// Build from config, rejecting configs that fail validation.
    pub fn new(config: &MovementConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Build from a config that has already passed [`MovementConfig::validate`].
    pub(crate) fn from_validated(config: &MovementConfig) -> Self {
        Self {
            max_speed: config.max_speed,
            acceleration: config.acceleration,
            stop_speed: config.stop_speed,
            friction: config.friction,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
            ground_snap_speed: config.ground_snap_speed,
        }
    }

    /// Integrate one physics tick.
    ///
    /// # Arguments
    ///
    /// * `wish_direction` - Unit horizontal direction, or zero for no input
    /// * `velocity` - Velocity at the start of the tick
    /// * `grounded` - Ground contact reported by the body this tick
    /// * `delta_time` - Tick duration in seconds
    pub fn step(
        &self,
        wish_direction: Vec3,
        velocity: Vec3,
        grounded: bool,
        delta_time: f32,
    ) -> Vec3 {
        let velocity = if grounded {
            self.move_ground(wish_direction, velocity, delta_time)
        } else {
            self.move_air(wish_direction, velocity, delta_time)
        };

        let velocity = self.apply_gravity(velocity, delta_time);
        self.ground_snap(velocity, grounded)
    }

    // ========================================================================
    // Acceleration
    // ========================================================================

    /// Friction on the horizontal plane, then acceleration.
    pub fn move_ground(&self, wish_direction: Vec3, velocity: Vec3, delta_time: f32) -> Vec3 {
        let horizontal = self.apply_friction(Vec3::new(velocity.x, 0.0, velocity.z), delta_time);
        let velocity = Vec3::new(horizontal.x, velocity.y, horizontal.z);

        accelerate(wish_direction, velocity, self.acceleration, self.max_speed, delta_time)
    }

    /// Acceleration only; velocity keeps whatever it already carries.
    pub fn move_air(&self, wish_direction: Vec3, velocity: Vec3, delta_time: f32) -> Vec3 {
        accelerate(wish_direction, velocity, self.acceleration, self.max_speed, delta_time)
    }

    fn apply_friction(&self, horizontal: Vec3, delta_time: f32) -> Vec3 {
        let speed = horizontal.length();

        // Kill residual sliding outright
        if speed <= self.stop_speed || speed == 0.0 {
            return Vec3::ZERO;
        }

        let drop = speed * self.friction * delta_time;
        horizontal * ((speed - drop).max(0.0) / speed)
    }

    // ========================================================================
    // Vertical
    // ========================================================================

    /// Pull velocity down by `gravity * dt`. Runs every tick, grounded or not.
    #[inline]
    pub fn apply_gravity(&self, velocity: Vec3, delta_time: f32) -> Vec3 {
        Vec3::new(velocity.x, velocity.y - self.gravity * delta_time, velocity.z)
    }

    /// While grounded, replace any downward velocity with a small constant bias.
    #[inline]
    pub fn ground_snap(&self, velocity: Vec3, grounded: bool) -> Vec3 {
        if grounded && velocity.y < 0.0 {
            Vec3::new(velocity.x, -self.ground_snap_speed, velocity.z)
        } else {
            velocity
        }
    }

    /// Set vertical velocity to the jump impulse if grounded.
    #[inline]
    pub fn jump(&self, velocity: Vec3, grounded: bool) -> Vec3 {
        if grounded {
            Vec3::new(velocity.x, self.jump_impulse, velocity.z)
        } else {
            velocity
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: f32 = 1.0 / 60.0;

    fn integrator() -> VelocityIntegrator {
        VelocityIntegrator::new(&MovementConfig::default()).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = MovementConfig {
            friction: -4.0,
            ..Default::default()
        };
        assert_eq!(
            VelocityIntegrator::new(&config).err(),
            Some(ConfigError::Negative { field: "friction", value: -4.0 })
        );

        let config = MovementConfig {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(VelocityIntegrator::new(&config).is_err());
    }

    #[test]
    fn test_ground_acceleration_from_rest() {
        let velocity = integrator().step(Vec3::X, Vec3::ZERO, true, TICK);

        assert!((velocity.x - 1.0).abs() < 1e-5, "got {}", velocity.x);
        assert_eq!(velocity.z, 0.0);
    }

    #[test]
    fn test_stop_speed_snaps_to_zero() {
        let velocity = integrator().step(Vec3::ZERO, Vec3::new(0.3, 0.0, 0.0), true, TICK);

        assert_eq!(velocity.x, 0.0);
        assert_eq!(velocity.z, 0.0);
    }

    #[test]
    fn test_stop_speed_is_inclusive() {
        let velocity = integrator().move_ground(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.5), TICK);
        assert_eq!(velocity, Vec3::ZERO);
    }

    #[test]
    fn test_ground_zero_velocity_is_idempotent() {
        let integrator = integrator();
        let mut velocity = Vec3::new(0.0, -2.0, 0.0);

        for _ in 0..10 {
            velocity = integrator.move_ground(Vec3::ZERO, velocity, TICK);
            assert_eq!(velocity.x, 0.0);
            assert_eq!(velocity.z, 0.0);
            assert_eq!(velocity.y, -2.0);
        }
    }

    #[test]
    fn test_friction_decays_horizontal_only() {
        let velocity = integrator().move_ground(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0), 0.1);

        // drop = 3 * 4 * 0.1 = 1.2
        assert!((velocity.x - 1.8).abs() < 1e-5);
        assert_eq!(velocity.y, 4.0);
        assert_eq!(velocity.z, 0.0);
    }

    #[test]
    fn test_friction_never_reverses() {
        // friction * dt > 1 would overshoot without the max(0)
        let velocity = integrator().move_ground(Vec3::ZERO, Vec3::new(5.0, 0.0, 5.0), 0.5);
        assert_eq!(velocity, Vec3::ZERO);
    }

    #[test]
    fn test_air_has_no_friction() {
        let velocity = integrator().move_air(Vec3::ZERO, Vec3::new(0.3, 1.0, -4.0), TICK);
        assert_eq!(velocity, Vec3::new(0.3, 1.0, -4.0));
    }

    #[test]
    fn test_airborne_gravity() {
        let config = MovementConfig {
            gravity: 15.0,
            ..Default::default()
        };
        let velocity = VelocityIntegrator::new(&config)
            .unwrap()
            .step(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0), false, 0.1);

        assert!((velocity.y - 3.5).abs() < 1e-5, "got {}", velocity.y);
    }

    #[test]
    fn test_gravity_decreases_every_tick_in_air() {
        let integrator = integrator();
        let mut velocity = Vec3::new(1.0, 10.0, 0.0);

        for _ in 0..120 {
            let next = integrator.step(Vec3::ZERO, velocity, false, TICK);
            assert!((velocity.y - next.y - 15.0 * TICK).abs() < 1e-4);
            velocity = next;
        }
    }

    #[test]
    fn test_ground_snap() {
        let velocity = integrator().step(Vec3::ZERO, Vec3::new(0.0, -3.0, 0.0), true, TICK);
        assert_eq!(velocity.y, -2.0);
    }

    #[test]
    fn test_ground_snap_keeps_upward_velocity() {
        // Jumped this tick: still grounded, but heading up
        let velocity = integrator().step(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), true, 0.1);
        assert!((velocity.y - 8.5).abs() < 1e-5);
    }

    #[test]
    fn test_ground_snap_not_applied_in_air() {
        let velocity = integrator().ground_snap(Vec3::new(0.0, -30.0, 0.0), false);
        assert_eq!(velocity.y, -30.0);
    }

    #[test]
    fn test_jump_sets_impulse() {
        let integrator = integrator();

        for prior in [-30.0, -2.0, 0.0, 4.0, 25.0] {
            let velocity = integrator.jump(Vec3::new(1.0, prior, 2.0), true);
            assert_eq!(velocity, Vec3::new(1.0, 10.0, 2.0));
        }
    }

    #[test]
    fn test_jump_ignored_in_air() {
        let velocity = integrator().jump(Vec3::new(0.0, -4.0, 0.0), false);
        assert_eq!(velocity.y, -4.0);
    }

    #[test]
    fn test_accelerate_zero_wish_is_noop() {
        let velocity = Vec3::new(2.0, -1.0, 7.0);
        assert_eq!(accelerate(Vec3::ZERO, velocity, 60.0, 6.0, TICK), velocity);
    }

    #[test]
    fn test_accelerate_caps_aligned_speed() {
        // Every direction and starting velocity below the cap stays at or under it
        let max_speed = 6.0;
        for i in 0..36 {
            let angle = (i as f32 * 10.0).to_radians();
            let wish = Vec3::new(angle.cos(), 0.0, angle.sin());

            for j in 0..24 {
                let t = j as f32;
                let velocity = Vec3::new(
                    (t * 0.9).sin() * 7.0,
                    (t * 0.4).cos() * 3.0,
                    (t * 1.7).cos() * 7.0,
                );
                if velocity.dot(wish) >= max_speed {
                    continue;
                }

                let result = accelerate(wish, velocity, 60.0, max_speed, 0.05);
                assert!(
                    result.dot(wish) <= max_speed + 1e-4,
                    "aligned speed {} exceeded cap",
                    result.dot(wish)
                );
            }
        }
    }

    #[test]
    fn test_accelerate_pulls_back_to_cap() {
        let velocity = accelerate(Vec3::X, Vec3::new(8.0, 0.0, 0.0), 60.0, 6.0, TICK);
        assert!((velocity.x - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_air_strafe_gains_speed() {
        // Moving at the cap along X, wishing along Z adds speed on Z
        let integrator = integrator();
        let velocity = integrator.move_air(Vec3::Z, Vec3::new(6.0, 0.0, 0.0), TICK);

        assert_eq!(velocity.x, 6.0);
        assert!((velocity.z - 1.0).abs() < 1e-5);
        assert!(velocity.length() > 6.0);
    }

    #[test]
    fn test_ground_reaches_max_speed() {
        let integrator = integrator();
        let mut velocity = Vec3::ZERO;

        for _ in 0..120 {
            velocity = integrator.step(Vec3::Z, velocity, true, TICK);
        }

        // Friction and acceleration settle at the cap once acceleration outpaces the drop
        assert!(velocity.z <= 6.0 + 1e-4);
        assert!(velocity.z > 5.5, "got {}", velocity.z);
        assert_eq!(velocity.y, -2.0);
    }
}
