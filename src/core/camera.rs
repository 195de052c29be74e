//=========================================================================
// Orbit Camera
//=========================================================================
//
// Fixed orbital camera over the dungeon scene.
//
// Each tick the eye position rotates about the target around the up
// axis. Nothing else about the camera changes: it is not user-driven.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Mat4, Quat, Vec3};

//=== OrbitCamera =========================================================

/// Perspective camera orbiting its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Eye position in world space.
    pub position: Vec3,

    /// Point the camera looks at (orbit center).
    pub target: Vec3,

    /// Up vector, also the orbit axis.
    pub up: Vec3,

    /// Vertical field of view in degrees.
    pub fovy: f32,

    /// Orbit speed in radians per second.
    pub orbit_speed: f32,
}

impl OrbitCamera {
    /// Default orbit speed (rad/s).
    pub const ORBIT_SPEED: f32 = 0.5;

    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target, ..Default::default() }
    }

    /// Rotates the eye about the target by `orbit_speed * dt`.
    pub fn update(&mut self, dt: f32) {
        let axis = self.up.normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }

        let rotation = Quat::from_axis_angle(axis, self.orbit_speed * dt);
        let offset = self.position - self.target;
        self.position = self.target + rotation * offset;
    }

    /// Distance from eye to target; invariant under `update`.
    pub fn radius(&self) -> f32 {
        self.position.distance(self.target)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy.to_radians(), aspect, 0.01, 1000.0)
    }
}

impl Default for OrbitCamera {
    /// Starts just behind the dungeon entrance, looking down the corridor.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, -5.5),
            target: Vec3::new(0.0, 2.0, -10.0),
            up: Vec3::Y,
            fovy: 45.0,
            orbit_speed: Self::ORBIT_SPEED,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
