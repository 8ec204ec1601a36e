//! Scene camera.
//!
//! # Coordinate System
//!
//! Right-handed, y-up:
//! - X: positive right
//! - Y: positive up
//! - Z: with yaw 0 the camera looks along **-Z**
//!
//! Orientation is a single yaw angle about the vertical axis; positive yaw
//! turns the viewpoint toward +X. Depth in camera space is the negated
//! camera-space z, so it grows with distance in front of the lens.
//!
//! The camera is pure pose. Follow/smoothing behavior belongs to the game
//! logic that owns it; the renderer only reads position and yaw.

use crate::math::vec3::Vec3;

/// A posable viewpoint: world position plus yaw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    position: Vec3,
    yaw: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Creates a camera at the given position, looking along -Z.
    pub fn new(position: Vec3) -> Self {
        Self { position, yaw: 0.0 }
    }

    /// Creates a camera at `position` turned toward `target`.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let mut camera = Self::new(position);
        camera.look_at(target);
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Returns the yaw angle in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// Rotates the camera horizontally. Positive values turn right (+X),
    /// wrapped to one turn.
    pub fn rotate_yaw(&mut self, delta: f32) {
        self.yaw = (self.yaw + delta).rem_euclid(std::f32::consts::TAU);
    }

    /// Returns the horizontal forward direction (normalized).
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Moves the camera along its forward direction.
    pub fn move_forward(&mut self, distance: f32) {
        self.position = self.position + self.forward() * distance;
    }

    /// Turns the camera toward a world position (yaw only; the camera has
    /// no pitch).
    pub fn look_at(&mut self, target: Vec3) {
        let direction = target - self.position;
        if direction.x.abs() > f32::EPSILON || direction.z.abs() > f32::EPSILON {
            self.yaw = direction.x.atan2(-direction.z);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn camera_starts_looking_down_negative_z() {
        let camera = Camera::default();
        assert_relative_eq!(camera.forward().z, -1.0, epsilon = 1e-6);
        assert_relative_eq!(camera.forward().x, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn positive_yaw_turns_right() {
        let mut camera = Camera::default();
        camera.rotate_yaw(FRAC_PI_2);
        assert_relative_eq!(camera.forward().x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(camera.forward().z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn look_at_faces_the_target() {
        let camera = Camera::looking_at(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        assert_relative_eq!(camera.yaw(), 0.0, epsilon = 1e-6);

        let camera = Camera::looking_at(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0));
        assert_relative_eq!(camera.yaw(), FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn look_at_own_position_keeps_yaw() {
        let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        camera.set_yaw(0.8);
        camera.look_at(Vec3::new(1.0, 9.0, 3.0));
        assert_relative_eq!(camera.yaw(), 0.8);
    }

    #[test]
    fn move_forward_follows_yaw() {
        let mut camera = Camera::default();
        camera.rotate_yaw(FRAC_PI_2);
        camera.move_forward(10.0);
        assert_relative_eq!(camera.position().x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(camera.position().z, 0.0, epsilon = 1e-5);
    }
}
