//! Projection and compositing parameters.
//!
//! [`RenderConfig`] is the single source of truth for everything the
//! pipeline needs besides pose: focal length, viewport geometry, the
//! near-plane threshold, the fog range and sky color, and whether fog is
//! applied at all.

use crate::color::{Color, DUSK_SKY};
use crate::math::vec2::Vec2;

const DEFAULT_FOCAL_LENGTH: f32 = 500.0;
const DEFAULT_NEAR_THRESHOLD: f32 = 1.0;
const DEFAULT_MAX_VIEW_DISTANCE: f32 = 5000.0;

/// Static per-frame rendering parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    focal_length: f32,
    viewport_width: f32,
    viewport_height: f32,
    viewport_center: Vec2,
    near_threshold: f32,
    max_view_distance: f32,
    sky_color: Color,
    fog_enabled: bool,
}

impl RenderConfig {
    /// Creates a config for the given viewport with the stock defaults:
    /// focal length 500, near threshold 1.0, view distance 5000, dusk sky,
    /// fog on, center at the viewport midpoint.
    ///
    /// # Panics
    ///
    /// Panics if the viewport is empty. Configuration mistakes are fatal at
    /// construction; the render pass never re-validates.
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        assert!(
            viewport_width > 0.0 && viewport_height > 0.0,
            "viewport must be non-empty"
        );
        Self {
            focal_length: DEFAULT_FOCAL_LENGTH,
            viewport_width,
            viewport_height,
            viewport_center: Vec2::new(viewport_width / 2.0, viewport_height / 2.0),
            near_threshold: DEFAULT_NEAR_THRESHOLD,
            max_view_distance: DEFAULT_MAX_VIEW_DISTANCE,
            sky_color: DUSK_SKY,
            fog_enabled: true,
        }
    }

    // ============ Accessors ============

    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn viewport_center(&self) -> Vec2 {
        self.viewport_center
    }

    pub fn near_threshold(&self) -> f32 {
        self.near_threshold
    }

    pub fn max_view_distance(&self) -> f32 {
        self.max_view_distance
    }

    pub fn sky_color(&self) -> Color {
        self.sky_color
    }

    pub fn fog_enabled(&self) -> bool {
        self.fog_enabled
    }

    // ============ Fluent setters ============

    /// Sets the focal length (field-of-view proxy; larger is narrower).
    ///
    /// # Panics
    ///
    /// Panics if `focal_length` is not positive.
    pub fn with_focal_length(mut self, focal_length: f32) -> Self {
        assert!(focal_length > 0.0, "focal length must be positive");
        self.focal_length = focal_length;
        self
    }

    /// Sets the near-plane threshold below which faces are rejected.
    ///
    /// # Panics
    ///
    /// Panics if `near` is not positive; the perspective divide relies on
    /// rejected depths never reaching it.
    pub fn with_near_threshold(mut self, near: f32) -> Self {
        assert!(near > 0.0, "near threshold must be positive");
        self.near_threshold = near;
        self
    }

    /// Sets the distance at which fog fully swallows a face.
    ///
    /// # Panics
    ///
    /// Panics if `distance` is not positive.
    pub fn with_max_view_distance(mut self, distance: f32) -> Self {
        assert!(distance > 0.0, "max view distance must be positive");
        self.max_view_distance = distance;
        self
    }

    pub fn with_sky_color(mut self, color: Color) -> Self {
        self.sky_color = color;
        self
    }

    pub fn with_fog(mut self, enabled: bool) -> Self {
        self.fog_enabled = enabled;
        self
    }

    /// Updates the viewport, recentering on the new midpoint (typically
    /// called on window resize).
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        assert!(width > 0.0 && height > 0.0, "viewport must be non-empty");
        self.viewport_width = width;
        self.viewport_height = height;
        self.viewport_center = Vec2::new(width / 2.0, height / 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_center_the_viewport() {
        let config = RenderConfig::new(800.0, 600.0);
        assert_relative_eq!(config.viewport_center().x, 400.0);
        assert_relative_eq!(config.viewport_center().y, 300.0);
        assert!(config.fog_enabled());
        assert_relative_eq!(config.near_threshold(), 1.0);
    }

    #[test]
    fn fluent_setters_compose() {
        let config = RenderConfig::new(640.0, 480.0)
            .with_focal_length(350.0)
            .with_fog(false)
            .with_max_view_distance(2000.0);
        assert_relative_eq!(config.focal_length(), 350.0);
        assert!(!config.fog_enabled());
        assert_relative_eq!(config.max_view_distance(), 2000.0);
    }

    #[test]
    fn resize_recenters() {
        let mut config = RenderConfig::new(800.0, 600.0);
        config.set_viewport(1024.0, 768.0);
        assert_relative_eq!(config.viewport_center().x, 512.0);
        assert_relative_eq!(config.viewport_center().y, 384.0);
    }

    #[test]
    #[should_panic(expected = "near threshold")]
    fn zero_near_threshold_is_fatal() {
        let _ = RenderConfig::new(800.0, 600.0).with_near_threshold(0.0);
    }

    #[test]
    #[should_panic(expected = "viewport")]
    fn empty_viewport_is_fatal() {
        let _ = RenderConfig::new(0.0, 600.0);
    }
}
