//! Scene compositing: merge, depth-sort, fog, emit.
//!
//! [`Renderer`] is the explicit frame context: it owns the
//! [`RenderConfig`] and exposes the two pipeline entry points. It holds no
//! other state and never mutates meshes or the camera; rendering is a pure
//! read of pose plus config, so repeated calls over the same inputs emit
//! identical commands.
//!
//! Occlusion is the painter's algorithm and nothing else: commands are
//! emitted farthest first so a naive fill-in-order primitive overdraws
//! nearer faces last. There is no per-pixel depth test; intersecting or
//! ambiguously ordered geometry can paint wrong, which is accepted for
//! well-separated cuboid scenes.

use log::trace;

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::mesh::Mesh;
use crate::pipeline::{self, DrawCommand};

/// Frame context carrying the render configuration.
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RenderConfig {
        &mut self.config
    }

    /// Updates the viewport (typically on window resize).
    pub fn resize(&mut self, width: f32, height: f32) {
        self.config.set_viewport(width, height);
        trace!("viewport resized to {width}x{height}");
    }

    /// Runs transform, projection and visibility for one mesh.
    pub fn project(&self, mesh: &Mesh, camera: &Camera) -> Vec<DrawCommand> {
        pipeline::project(mesh, camera, &self.config)
    }

    /// Renders a scene: projects every mesh, sorts the surviving faces
    /// farthest-first, applies fog when enabled and returns the commands
    /// in draw order.
    pub fn render_scene<'a, M>(&self, meshes: M, camera: &Camera) -> Vec<DrawCommand>
    where
        M: IntoIterator<Item = &'a Mesh>,
    {
        let mut commands = Vec::new();
        let mut mesh_count = 0usize;
        for mesh in meshes {
            commands.extend(pipeline::project(mesh, camera, &self.config));
            mesh_count += 1;
        }

        // Painter's algorithm: farthest faces first.
        commands.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        if self.config.fog_enabled() {
            let sky = self.config.sky_color();
            let max_distance = self.config.max_view_distance();
            for command in &mut commands {
                let fog = (command.depth / max_distance).clamp(0.0, 1.0);
                command.color = command.color.blend_toward(sky, fog);
            }
        }

        trace!(
            "rendered {mesh_count} meshes into {} draw commands",
            commands.len()
        );
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::math::vec3::Vec3;
    use approx::assert_relative_eq;

    fn panel_at(name: &str, z: f32) -> Mesh {
        let mut mesh = Mesh::new(name);
        mesh.add_cuboid(100.0, 100.0, 10.0, Vec3::ZERO, color::RED);
        mesh.set_position(Vec3::new(0.0, 0.0, z));
        mesh
    }

    #[test]
    fn render_scene_is_deterministic() {
        let renderer = Renderer::new(RenderConfig::new(800.0, 600.0));
        let meshes = vec![panel_at("near", -300.0), panel_at("far", -1000.0)];
        let camera = Camera::default();

        let first = renderer.render_scene(&meshes, &camera);
        let second = renderer.render_scene(&meshes, &camera);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn farther_faces_are_emitted_first() {
        let renderer = Renderer::new(RenderConfig::new(800.0, 600.0));
        let camera = Camera::default();
        let near = panel_at("near", -100.0);
        let far = panel_at("far", -300.0);

        // Submission order must not matter.
        for meshes in [vec![&near, &far], vec![&far, &near]] {
            let commands = renderer.render_scene(meshes, &camera);
            assert_eq!(commands.len(), 2);
            assert!(commands[0].depth > commands[1].depth);
            assert_relative_eq!(commands[0].depth, 295.0, epsilon = 1e-2);
            assert_relative_eq!(commands[1].depth, 95.0, epsilon = 1e-2);
        }
    }

    #[test]
    fn fog_swallows_faces_at_max_view_distance() {
        let config = RenderConfig::new(800.0, 600.0).with_max_view_distance(200.0);
        let renderer = Renderer::new(config);
        let commands = renderer.render_scene(&[panel_at("far", -1000.0)], &Camera::default());
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].color, renderer.config().sky_color());
    }

    #[test]
    fn fog_partial_blend_moves_toward_sky() {
        let config = RenderConfig::new(800.0, 600.0)
            .with_sky_color(color::WHITE)
            .with_max_view_distance(390.0);
        let renderer = Renderer::new(config);
        // Face depth 195 -> fog factor 0.5.
        let commands = renderer.render_scene(&[panel_at("mid", -200.0)], &Camera::default());
        assert_eq!(commands.len(), 1);
        assert_eq!(
            commands[0].color,
            color::RED.blend_toward(color::WHITE, 0.5)
        );
    }

    #[test]
    fn disabling_fog_keeps_face_colors() {
        let config = RenderConfig::new(800.0, 600.0).with_fog(false);
        let renderer = Renderer::new(config);
        let commands = renderer.render_scene(&[panel_at("far", -4000.0)], &Camera::default());
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].color, color::RED);
    }

    #[test]
    fn empty_scene_renders_nothing() {
        let renderer = Renderer::new(RenderConfig::new(800.0, 600.0));
        let commands = renderer.render_scene(std::iter::empty(), &Camera::default());
        assert!(commands.is_empty());
    }
}
