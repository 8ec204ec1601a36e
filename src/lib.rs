//! A CPU software-rendering core for cuboid-built 3D scenes.
//!
//! Meshes are assembled from axis-aligned boxes, posed with a position and
//! a yaw, transformed and perspective-projected on the CPU, culled
//! (near-plane, backface, off-screen) and composited with the painter's
//! algorithm plus linear distance fog. The output is an ordered list of
//! [`pipeline::DrawCommand`]s for a filled-polygon primitive; window
//! management, input and text are left to the surrounding program.
//!
//! # Quick Start
//!
//! ```
//! use cubist::prelude::*;
//!
//! let mut level = Mesh::new("level");
//! level.add_cuboid(2000.0, 20.0, 2000.0, Vec3::new(0.0, -10.0, 0.0), color::GRASS);
//!
//! let camera = Camera::new(Vec3::new(0.0, 200.0, 800.0));
//! let renderer = Renderer::new(RenderConfig::new(800.0, 600.0));
//! let commands = renderer.render_scene(std::iter::once(&level), &camera);
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod color;
pub mod config;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod renderer;
pub mod scene;

// Internal modules - used within the crate only
pub(crate) mod geometry;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use color::Color;
pub use config::RenderConfig;
pub use geometry::{Face, GeometryError};
pub use mesh::Mesh;
pub use pipeline::DrawCommand;
pub use renderer::Renderer;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use cubist::prelude::*;
/// ```
pub mod prelude {
    // Core pipeline
    pub use crate::camera::Camera;
    pub use crate::config::RenderConfig;
    pub use crate::pipeline::DrawCommand;
    pub use crate::renderer::Renderer;

    // Geometry
    pub use crate::color::{self, Color};
    pub use crate::mesh::Mesh;

    // Composition
    pub use crate::scene::{Entity, Scene};

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
}
