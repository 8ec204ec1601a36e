//! Entity composition seam between game logic and the renderer.
//!
//! Game objects are not a mesh subclass hierarchy; each kind composes a
//! [`Mesh`] and implements [`Entity`], the small capability the frame loop
//! needs: expose the mesh, mutate the pose on update. The renderer sees
//! only meshes and never drives updates itself.

use crate::mesh::Mesh;

/// Something that owns a posable mesh and advances it once per tick.
pub trait Entity {
    fn mesh(&self) -> &Mesh;

    fn mesh_mut(&mut self) -> &mut Mesh;

    /// Advances the entity by `dt` seconds. Called strictly before the
    /// frame is rendered; the default is a static prop.
    fn update(&mut self, dt: f32) {
        let _ = dt;
    }
}

/// A static prop: a mesh with no per-tick behavior.
impl Entity for Mesh {
    fn mesh(&self) -> &Mesh {
        self
    }

    fn mesh_mut(&mut self) -> &mut Mesh {
        self
    }
}

/// Owns the live entities of one level and ticks them.
#[derive(Default)]
pub struct Scene {
    entities: Vec<Box<dyn Entity>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: impl Entity + 'static) -> &mut Self {
        self.entities.push(Box::new(entity));
        self
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Ticks every entity. Runs before rendering each frame.
    pub fn update(&mut self, dt: f32) {
        for entity in &mut self.entities {
            entity.update(dt);
        }
    }

    /// The current meshes, in insertion order, for handing to
    /// [`crate::renderer::Renderer::render_scene`].
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.entities.iter().map(|e| e.mesh())
    }
}
