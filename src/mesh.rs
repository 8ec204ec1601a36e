//! Posable cuboid meshes.
//!
//! A [`Mesh`] owns an append-only vertex list and face list built once
//! through [`Mesh::add_cuboid`] (or [`Mesh::add_face`] for custom polygons),
//! plus a mutable pose: world position and yaw. Game logic mutates the pose
//! every tick; the renderer only reads it.

use crate::color::Color;
use crate::geometry::{Face, GeometryError, CUBOID_CORNERS, CUBOID_FACES};
use crate::math::vec3::Vec3;

/// A named, posable collection of local-space vertices and faces rendered
/// as one rigid unit.
#[derive(Clone, Debug)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    position: Vec3,
    yaw: f32,
}

impl Mesh {
    /// Creates an empty mesh at the world origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            faces: Vec::new(),
            position: Vec3::ZERO,
            yaw: 0.0,
        }
    }

    /// Creates an empty mesh at the given world position.
    pub fn at(name: impl Into<String>, position: Vec3) -> Self {
        let mut mesh = Self::new(name);
        mesh.position = position;
        mesh
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ============ Geometry building ============

    /// Appends a cuboid: 8 corner vertices offset by the local translation
    /// and 6 consistently wound quad faces sharing one flat color.
    ///
    /// Zero or negative extents are allowed; they collapse to zero-area
    /// faces which the visibility stage silently drops.
    pub fn add_cuboid(
        &mut self,
        width: f32,
        height: f32,
        depth: f32,
        offset: Vec3,
        color: Color,
    ) -> &mut Self {
        let base = self.vertices.len();
        let half = Vec3::new(width / 2.0, height / 2.0, depth / 2.0);
        for (cx, cy, cz) in CUBOID_CORNERS {
            self.vertices.push(Vec3::new(
                cx * half.x + offset.x,
                cy * half.y + offset.y,
                cz * half.z + offset.z,
            ));
        }
        for quad in CUBOID_FACES {
            let indices = quad.iter().map(|i| base + i).collect();
            self.faces.push(Face::new(indices, color));
        }
        self
    }

    /// Appends a custom polygon face over existing vertices.
    ///
    /// The indices must reference vertices already in the mesh, there must
    /// be at least 3 of them, and the caller owns the winding contract:
    /// counter-clockwise viewed from outside the solid.
    pub fn add_face(&mut self, indices: Vec<usize>, color: Color) -> Result<(), GeometryError> {
        if indices.len() < 3 {
            return Err(GeometryError::TooFewIndices(indices.len()));
        }
        let len = self.vertices.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(GeometryError::IndexOutOfRange { index, len });
        }
        self.faces.push(Face::new(indices, color));
        Ok(())
    }

    /// Appends a raw vertex for use with [`Mesh::add_face`].
    pub fn add_vertex(&mut self, vertex: Vec3) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    // ============ Pose ============

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    /// Translate by a delta vector.
    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position = self.position + delta;
        self
    }

    /// Yaw about the vertical axis, in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn set_yaw(&mut self, yaw: f32) -> &mut Self {
        self.yaw = yaw;
        self
    }

    /// Adds a yaw delta, wrapped to one turn.
    pub fn rotate_yaw(&mut self, delta: f32) -> &mut Self {
        self.yaw = (self.yaw + delta).rem_euclid(std::f32::consts::TAU);
        self
    }
}
