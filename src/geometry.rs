//! Face geometry and the cuboid winding tables.
//!
//! # Winding convention
//!
//! Every face is wound counter-clockwise when viewed from outside the solid
//! (y-up sense). The backface test in the pipeline depends on this: after
//! the screen-space y flip, a front face winds so that the edge-sum shoelace
//! value comes out positive. The two halves of the contract are validated
//! together by the cube-visibility tests in `pipeline`.

use thiserror::Error;

use crate::color::Color;

/// Invalid geometry handed to [`crate::mesh::Mesh::add_face`].
///
/// These are construction-time errors; the cuboid builder can never produce
/// them and the render pass assumes they were ruled out up front.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("face needs at least 3 vertex indices, got {0}")]
    TooFewIndices(usize),
    #[error("vertex index {index} out of range for mesh with {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A planar polygon: ordered vertex indices into the owning mesh plus one
/// flat color. Typically a quad from a cuboid face.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    pub indices: Vec<usize>,
    pub color: Color,
}

impl Face {
    pub fn new(indices: Vec<usize>, color: Color) -> Self {
        Self { indices, color }
    }
}

/// Unit cuboid corners, scaled by the half-extents at build time.
///
/// Order: the four −z corners counter-clockwise from (−,−), then the four
/// +z corners in the same pattern.
pub(crate) const CUBOID_CORNERS: [(f32, f32, f32); 8] = [
    (-1.0, -1.0, -1.0),
    (1.0, -1.0, -1.0),
    (1.0, 1.0, -1.0),
    (-1.0, 1.0, -1.0),
    (-1.0, -1.0, 1.0),
    (1.0, -1.0, 1.0),
    (1.0, 1.0, 1.0),
    (-1.0, 1.0, 1.0),
];

/// The six quads of a cuboid, indices into [`CUBOID_CORNERS`], each wound
/// counter-clockwise as seen from outside.
pub(crate) const CUBOID_FACES: [[usize; 4]; 6] = [
    [4, 5, 6, 7], // +z
    [1, 0, 3, 2], // -z
    [5, 1, 2, 6], // +x
    [0, 4, 7, 3], // -x
    [3, 7, 6, 2], // +y (top)
    [0, 1, 5, 4], // -y (bottom)
];
