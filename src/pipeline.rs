//! Transform, projection and visibility: one mesh in, screen-space
//! polygons out.
//!
//! Each face walks four steps per vertex: object yaw rotation, world
//! placement, camera-relative translation, rotation by the negated camera
//! yaw. The resulting negated z is the vertex's **depth**. Three rejects
//! then run in order:
//!
//! 1. **Near plane** — if *any* vertex depth falls at or below the
//!    threshold the whole face is dropped before any division. Faces
//!    straddling the camera plane pop out rather than being clipped; that
//!    is the intended trade-off, not a defect.
//! 2. **Backface** — the signed area of the projected polygon. Front faces
//!    wind so the area comes out positive (see `geometry`); anything at or
//!    below zero is facing away or degenerate.
//! 3. **Off-screen** — dropped only when *every* point lies outside the
//!    viewport. Partially visible faces pass through unclipped and rely on
//!    the presentation layer's own primitive clip.

use crate::camera::Camera;
use crate::color::Color;
use crate::config::RenderConfig;
use crate::math::vec2::Vec2;
use crate::mesh::Mesh;

/// One visible face, ready for a filled-polygon primitive.
///
/// Ephemeral renderer output; not retained between frames.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    /// Screen-space polygon, in face winding order.
    pub points: Vec<Vec2>,
    /// Mean camera-space depth of the face's vertices, used for sorting
    /// and fog.
    pub depth: f32,
    /// Flat fill color. Fog-blended by the compositor when fog is on.
    pub color: Color,
}

/// Projects one mesh against one camera, returning draw commands for the
/// faces that survive all three visibility rejects.
pub fn project(mesh: &Mesh, camera: &Camera, config: &RenderConfig) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(mesh.faces().len());
    let position = mesh.position();
    let yaw = mesh.yaw();
    let cam_position = camera.position();
    let cam_yaw = camera.yaw();
    let center = config.viewport_center();

    'faces: for face in mesh.faces() {
        let mut points = Vec::with_capacity(face.indices.len());
        let mut depth_sum = 0.0;

        for &index in &face.indices {
            let world = mesh.vertices()[index].rotate_y(yaw) + position;
            let view = (world - cam_position).rotate_y(-cam_yaw);

            let depth = -view.z;
            if depth <= config.near_threshold() {
                continue 'faces;
            }

            let scale = config.focal_length() / depth;
            points.push(Vec2::new(
                center.x + view.x * scale,
                center.y - view.y * scale,
            ));
            depth_sum += depth;
        }

        if signed_area(&points) <= 0.0 {
            continue;
        }
        if !any_point_on_screen(&points, config) {
            continue;
        }

        commands.push(DrawCommand {
            depth: depth_sum / face.indices.len() as f32,
            points,
            color: face.color,
        });
    }

    commands
}

/// Shoelace signed area of a screen-space polygon, positive when the
/// polygon winds the way front faces land after the projection's y flip.
///
/// A cheap 2D stand-in for a normal-vs-view test; its sign convention and
/// the cuboid winding tables are two halves of one contract.
pub(crate) fn signed_area(points: &[Vec2]) -> f32 {
    let mut doubled = 0.0;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        doubled += (b.x - a.x) * (b.y + a.y);
    }
    doubled / 2.0
}

fn any_point_on_screen(points: &[Vec2], config: &RenderConfig) -> bool {
    points.iter().any(|p| {
        p.x >= 0.0 && p.x < config.viewport_width() && p.y >= 0.0 && p.y < config.viewport_height()
    })
}
