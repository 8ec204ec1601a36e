//! Demo: renders one frame of a cuboid castle courtyard to `frame.png`.
//!
//! Plays the presentation-layer role the core leaves to its callers: it
//! owns the frame loop (a few fixed ticks here), hands the scene to the
//! renderer, and fills the resulting draw commands into an image buffer
//! with a scanline polygon fill.

use cubist::prelude::*;
use image::{ImageError, Rgb, RgbImage};
use log::info;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

/// A collectible that spins in place.
struct Coin {
    mesh: Mesh,
}

impl Coin {
    fn new(x: f32, z: f32) -> Self {
        let mut mesh = Mesh::at("coin", Vec3::new(x, 40.0, z));
        mesh.add_cuboid(20.0, 5.0, 20.0, Vec3::ZERO, color::YELLOW);
        Self { mesh }
    }
}

impl Entity for Coin {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn mesh_mut(&mut self) -> &mut Mesh {
        &mut self.mesh
    }

    fn update(&mut self, dt: f32) {
        self.mesh.rotate_yaw(2.5 * dt);
    }
}

/// The level itself is a static prop: ground slab, keep, and doorway.
fn courtyard() -> Mesh {
    let mut level = Mesh::new("courtyard");
    level
        .add_cuboid(2000.0, 20.0, 2000.0, Vec3::new(0.0, -10.0, 0.0), color::GRASS)
        .add_cuboid(400.0, 200.0, 300.0, Vec3::new(0.0, 100.0, -600.0), color::STONE)
        .add_cuboid(200.0, 180.0, 20.0, Vec3::new(0.0, 90.0, -440.0), Color::new(90, 60, 40))
        .add_cuboid(80.0, 120.0, 80.0, Vec3::new(-280.0, 60.0, -600.0), color::STONE)
        .add_cuboid(80.0, 120.0, 80.0, Vec3::new(280.0, 60.0, -600.0), color::STONE);
    level
}

fn to_pixel(color: Color) -> Rgb<u8> {
    Rgb([color.r, color.g, color.b])
}

/// Scanline fill of a convex screen-space polygon.
///
/// For each row in the polygon's vertical span, intersect the row midline
/// with every crossing edge and fill between the outermost hits. This is
/// where the off-screen reject's promise is honored: points may lie outside
/// the viewport and are clipped per row here.
fn fill_polygon(frame: &mut RgbImage, points: &[Vec2], color: Color) {
    let pixel = to_pixel(color);
    let (width, height) = (frame.width() as i32, frame.height() as i32);

    let y_min = points.iter().map(|p| p.y).fold(f32::MAX, f32::min);
    let y_max = points.iter().map(|p| p.y).fold(f32::MIN, f32::max);
    let y_start = (y_min.ceil() as i32).max(0);
    let y_end = (y_max.floor() as i32).min(height - 1);

    for y in y_start..=y_end {
        let row = y as f32;
        let mut x_left = f32::MAX;
        let mut x_right = f32::MIN;
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            if (a.y <= row) == (b.y <= row) {
                continue;
            }
            let t = (row - a.y) / (b.y - a.y);
            let x = a.x + (b.x - a.x) * t;
            x_left = x_left.min(x);
            x_right = x_right.max(x);
        }
        if x_left > x_right {
            continue;
        }
        let from = (x_left.ceil() as i32).max(0);
        let to = (x_right.floor() as i32).min(width - 1);
        for x in from..=to {
            frame.put_pixel(x as u32, y as u32, pixel);
        }
    }
}

fn main() -> Result<(), ImageError> {
    env_logger::init();

    let mut scene = Scene::new();
    scene.add(courtyard());
    for (x, z) in [(-250.0, 100.0), (0.0, 250.0), (250.0, 100.0)] {
        scene.add(Coin::new(x, z));
    }

    // A few fixed ticks so the coins are mid-spin in the snapshot.
    for _ in 0..30 {
        scene.update(1.0 / 60.0);
    }

    let camera = Camera::looking_at(Vec3::new(0.0, 200.0, 600.0), Vec3::new(0.0, 80.0, -600.0));
    let renderer = Renderer::new(RenderConfig::new(WIDTH as f32, HEIGHT as f32));

    let commands = renderer.render_scene(scene.meshes(), &camera);
    info!("{} draw commands for {} entities", commands.len(), scene.len());

    let sky = renderer.config().sky_color();
    let mut frame = RgbImage::from_pixel(WIDTH, HEIGHT, to_pixel(sky));
    for command in &commands {
        fill_polygon(&mut frame, &command.points, command.color);
    }

    frame.save("frame.png")?;
    info!("wrote frame.png");
    Ok(())
}
