use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cubist::prelude::*;

fn single_cuboid() -> Mesh {
    let mut mesh = Mesh::new("box");
    mesh.add_cuboid(100.0, 100.0, 100.0, Vec3::new(0.0, 0.0, -400.0), color::STONE);
    mesh
}

/// A town of n*n cuboid buildings spread over the ground plane.
fn town(n: usize) -> Vec<Mesh> {
    (0..n * n)
        .map(|i| {
            let row = (i / n) as f32;
            let col = (i % n) as f32;
            let mut mesh = Mesh::new(format!("building-{i}"));
            mesh.add_cuboid(
                80.0,
                60.0 + 40.0 * ((i % 5) as f32),
                80.0,
                Vec3::ZERO,
                color::STONE,
            );
            mesh.set_position(Vec3::new(
                (col - n as f32 / 2.0) * 200.0,
                0.0,
                -300.0 - row * 200.0,
            ));
            mesh
        })
        .collect()
}

fn benchmark_project(c: &mut Criterion) {
    let config = RenderConfig::new(800.0, 600.0);
    let renderer = Renderer::new(config);
    let mesh = single_cuboid();
    let camera = Camera::new(Vec3::new(150.0, 100.0, 200.0));

    c.bench_function("project_single_cuboid", |b| {
        b.iter(|| renderer.project(black_box(&mesh), black_box(&camera)));
    });
}

fn benchmark_render_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_scene");

    let renderer = Renderer::new(RenderConfig::new(800.0, 600.0));
    let camera = Camera::new(Vec3::new(0.0, 300.0, 800.0));

    for n in [4usize, 8, 16] {
        let meshes = town(n);
        group.bench_with_input(
            BenchmarkId::new("town", n * n),
            &meshes,
            |b, meshes| {
                b.iter(|| renderer.render_scene(black_box(meshes.iter()), &camera));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_project, benchmark_render_scene);
criterion_main!(benches);
