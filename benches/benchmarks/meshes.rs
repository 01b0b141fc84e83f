use criterion::{criterion_group, Criterion};
use ray_tracer::core::*;
use ray_tracer::renderer::{render, Camera};
use ray_tracer::scene::{Light, Object, World};
use std::f64::consts::FRAC_PI_3;
use std::sync::atomic::AtomicBool;

criterion_group! {
    benches,
    basic_triangle_mesh,
    complex_mesh,
    very_complex_mesh
}

/// Triangulates a unit-radius icosphere-ish grid of `subdivisions` latitude/longitude bands,
/// standing in for an externally-decoded OBJ mesh of comparable triangle count.
fn grid_mesh(subdivisions: usize) -> Object {
    let mut triangles = vec![];

    for lat in 0..subdivisions {
        let theta0 = std::f64::consts::PI * lat as f64 / subdivisions as f64;
        let theta1 = std::f64::consts::PI * (lat + 1) as f64 / subdivisions as f64;

        for lon in 0..subdivisions {
            let phi0 = 2.0 * std::f64::consts::PI * lon as f64 / subdivisions as f64;
            let phi1 = 2.0 * std::f64::consts::PI * (lon + 1) as f64 / subdivisions as f64;

            let vertex = |theta: f64, phi: f64| {
                Point3D::new(
                    theta.sin() * phi.cos(),
                    theta.cos(),
                    theta.sin() * phi.sin(),
                )
            };

            let p00 = vertex(theta0, phi0);
            let p01 = vertex(theta0, phi1);
            let p10 = vertex(theta1, phi0);
            let p11 = vertex(theta1, phi1);

            triangles.push((p00, p10, p11));
            triangles.push((p00, p11, p01));
        }
    }

    Object::mesh(triangles)
}

fn render_mesh(width: u16, height: u16, subdivisions: usize) {
    let mut world = World::empty();
    world.light = Light::point(Colour::WHITE, Point3D::new(10.0, 10.0, 0.0));
    world.add(grid_mesh(subdivisions));

    let camera = Camera::new(
        std::num::NonZeroU16::new(width).unwrap(),
        std::num::NonZeroU16::new(height).unwrap(),
        FRAC_PI_3,
        Transform::view_transform(
            Point3D::new(0.0, 0.0, 5.0),
            Point3D::ORIGIN,
            Normal3D::POSITIVE_Y,
        ),
    );

    render(&world, &camera, false, &AtomicBool::new(false));
}

fn basic_triangle_mesh(c: &mut Criterion) {
    c.bench_function("basic mesh, 800x600 (8 subdivisions, 128 triangles)", |b| {
        b.iter(|| render_mesh(800, 600, 8))
    });
}

fn complex_mesh(c: &mut Criterion) {
    c.bench_function("complex mesh, 600x600 (32 subdivisions, 2048 triangles)", |b| {
        b.iter(|| render_mesh(600, 600, 32))
    });
}

fn very_complex_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("very complex mesh (300x300)");
    group.sample_size(20);

    group.bench_function("96 subdivisions, 18432 triangles", |b| {
        b.iter(|| render_mesh(300, 300, 96))
    });
}
