use criterion::{criterion_group, BenchmarkId, Criterion};
use ray_tracer::core::*;
use ray_tracer::renderer::{render, Camera};
use ray_tracer::scene::{Light, Material, MaterialKind, Object, World};
use std::num::NonZeroU16;
use std::sync::atomic::AtomicBool;

criterion_group! {
    benches,
    reflect_refract,
}

fn reflect_refract_world() -> World {
    let mut world = World::empty();
    world.light = Light::point(Colour::WHITE, Point3D::new(-4.9, 4.9, -1.0));

    world.add(Object::plane().with_material(Material {
        kind: MaterialKind::Solid(Colour::new(0.9, 0.9, 0.9)),
        ambient: 1.0,
        diffuse: 0.0,
        specular: 0.0,
        ..Default::default()
    }));

    world.add(
        Object::sphere()
            .with_material(Material {
                kind: MaterialKind::Solid(Colour::new(0.373, 0.404, 0.55)),
                ambient: 0.0,
                diffuse: 0.4,
                specular: 0.9,
                shininess: 300.0,
                reflective: 0.9,
                transparency: 0.9,
                refractive: 1.5,
                ..Default::default()
            })
            .transformed(Transform::identity().translate_y(1.0)),
    );

    world.add(
        Object::sphere()
            .with_material(Material {
                kind: MaterialKind::Solid(Colour::BLACK),
                ambient: 0.0,
                diffuse: 0.0,
                specular: 0.9,
                shininess: 300.0,
                reflective: 0.9,
                transparency: 0.9,
                refractive: 1.0000034,
                ..Default::default()
            })
            .transformed(Transform::identity().scale_all(0.5).translate_y(1.0)),
    );

    world
}

fn reflect_refract(c: &mut Criterion) {
    let mut group = c.benchmark_group("render reflection + refraction scene");
    group.sample_size(10);

    for (x, y) in RESOLUTIONS.iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}x{:?}", x, y)),
            &(*x, *y),
            |b, (x, y)| {
                let world = reflect_refract_world();

                let camera = Camera::new(
                    NonZeroU16::new(*x).unwrap(),
                    NonZeroU16::new(*y).unwrap(),
                    0.45,
                    Transform::view_transform(
                        Point3D::new(0.0, 3.5, -5.0),
                        Point3D::new(0.0, 1.0, 0.0),
                        Normal3D::POSITIVE_Y,
                    ),
                );

                b.iter(|| render(&world, &camera, false, &AtomicBool::new(false)));
            },
        );
    }
}

const RESOLUTIONS: [(u16, u16); 3] = [(200, 200), (400, 400), (600, 600)];
