use criterion::{criterion_group, Criterion};
use ray_tracer::core::*;
use ray_tracer::renderer::{render, Camera};
use ray_tracer::scene::{Light, Material, MaterialKind, Object, World};
use std::f64::consts::FRAC_PI_4;
use std::sync::atomic::AtomicBool;

criterion_group! {
    benches,
    lighting_a_single_object,
    lighting_multiple_objects,
}

fn lighting_a_single_object(c: &mut Criterion) {
    let mut group = c.benchmark_group("lighting a scene with a single object");
    group.sample_size(20);

    group.bench_function("single point light", |b| {
        let mut world = World::empty();
        world.light = Light::point(Colour::WHITE, Point3D::new(-0.5, -0.5, -5.0));
        world.add(Object::sphere().with_material(Material {
            kind: MaterialKind::Solid(Colour::WHITE),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.0,
            ..Default::default()
        }));

        let camera = Camera::new(
            nonzero_ext::nonzero!(400u16),
            nonzero_ext::nonzero!(400u16),
            FRAC_PI_4,
            Transform::view_transform(
                Point3D::new(0.0, 0.0, -5.0),
                Point3D::new(0.0, 0.0, -1.0),
                Normal3D::POSITIVE_Y,
            ),
        );

        b.iter(|| render(&world, &camera, false, &AtomicBool::new(false)));
    });
}

fn lighting_multiple_objects(c: &mut Criterion) {
    let mut group = c.benchmark_group("lighting a scene with multiple objects");
    group.sample_size(20);

    group.bench_function("single point light", |b| {
        let mut world = World::empty();
        world.light = Light::point(Colour::greyscale(1.5), Point3D::new(-1.0, 2.0, 4.0));

        let floor = Object::plane().with_material(Material {
            kind: MaterialKind::Solid(Colour::WHITE),
            ambient: 0.025,
            diffuse: 0.67,
            specular: 0.0,
            ..Default::default()
        });

        world.add(floor);

        fn sphere_material(colour: Colour) -> Material {
            Material {
                kind: MaterialKind::Solid(colour),
                ambient: 0.1,
                specular: 0.0,
                diffuse: 0.6,
                reflective: 0.3,
                ..Default::default()
            }
        }

        let red_sphere = Object::sphere()
            .with_material(sphere_material(Colour::RED))
            .transformed(
                Transform::identity()
                    .scale_all(0.5)
                    .translate_x(0.5)
                    .translate_y(0.5),
            );
        world.add(red_sphere);

        let blue_sphere = Object::sphere()
            .with_material(sphere_material(Colour::new(0.5, 0.5, 1.0)))
            .transformed(
                Transform::identity()
                    .scale_all(1.0 / 3.0)
                    .translate_x(-0.25)
                    .translate_y(1.0 / 3.0),
            );
        world.add(blue_sphere);

        let camera = Camera::new(
            nonzero_ext::nonzero!(400u16),
            nonzero_ext::nonzero!(400u16),
            FRAC_PI_4,
            Transform::view_transform(
                Point3D::new(-3.0, 1.0, 2.5),
                Point3D::new(0.0, 0.5, 0.0),
                Normal3D::POSITIVE_Y,
            ),
        );

        b.iter(|| render(&world, &camera, false, &AtomicBool::new(false)));
    });
}
