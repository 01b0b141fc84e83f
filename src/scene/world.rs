use crate::core::*;
use crate::scene::intersection::{HitData, Intersections};
use crate::scene::Material;
use crate::scene::MaterialKind;
use crate::scene::Object;
use crate::scene::{Light, LightSample};

pub struct World {
    pub(super) objects: Vec<Object>,
    pub light: Light,
    pub settings: WorldSettings,
}

pub struct WorldSettings {
    /// Max number of rays to cast from reflections/refractions
    /// Higher values produce more accurate results, but increase rendering time
    pub recursion_depth: u8,
    /// Default colour returned when a ray doesn't intersect any objects
    pub sky_colour: Colour,
    /// the soft limit of group sizes - lower values will create more, smaller, bounding boxes, which speeds up rendering of
    /// more complex scenes, but potentially increases rendering time of very simple scenes
    pub group_size_threshold: u8,
}

impl Default for WorldSettings {
    fn default() -> Self {
        WorldSettings {
            recursion_depth: 5,
            sky_colour: Colour::BLACK,
            group_size_threshold: 4,
        }
    }
}

impl World {
    pub fn empty() -> Self {
        World {
            objects: Vec::new(),
            light: Light::point(Colour::WHITE, Point3D::new(-10.0, 10.0, -10.0)),
            settings: Default::default(),
        }
    }

    pub fn default() -> Self {
        World {
            objects: vec![
                Object::sphere().with_material(Material {
                    kind: MaterialKind::Solid(Colour::new(0.8, 1.0, 0.6)),
                    ambient: 0.1,
                    diffuse: 0.7,
                    specular: 0.2,
                    ..Default::default()
                }),
                Object::sphere().transformed(Transform::identity().scale_all(0.5)),
            ],
            light: Light::point(Colour::WHITE, Point3D::new(-10.0, 10.0, -10.0)),
            settings: Default::default(),
        }
    }

    pub fn add(&mut self, object: Object) {
        self.objects
            .push(object.optimised(self.settings.group_size_threshold as _));
    }

    pub fn colour_at(&self, ray: Ray) -> Colour {
        fn inner(this: &World, ray: Ray, last_hit: Option<u32>, limit: u8) -> Colour {
            if limit == 0 {
                return Colour::BLACK;
            }

            let intersections = this.intersect(&ray);
            if let Some(hit) = intersections.hit(last_hit) {
                let hit_data = HitData::from(&ray, hit, intersections);
                let surface = this.shade_hit(&hit_data);

                let reflected = if hit_data.object.material.reflective == 0.0 {
                    Colour::BLACK
                } else {
                    let reflection_vector =
                        ray.direction.normalised().reflect_through(hit_data.normal);
                    let reflection = Ray::new(hit_data.over_point, reflection_vector);
                    inner(this, reflection, Some(hit_data.object.id()), limit - 1)
                        * hit_data.object.material.reflective
                };

                if hit_data.object.material.transparency == 0.0 {
                    surface + reflected
                } else {
                    // check for total internal reflection
                    let reflection_data = hit_data.reflection();

                    let refracted = if reflection_data.is_total() {
                        Colour::BLACK
                    } else {
                        let refracted_direction =
                            reflection_data.refraction_vector(hit_data.normal, hit_data.eye);

                        let refracted_ray =
                            Ray::new(hit_data.under_point, refracted_direction.normalised());

                        inner(this, refracted_ray, Some(hit_data.object.id()), limit - 1)
                            * hit_data.object.material.transparency
                    };

                    if hit_data.object.material.reflective > 0.0 {
                        let reflectance = reflection_data
                            .reflectance(hit_data.entered_refractive, hit_data.exited_refractive);

                        surface + (reflected * reflectance) + (refracted * (1.0 - reflectance))
                    } else {
                        surface + reflected + refracted
                    }
                }
            } else {
                this.settings.sky_colour
            }
        }

        inner(self, ray, None, self.settings.recursion_depth)
    }

    pub(super) fn intersect(&self, ray: &Ray) -> Intersections {
        self.objects
            .iter()
            .map(|obj| obj.intersect(ray))
            .fold(Intersections::empty(), Intersections::join)
    }

    pub(super) fn shade_hit(&self, hit_data: &HitData) -> Colour {
        let sample = self.light.sample();
        let shadowed = self.is_shadowed(hit_data.over_point, &sample);

        let direct_light = if shadowed { Colour::BLACK } else { sample.colour };

        hit_data.colour(direct_light, &sample)
    }

    /// a point is shadowed when a shadow-casting object lies between it and the light,
    /// strictly nearer than the light itself
    fn is_shadowed(&self, point: Point3D, light: &LightSample) -> bool {
        let light_vector = light.position - point;
        let light_distance = light_vector.magnitude();

        if light_distance.is_roughly_zero() {
            return false;
        }

        let ray = Ray::new(point, light_vector.normalised());

        self.intersect(&ray)
            .into_iter()
            .any(|i| i.t > 0.0 && i.t < light_distance && i.with.material.casts_shadow)
    }
}
