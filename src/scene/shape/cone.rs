use crate::core::F64Ext;
use crate::core::Ray;
use crate::core::{Normal3D, Point3D, Vector, Vector3D};
use crate::scene::bounding_box::BoundingBox;
use crate::scene::intersection::{Intersection, Intersections};
use crate::scene::Object;
use crate::scene::Shape;

/// A double-napped cone centred on the y axis, with the apex at the origin; the radius
/// at height `y` is `|y|`.
///
/// May be truncated at either end to make it finite, and capped, as with `Cylinder`.
#[derive(Debug, PartialEq)]
pub struct Cone {
    max_y: f64,
    min_y: f64,
    capped: bool,
}

impl Shape for Cone {
    fn object_bounds(&self) -> BoundingBox {
        let limit = self.min_y.abs().max(self.max_y.abs());

        BoundingBox::new(
            Point3D::new(-limit, self.min_y, -limit),
            Point3D::new(limit, self.max_y, limit),
        )
    }

    fn object_normal_at(&self, point: Point3D) -> Normal3D {
        let distance = point.x().powi(2) + point.z().powi(2);

        if self.capped && distance < point.y().powi(2) && point.y().is_roughly_gte(self.max_y) {
            Normal3D::POSITIVE_Y
        } else if self.capped
            && distance < point.y().powi(2)
            && point.y().is_roughly_lte(self.min_y)
        {
            Normal3D::NEGATIVE_Y
        } else {
            let y = distance.sqrt();
            let y = if point.y() > 0.0 { -y } else { y };

            Vector3D::new(point.x(), y, point.z()).normalised()
        }
    }

    fn object_intersect<'parent>(
        &self,
        parent: &'parent Object,
        ray: Ray,
    ) -> Intersections<'parent> {
        // accept when (x^2 + z^2) <= cap_y^2, i.e. within the cone's radius at that height
        let intersects_cap = |t: f64, cap_y: f64| {
            let x = ray.origin.x() + t * ray.direction.x();
            let z = ray.origin.z() + t * ray.direction.z();

            (x.powi(2) + z.powi(2)).is_roughly_lte(cap_y.powi(2))
        };

        let cap_intersections = if self.capped {
            let mut ts = Intersections::empty();

            let t = (self.min_y - ray.origin.y()) / ray.direction.y();
            if intersects_cap(t, self.min_y) {
                ts.push(Intersection::new(t, parent));
            }

            let t = (self.max_y - ray.origin.y()) / ray.direction.y();
            if intersects_cap(t, self.max_y) {
                ts.push(Intersection::new(t, parent));
            }

            ts
        } else {
            Intersections::empty()
        };

        let a = ray.direction.x().powi(2) - ray.direction.y().powi(2) + ray.direction.z().powi(2);
        let b = 2.0 * ray.origin.x() * ray.direction.x() - 2.0 * ray.origin.y() * ray.direction.y()
            + 2.0 * ray.origin.z() * ray.direction.z();
        let c = ray.origin.x().powi(2) - ray.origin.y().powi(2) + ray.origin.z().powi(2);

        if a.abs() <= f64::EPSILON && b.abs() <= f64::EPSILON {
            return cap_intersections;
        }

        if a.abs() <= f64::EPSILON {
            let t = -c / (2.0 * b);
            let mut ts = Intersections::single(Intersection::new(t, parent));
            ts.append(cap_intersections);
            return ts;
        }

        let mut ts = Intersections::empty();
        if let Some((first, second)) = crate::core::quadratic(a, b, c) {
            let y_first = ray.origin.y() + ray.direction.y() * first;
            if y_first > self.min_y && y_first < self.max_y {
                ts.push(Intersection::new(first, parent));
            }

            let y_second = ray.origin.y() + ray.direction.y() * second;
            if y_second > self.min_y && y_second < self.max_y {
                ts.push(Intersection::new(second, parent));
            }
        }

        ts.join(cap_intersections)
    }
}

pub struct ConeBuilder {
    min_y: f64,
    max_y: f64,
    capped: bool,
}

impl ConeBuilder {
    pub(in crate::scene) fn new() -> Self {
        ConeBuilder {
            min_y: -f64::MAX,
            max_y: f64::MAX,
            capped: false,
        }
    }

    pub fn min_y(mut self, min_y: f64) -> Self {
        self.min_y = min_y;
        self
    }

    pub fn max_y(mut self, max_y: f64) -> Self {
        self.max_y = max_y;
        self
    }

    pub fn capped(mut self) -> Self {
        self.capped = true;
        self
    }

    pub fn build(self) -> Object {
        Object::from_shape(Box::new(Cone {
            min_y: self.min_y,
            max_y: self.max_y,
            capped: self.capped,
        }))
    }
}
