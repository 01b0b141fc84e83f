use crate::core::{Point3D, Ray, Transform, Vector};

/// An axis-aligned bounding box, used to cheaply reject rays that can't possibly hit a
/// shape (or a whole subtree of a `Group`) before running the more expensive object-space
/// intersection test.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct BoundingBox {
    min: Point3D,
    max: Point3D,
}

impl BoundingBox {
    /// large enough to stand in for an actually-infinite bound without risking overflow
    /// when transformed or split
    pub const LIMIT: f64 = 1_000_000.0;

    pub fn new(min: Point3D, max: Point3D) -> Self {
        BoundingBox { min, max }
    }

    pub fn infinite() -> Self {
        let limit = Self::LIMIT;
        BoundingBox::new(
            Point3D::new(-limit, -limit, -limit),
            Point3D::new(limit, limit, limit),
        )
    }

    pub fn min(&self) -> Point3D {
        self.min
    }

    pub fn max(&self) -> Point3D {
        self.max
    }

    pub fn expand_to_fit(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            Point3D::min([self.min, other.min]),
            Point3D::max([self.max, other.max]),
        )
    }

    pub fn contains(&self, point: Point3D) -> bool {
        point.x() >= self.min.x()
            && point.x() <= self.max.x()
            && point.y() >= self.min.y()
            && point.y() <= self.max.y()
            && point.z() >= self.min.z()
            && point.z() <= self.max.z()
    }

    pub fn excludes(&self, point: Point3D) -> bool {
        !self.contains(point)
    }

    pub fn fully_contains(&self, other: &BoundingBox) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    pub fn partially_excludes(&self, other: &BoundingBox) -> bool {
        !self.fully_contains(other)
    }

    pub fn transformed(&self, transform: Transform) -> BoundingBox {
        let matrix = transform.underlying();

        let corners = [
            Point3D::new(self.min.x(), self.min.y(), self.min.z()),
            Point3D::new(self.min.x(), self.min.y(), self.max.z()),
            Point3D::new(self.min.x(), self.max.y(), self.min.z()),
            Point3D::new(self.min.x(), self.max.y(), self.max.z()),
            Point3D::new(self.max.x(), self.min.y(), self.min.z()),
            Point3D::new(self.max.x(), self.min.y(), self.max.z()),
            Point3D::new(self.max.x(), self.max.y(), self.min.z()),
            Point3D::new(self.max.x(), self.max.y(), self.max.z()),
        ];

        let transformed_corners = corners.map(|corner| {
            let (x, y, z, _) = matrix * corner;
            Point3D::new(x, y, z)
        });

        BoundingBox::new(
            Point3D::min(transformed_corners),
            Point3D::max(transformed_corners),
        )
    }

    pub fn intersected_by(&self, ray: &Ray) -> bool {
        fn check_axis(origin: f64, direction: f64, min: f64, max: f64) -> (f64, f64) {
            let t_min_numerator = min - origin;
            let t_max_numerator = max - origin;

            let t_min = t_min_numerator / direction;
            let t_max = t_max_numerator / direction;

            if t_min > t_max {
                (t_max, t_min)
            } else {
                (t_min, t_max)
            }
        }

        let (t_min_x, t_max_x) = check_axis(
            ray.origin.x(),
            ray.direction.x(),
            self.min.x(),
            self.max.x(),
        );
        let (t_min_y, t_max_y) = check_axis(
            ray.origin.y(),
            ray.direction.y(),
            self.min.y(),
            self.max.y(),
        );
        let (t_min_z, t_max_z) = check_axis(
            ray.origin.z(),
            ray.direction.z(),
            self.min.z(),
            self.max.z(),
        );

        let t_min = t_min_x.max(t_min_y).max(t_min_z);
        let t_max = t_max_x.min(t_max_y).min(t_max_z);

        t_min <= t_max
    }

    /// splits in half along the longest axis, for building a `Group`'s acceleration hierarchy
    pub fn split(&self) -> (BoundingBox, BoundingBox) {
        let dx = self.max.x() - self.min.x();
        let dy = self.max.y() - self.min.y();
        let dz = self.max.z() - self.min.z();

        if dx >= dy && dx >= dz {
            let mid_x = self.min.x() + dx / 2.0;

            (
                BoundingBox::new(self.min, Point3D::new(mid_x, self.max.y(), self.max.z())),
                BoundingBox::new(Point3D::new(mid_x, self.min.y(), self.min.z()), self.max),
            )
        } else if dy >= dx && dy >= dz {
            let mid_y = self.min.y() + dy / 2.0;

            (
                BoundingBox::new(self.min, Point3D::new(self.max.x(), mid_y, self.max.z())),
                BoundingBox::new(Point3D::new(self.min.x(), mid_y, self.min.z()), self.max),
            )
        } else {
            let mid_z = self.min.z() + dz / 2.0;

            (
                BoundingBox::new(self.min, Point3D::new(self.max.x(), self.max.y(), mid_z)),
                BoundingBox::new(Point3D::new(self.min.x(), self.min.y(), mid_z), self.max),
            )
        }
    }
}

#[cfg(test)]
pub use test_utils::*;
