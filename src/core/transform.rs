use crate::core::{Matrix4D, Normal3D, Point3D, Vector};
use std::ops::Mul;

/// An affine transform, with its inverse cached at construction time rather than
/// recomputed on every ray.
///
/// Built fluently: each method post-multiplies the new operation onto the existing
/// chain, so `Transform::identity().rotate_x(a).scale_all(b).translate_y(c)` applies
/// the rotation first, then the scale, then the translation, to a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix4D,
    inverse: Matrix4D,
}

impl Transform {
    pub fn identity() -> Self {
        let matrix = Matrix4D::identity();
        Transform {
            matrix,
            inverse: matrix,
        }
    }

    pub fn translate_x(self, delta: f64) -> Self {
        self.combine(Matrix4D::translation(delta, 0.0, 0.0))
    }

    pub fn translate_y(self, delta: f64) -> Self {
        self.combine(Matrix4D::translation(0.0, delta, 0.0))
    }

    pub fn translate_z(self, delta: f64) -> Self {
        self.combine(Matrix4D::translation(0.0, 0.0, delta))
    }

    pub fn scale_x(self, factor: f64) -> Self {
        self.combine(Matrix4D::scaling(factor, 1.0, 1.0))
    }

    pub fn scale_y(self, factor: f64) -> Self {
        self.combine(Matrix4D::scaling(1.0, factor, 1.0))
    }

    pub fn scale_z(self, factor: f64) -> Self {
        self.combine(Matrix4D::scaling(1.0, 1.0, factor))
    }

    pub fn scale_all(self, factor: f64) -> Self {
        self.combine(Matrix4D::scaling(factor, factor, factor))
    }

    pub fn rotate_x(self, radians: f64) -> Self {
        self.combine(Matrix4D::rotation_x(radians))
    }

    pub fn rotate_y(self, radians: f64) -> Self {
        self.combine(Matrix4D::rotation_y(radians))
    }

    pub fn rotate_z(self, radians: f64) -> Self {
        self.combine(Matrix4D::rotation_z(radians))
    }

    pub fn shear(self, xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        self.combine(Matrix4D::shearing(xy, xz, yx, yz, zx, zy))
    }

    /// An orientation matrix composed with a translation to the origin, such that
    /// `from` maps to the camera/eye position looking towards `to`.
    pub fn view_transform(from: Point3D, to: Point3D, up: Normal3D) -> Self {
        let forward = (to - from).normalised();
        let left = forward.cross(up.normalised());
        let true_up = left.cross(forward);

        let orientation = Matrix4D::new(
            [left.x(), left.y(), left.z(), 0.0],
            [true_up.x(), true_up.y(), true_up.z(), 0.0],
            [-forward.x(), -forward.y(), -forward.z(), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        );

        Transform::identity()
            .combine(Matrix4D::translation(-from.x(), -from.y(), -from.z()))
            .combine(orientation)
    }

    /// the forward transform matrix, e.g. for transforming a ray by a shape's inverse
    pub fn underlying(&self) -> Matrix4D {
        self.matrix
    }

    /// the cached inverse of this transform
    pub fn inverse(&self) -> Matrix4D {
        self.inverse
    }

    fn combine(self, op: Matrix4D) -> Self {
        let op_inverse = op
            .inverse()
            .expect("transform builder operations are always invertible");

        Transform {
            matrix: op * self.matrix,
            inverse: self.inverse * op_inverse,
        }
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Self::Output {
        Transform {
            matrix: self.matrix * rhs.matrix,
            inverse: rhs.inverse * self.inverse,
        }
    }
}
