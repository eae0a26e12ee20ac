//! Geometry data model shared across the pipeline.

mod clip;
mod cull;
mod mesh;

pub use clip::*;
pub use cull::*;
pub use mesh::*;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Linear RGB color, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Scale by a light intensity.
    pub fn scale(self, intensity: f32) -> Color {
        Color {
            r: self.r * intensity,
            g: self.g * intensity,
            b: self.b * intensity,
        }
    }
}

/// Three indices into the vertex list this triangle is paired with, plus a
/// flat color. A triangle list and its vertex list are replaced together
/// after every clipping pass; indices are never valid across stages.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub color: Color,
}

/// Bounding sphere used for trivial accept/reject against clipping planes.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

/// Plane in Hessian form: `dot(normal, p) + offset == 0` on the plane, the
/// positive half-space is the accepted side.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub normal: Vec3,
    pub offset: f32,
}

impl Plane {
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.offset
    }
}

/// A placed mesh: non-owning reference plus uniform scale, Euler rotations in
/// degrees (applied X, then Y, then Z), and a translation. Instances are
/// transient and rebuilt per render call; they own no geometry.
#[derive(Debug, Clone, Copy)]
pub struct Instance<'a> {
    pub mesh: &'a Mesh,
    pub scale: f32,
    pub rotation_deg: [f32; 3],
    pub position: Vec3,
}

impl<'a> Instance<'a> {
    pub fn new(mesh: &'a Mesh) -> Self {
        Self {
            mesh,
            scale: 1.0,
            rotation_deg: [0.0; 3],
            position: Vec3::ZERO,
        }
    }

    /// Model transform: scale, rotate about X, Y, Z in that order, translate.
    pub fn model_transform(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_z(self.rotation_deg[2].to_radians())
            * Mat4::from_rotation_y(self.rotation_deg[1].to_radians())
            * Mat4::from_rotation_x(self.rotation_deg[0].to_radians())
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_transform_applies_scale_before_translation() {
        let mesh = Mesh::empty();
        let mut instance = Instance::new(&mesh);
        instance.scale = 2.0;
        instance.position = Vec3::new(10.0, 0.0, 0.0);

        let p = instance.model_transform().transform_point3(Vec3::X);
        assert!((p - Vec3::new(12.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn rotation_order_is_x_then_y_then_z() {
        let mesh = Mesh::empty();
        let mut instance = Instance::new(&mesh);
        instance.rotation_deg = [90.0, 90.0, 0.0];

        // +Y rotates to +Z about X, then +Z rotates to +X about Y.
        let p = instance.model_transform().transform_point3(Vec3::Y);
        assert!((p - Vec3::X).length() < 1e-5);
    }
}
