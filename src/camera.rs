//! Camera: world-to-camera transform, clipping planes, projection.

use glam::{Mat4, Vec3, Vec4};

use crate::geometry::Plane;

/// A look-at camera with its five camera-space clipping planes.
///
/// Camera space puts the camera at the origin looking down -z. The clipping
/// planes are fixed at construction: the near plane, then the left, right,
/// top, and bottom frustum side planes, all with inward-pointing normals.
pub struct Camera {
    /// World-to-camera rigid transform (rotation + translation).
    pub transform: Mat4,
    pub clipping_planes: [Plane; 5],
    viewport_width: f32,
    viewport_height: f32,
    canvas_width: f32,
    canvas_height: f32,
}

impl Camera {
    /// Build the camera from position, look-at target, an up hint, the
    /// vertical field of view in degrees, and the target framebuffer size.
    pub fn new(
        position: Vec3,
        look_at: Vec3,
        up: Vec3,
        vertical_fov_deg: f32,
        canvas_width: usize,
        canvas_height: usize,
    ) -> Self {
        let forward = (look_at - position).normalize();
        let right = forward.cross(up).normalize();
        let true_up = right.cross(forward);

        // Rows are the camera basis: x along right, y along true up, and z
        // along -forward so the view direction is -z.
        let rotation = Mat4::from_cols(
            Vec4::new(right.x, true_up.x, -forward.x, 0.0),
            Vec4::new(right.y, true_up.y, -forward.y, 0.0),
            Vec4::new(right.z, true_up.z, -forward.z, 0.0),
            Vec4::W,
        );
        let transform = rotation * Mat4::from_translation(-position);

        let aspect = canvas_width as f32 / canvas_height as f32;
        let half_tan = (vertical_fov_deg.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * half_tan;
        let viewport_width = viewport_height * aspect;

        // Frustum corner rays at the z = -1 viewport; adjacent-corner cross
        // products give the side-plane normals, pointing inward.
        let half_w = viewport_width * 0.5;
        let half_h = viewport_height * 0.5;
        let top_left = Vec3::new(-half_w, half_h, -1.0);
        let top_right = Vec3::new(half_w, half_h, -1.0);
        let bottom_left = Vec3::new(-half_w, -half_h, -1.0);
        let bottom_right = Vec3::new(half_w, -half_h, -1.0);

        let clipping_planes = [
            Plane { normal: Vec3::new(0.0, 0.0, -1.0), offset: 1.0 },
            Plane { normal: bottom_left.cross(top_left).normalize(), offset: 0.0 },
            Plane { normal: top_right.cross(bottom_right).normalize(), offset: 0.0 },
            Plane { normal: top_left.cross(top_right).normalize(), offset: 0.0 },
            Plane { normal: bottom_right.cross(bottom_left).normalize(), offset: 0.0 },
        ];

        Self {
            transform,
            clipping_planes,
            viewport_width,
            viewport_height,
            canvas_width: canvas_width as f32,
            canvas_height: canvas_height as f32,
        }
    }

    /// Project a camera-space point to raster coordinates.
    ///
    /// Perspective division by -z, then the normalized viewport maps onto
    /// the canvas. The z of the result keeps the camera-space depth
    /// (negated z) for the depth test.
    pub fn project(&self, point: Vec3) -> Vec3 {
        let px = point.x / -point.z;
        let py = point.y / -point.z;

        let u = px / self.viewport_width + 0.5;
        let v = py / self.viewport_height + 0.5;

        Vec3::new(u * self.canvas_width, v * self.canvas_height, -point.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward_camera() -> Camera {
        Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 60.0, 200, 200)
    }

    #[test]
    fn origin_camera_transform_is_identity() {
        let camera = forward_camera();
        let p = camera.transform.transform_point3(Vec3::new(1.0, 2.0, -3.0));
        assert!((p - Vec3::new(1.0, 2.0, -3.0)).length() < 1e-5);
    }

    #[test]
    fn transform_recenters_on_the_camera() {
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::Y,
            60.0,
            200,
            200,
        );
        // The look-at target sits straight ahead, 10 units down -z.
        let p = camera.transform.transform_point3(Vec3::new(0.0, 0.0, -5.0));
        assert!((p - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-4);
    }

    #[test]
    fn view_axis_projects_to_canvas_center() {
        let camera = forward_camera();
        let projected = camera.project(Vec3::new(0.0, 0.0, -5.0));
        assert!((projected.x - 100.0).abs() < 1e-3);
        assert!((projected.y - 100.0).abs() < 1e-3);
        assert!((projected.z - 5.0).abs() < 1e-5);
    }

    #[test]
    fn frustum_planes_accept_points_ahead_and_reject_points_aside() {
        let camera = forward_camera();

        let ahead = Vec3::new(0.0, 0.0, -5.0);
        for plane in &camera.clipping_planes {
            assert!(plane.signed_distance(ahead) > 0.0);
        }

        // Far off to the left at the same depth: outside the left plane.
        let aside = Vec3::new(-50.0, 0.0, -5.0);
        assert!(camera
            .clipping_planes
            .iter()
            .any(|p| p.signed_distance(aside) < 0.0));

        // Behind the camera: outside every side plane.
        let behind = Vec3::new(0.0, 0.0, 5.0);
        assert!(camera
            .clipping_planes
            .iter()
            .any(|p| p.signed_distance(behind) < 0.0));
    }

    #[test]
    fn side_plane_normals_are_unit_length() {
        let camera = forward_camera();
        for plane in &camera.clipping_planes {
            assert!((plane.normal.length() - 1.0).abs() < 1e-5);
        }
    }
}
