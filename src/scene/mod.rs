//! Scene assembly and the per-instance render loop.
//!
//! The pipeline runs one instance at a time, to completion: transform to
//! camera space, trivial sphere test, back-face cull, exact clip against the
//! planes the sphere test left unknown, project, accumulate lighting, fill.

mod config;
mod procedural;

pub use config::*;
pub use procedural::*;

use glam::Vec3;

use crate::camera::Camera;
use crate::geometry::{
    cull_back_faces, face_normals, test_sphere, ClipStage, Color, Instance, Plane, PlaneTest,
    Sphere,
};
use crate::light::{accumulate_intensity, Light};
use crate::rasterizer::{draw_filled_triangle, Canvas};

/// Counters accumulated over a render call, for diagnostic output.
#[derive(Debug, Default, Clone, Copy)]
pub struct RenderStats {
    pub instances_drawn: usize,
    pub instances_discarded: usize,
    pub triangles_drawn: usize,
    pub triangles_culled: usize,
}

/// Lights moved into camera space, where lighting is evaluated.
pub fn camera_space_lights(lights: &[Light], camera: &Camera) -> Vec<Light> {
    lights
        .iter()
        .map(|light| light.transformed(&camera.transform))
        .collect()
}

/// Render a whole scene into the canvas.
pub fn render(
    canvas: &mut Canvas,
    camera: &Camera,
    instances: &[Instance],
    lights: &[Light],
    background: Color,
) -> RenderStats {
    canvas.fill(background);
    let camera_lights = camera_space_lights(lights, camera);

    let mut stats = RenderStats::default();
    for instance in instances {
        render_instance(canvas, camera, instance, &camera_lights, &mut stats);
    }
    stats
}

/// Run the full pipeline for one instance.
///
/// `camera_lights` must already be in camera space (see
/// [`camera_space_lights`]); the caller clears the canvas.
pub fn render_instance(
    canvas: &mut Canvas,
    camera: &Camera,
    instance: &Instance,
    camera_lights: &[Light],
    stats: &mut RenderStats,
) {
    let mesh = instance.mesh;
    if mesh.is_empty() {
        return;
    }

    let absolute = camera.transform * instance.model_transform();

    let vertices: Vec<Vec3> = mesh
        .vertices
        .iter()
        .map(|&v| absolute.transform_point3(v))
        .collect();

    // The sphere keeps its authored radius; only the center moves. It bounds
    // the unclipped mesh extent, which is all the trivial test needs.
    let sphere = Sphere {
        center: absolute.transform_point3(mesh.bounding_sphere.center),
        radius: mesh.bounding_sphere.radius,
    };

    let mut unknown_planes: Vec<Plane> = Vec::new();
    for plane in &camera.clipping_planes {
        match test_sphere(&sphere, plane) {
            PlaneTest::Discarded => {
                stats.instances_discarded += 1;
                return;
            }
            PlaneTest::Unknown => unknown_planes.push(*plane),
            PlaneTest::Accepted => {}
        }
    }

    let normals = face_normals(&mesh.triangles, &vertices);
    let total = mesh.triangles.len();
    let (triangles, normals) = cull_back_faces(mesh.triangles.clone(), &vertices, normals);
    stats.triangles_culled += total - triangles.len();

    // Each pass consumes the previous stage and hands over a fresh
    // vertex/triangle pair; planes the sphere fully cleared are skipped.
    let mut stage = ClipStage { vertices, triangles, normals };
    for plane in &unknown_planes {
        stage = stage.clip_against(plane);
    }

    let projected: Vec<Vec3> = stage.vertices.iter().map(|&v| camera.project(v)).collect();

    for (tri, &normal) in stage.triangles.iter().zip(&stage.normals) {
        let ia = accumulate_intensity(camera_lights, normal, stage.vertices[tri.a]);
        let ib = accumulate_intensity(camera_lights, normal, stage.vertices[tri.b]);
        let ic = accumulate_intensity(camera_lights, normal, stage.vertices[tri.c]);

        draw_filled_triangle(
            canvas,
            projected[tri.a],
            projected[tri.b],
            projected[tri.c],
            ia,
            ib,
            ic,
            tri.color,
        );
        stats.triangles_drawn += 1;
    }
    stats.instances_drawn += 1;
}
