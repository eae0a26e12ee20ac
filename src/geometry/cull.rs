//! Face normals and back-face removal.

use glam::Vec3;

use super::Triangle;

/// Camera-space face normals, one per triangle: `cross(b - a, c - a)`.
///
/// Not normalized — the magnitude is proportional to triangle area, and only
/// the sign of a dot product is needed downstream.
pub fn face_normals(triangles: &[Triangle], vertices: &[Vec3]) -> Vec<Vec3> {
    triangles
        .iter()
        .map(|tri| {
            let ab = vertices[tri.b] - vertices[tri.a];
            let ac = vertices[tri.c] - vertices[tri.a];
            ab.cross(ac)
        })
        .collect()
}

/// Remove triangles facing away from the camera at the origin.
///
/// A triangle is kept when `dot(normal, vertex_a) < 0`, i.e. its face normal
/// points back toward the camera looking down -z. The normal list is
/// filtered in lockstep so the two stay index-aligned.
pub fn cull_back_faces(
    triangles: Vec<Triangle>,
    vertices: &[Vec3],
    normals: Vec<Vec3>,
) -> (Vec<Triangle>, Vec<Vec3>) {
    let mut kept_triangles = Vec::with_capacity(triangles.len());
    let mut kept_normals = Vec::with_capacity(normals.len());

    for (tri, normal) in triangles.into_iter().zip(normals) {
        if normal.dot(vertices[tri.a]) < 0.0 {
            kept_triangles.push(tri);
            kept_normals.push(normal);
        }
    }

    (kept_triangles, kept_normals)
}
