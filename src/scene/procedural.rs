//! Procedural demo meshes, fed through the same import boundary an external
//! model importer would use.

use glam::Vec3;

use crate::geometry::{Color, ImportedFace, ImportedModel};

/// Axis-aligned cube with one material per face, in the order
/// +z, -z, +x, -x, +y, -y.
pub fn cube(half_extent: f32, face_colors: [Color; 6]) -> ImportedModel {
    let h = half_extent;
    let positions = vec![
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ];

    // Each face as four corners wound counter-clockwise seen from outside.
    let quads: [[usize; 4]; 6] = [
        [4, 5, 6, 7], // +z
        [1, 0, 3, 2], // -z
        [5, 1, 2, 6], // +x
        [0, 4, 7, 3], // -x
        [7, 6, 2, 3], // +y
        [0, 1, 5, 4], // -y
    ];

    let mut faces = Vec::with_capacity(12);
    for (material, quad) in quads.iter().enumerate() {
        faces.push(ImportedFace { indices: [quad[0], quad[1], quad[2]], material });
        faces.push(ImportedFace { indices: [quad[0], quad[2], quad[3]], material });
    }

    ImportedModel {
        positions,
        faces,
        materials: face_colors.to_vec(),
    }
}

/// Latitude/longitude sphere in a single material.
///
/// `rings` counts latitude bands (at least 2), `segments` longitude steps
/// (at least 3). Triangles are wound counter-clockwise seen from outside.
pub fn uv_sphere(radius: f32, rings: usize, segments: usize, color: Color) -> ImportedModel {
    let rings = rings.max(2);
    let segments = segments.max(3);

    let mut positions = Vec::with_capacity(2 + (rings - 1) * segments);
    positions.push(Vec3::new(0.0, radius, 0.0));
    for i in 1..rings {
        let phi = std::f32::consts::PI * i as f32 / rings as f32;
        let y = radius * phi.cos();
        let ring_radius = radius * phi.sin();
        for j in 0..segments {
            let theta = std::f32::consts::TAU * j as f32 / segments as f32;
            positions.push(Vec3::new(
                ring_radius * theta.sin(),
                y,
                ring_radius * theta.cos(),
            ));
        }
    }
    positions.push(Vec3::new(0.0, -radius, 0.0));

    let ring_vertex = |ring: usize, segment: usize| 1 + (ring - 1) * segments + segment % segments;
    let north = 0;
    let south = positions.len() - 1;

    let mut faces = Vec::new();
    for j in 0..segments {
        faces.push(ImportedFace {
            indices: [north, ring_vertex(1, j), ring_vertex(1, j + 1)],
            material: 0,
        });
    }
    for i in 1..rings - 1 {
        for j in 0..segments {
            let a = ring_vertex(i, j);
            let b = ring_vertex(i, j + 1);
            let c = ring_vertex(i + 1, j + 1);
            let d = ring_vertex(i + 1, j);
            faces.push(ImportedFace { indices: [a, d, c], material: 0 });
            faces.push(ImportedFace { indices: [a, c, b], material: 0 });
        }
    }
    for j in 0..segments {
        faces.push(ImportedFace {
            indices: [south, ring_vertex(rings - 1, j + 1), ring_vertex(rings - 1, j)],
            material: 0,
        });
    }

    ImportedModel {
        positions,
        faces,
        materials: vec![color],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Mesh;

    fn outward_wound(model: &ImportedModel) -> bool {
        model.faces.iter().all(|face| {
            let a = model.positions[face.indices[0]];
            let b = model.positions[face.indices[1]];
            let c = model.positions[face.indices[2]];
            let centroid = (a + b + c) / 3.0;
            (b - a).cross(c - a).dot(centroid) > 0.0
        })
    }

    #[test]
    fn cube_has_shared_corners_and_twelve_faces() {
        let model = cube(1.0, [Color::WHITE; 6]);
        assert_eq!(model.positions.len(), 8);
        assert_eq!(model.faces.len(), 12);
        assert!(outward_wound(&model));
        assert!(!Mesh::from_imported(&model).is_empty());
    }

    #[test]
    fn sphere_vertices_sit_on_the_radius() {
        let model = uv_sphere(2.0, 6, 8, Color::WHITE);
        for &p in &model.positions {
            assert!((p.length() - 2.0).abs() < 1e-4);
        }
        assert!(outward_wound(&model));
    }

    #[test]
    fn sphere_triangle_count_matches_the_grid() {
        let rings = 6;
        let segments = 8;
        let model = uv_sphere(1.0, rings, segments, Color::WHITE);
        assert_eq!(model.positions.len(), 2 + (rings - 1) * segments);
        assert_eq!(model.faces.len(), 2 * segments + 2 * segments * (rings - 2));
    }
}
