//! Mesh construction and the model-import boundary.

use glam::Vec3;

use super::{Color, Sphere, Triangle};

/// One face as delivered by an external model importer: three indices into
/// the flat position list and an index into the material table.
#[derive(Debug, Clone, Copy)]
pub struct ImportedFace {
    pub indices: [usize; 3],
    pub material: usize,
}

/// The import-boundary payload: flat vertex positions, indexed faces, and a
/// material-to-color table. Produced by an external importer (or a
/// procedural generator); the core only consumes it.
#[derive(Debug, Clone, Default)]
pub struct ImportedModel {
    pub positions: Vec<Vec3>,
    pub faces: Vec<ImportedFace>,
    pub materials: Vec<Color>,
}

/// An owned vertex list, an owned triangle list, and the bounding sphere
/// derived from the vertices at build time. The sphere is immutable from
/// then on; per-frame clipping only ever shrinks geometry inside it.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<Triangle>,
    pub bounding_sphere: Sphere,
}

impl Mesh {
    /// A mesh with no geometry. Rendering it is a no-op.
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            bounding_sphere: Sphere {
                center: Vec3::ZERO,
                radius: 0.0,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Build a mesh from an imported model.
    ///
    /// A malformed import — a face index outside the position list, or a
    /// material index outside the table — degrades to an empty mesh with a
    /// diagnostic on stderr. The scene proceeds without the mesh rather
    /// than failing the whole render.
    pub fn from_imported(model: &ImportedModel) -> Self {
        let mut triangles = Vec::with_capacity(model.faces.len());
        for (i, face) in model.faces.iter().enumerate() {
            if face.indices.iter().any(|&v| v >= model.positions.len()) {
                eprintln!(
                    "mesh import rejected: face {} references vertex outside the {}-entry position list",
                    i,
                    model.positions.len()
                );
                return Self::empty();
            }
            let Some(&color) = model.materials.get(face.material) else {
                eprintln!(
                    "mesh import rejected: face {} references material {} of {}",
                    i,
                    face.material,
                    model.materials.len()
                );
                return Self::empty();
            };
            triangles.push(Triangle {
                a: face.indices[0],
                b: face.indices[1],
                c: face.indices[2],
                color,
            });
        }

        Self {
            bounding_sphere: bounding_sphere_of(&model.positions),
            vertices: model.positions.clone(),
            triangles,
        }
    }
}

/// Centroid-centered sphere reaching the farthest vertex.
fn bounding_sphere_of(vertices: &[Vec3]) -> Sphere {
    if vertices.is_empty() {
        return Sphere {
            center: Vec3::ZERO,
            radius: 0.0,
        };
    }

    let weight = 1.0 / vertices.len() as f32;
    let center = vertices.iter().fold(Vec3::ZERO, |acc, &v| acc + v * weight);

    let max_sq = vertices
        .iter()
        .map(|&v| (v - center).length_squared())
        .fold(0.0f32, f32::max);

    Sphere {
        center,
        radius: max_sq.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> ImportedModel {
        ImportedModel {
            positions: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            faces: vec![
                ImportedFace { indices: [0, 1, 2], material: 0 },
                ImportedFace { indices: [0, 2, 3], material: 0 },
            ],
            materials: vec![Color::WHITE],
        }
    }

    #[test]
    fn import_builds_triangles_and_sphere() {
        let mesh = Mesh::from_imported(&unit_quad());
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.triangles.len(), 2);
        assert_eq!(mesh.triangles[1].color, Color::WHITE);

        let sphere = mesh.bounding_sphere;
        assert!((sphere.center - Vec3::new(0.5, 0.5, 0.0)).length() < 1e-6);
        assert!((sphere.radius - 0.5f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn bad_vertex_index_degrades_to_empty_mesh() {
        let mut model = unit_quad();
        model.faces[1].indices = [0, 2, 9];
        let mesh = Mesh::from_imported(&model);
        assert!(mesh.is_empty());
        assert!(mesh.vertices.is_empty());
    }

    #[test]
    fn bad_material_index_degrades_to_empty_mesh() {
        let mut model = unit_quad();
        model.faces[0].material = 3;
        assert!(Mesh::from_imported(&model).is_empty());
    }

    #[test]
    fn empty_import_is_an_empty_mesh() {
        let mesh = Mesh::from_imported(&ImportedModel::default());
        assert!(mesh.is_empty());
        assert_eq!(mesh.bounding_sphere.radius, 0.0);
    }
}
