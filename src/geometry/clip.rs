//! Sphere trivial accept/reject and exact triangle-vs-plane clipping.

use glam::Vec3;

use super::{Plane, Sphere, Triangle};

/// Signed distances within this of a plane count as inside, so clipping does
/// not spray sliver triangles from floating-point noise.
const INSIDE_EPSILON: f32 = 1e-6;

/// Outcome of testing a bounding sphere against one clipping plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneTest {
    /// Fully outside; the whole mesh can be dropped.
    Discarded,
    /// Fully inside; exact clipping against this plane can be skipped.
    Accepted,
    /// Straddling; every triangle needs the exact clip.
    Unknown,
}

/// Classify a bounding sphere against a plane by the signed distance of its
/// center.
pub fn test_sphere(sphere: &Sphere, plane: &Plane) -> PlaneTest {
    let distance = plane.signed_distance(sphere.center);
    if distance.abs() < sphere.radius {
        PlaneTest::Unknown
    } else if distance <= -sphere.radius {
        PlaneTest::Discarded
    } else {
        PlaneTest::Accepted
    }
}

/// A matched vertex/triangle list pair produced by one clipping pass, with
/// each triangle's camera-space face normal riding at the same position in
/// `normals`.
///
/// Triangle indices are only valid against the `vertices` of the same stage.
/// Stages are consumed by value and replaced as a unit; no stage retains a
/// reference to a previous stage's lists.
#[derive(Debug, Clone)]
pub struct ClipStage {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<Triangle>,
    pub normals: Vec<Vec3>,
}

impl ClipStage {
    /// Clip every triangle against one plane, emitting the next stage.
    ///
    /// Triangles fully inside pass through; fully outside are dropped. A
    /// triangle straddling the plane is re-triangulated: intersection
    /// vertices are synthesized on the plane, appended to this stage's
    /// vertex list, and one or two covering triangles are emitted with the
    /// parent's color and normal. Relabeling is a cyclic rotation, so the
    /// winding of every emitted triangle matches its parent.
    pub fn clip_against(self, plane: &Plane) -> ClipStage {
        let ClipStage {
            mut vertices,
            triangles,
            normals,
        } = self;

        let mut out_triangles = Vec::with_capacity(triangles.len());
        let mut out_normals = Vec::with_capacity(triangles.len());

        for (tri, &normal) in triangles.iter().zip(&normals) {
            let a = vertices[tri.a];
            let b = vertices[tri.b];
            let c = vertices[tri.c];

            let da = plane.signed_distance(a);
            let db = plane.signed_distance(b);
            let dc = plane.signed_distance(c);

            let inside = |d: f32| d > -INSIDE_EPSILON;
            let positives = [da, db, dc].iter().filter(|&&d| inside(d)).count();

            match positives {
                3 => {
                    out_triangles.push(*tri);
                    out_normals.push(normal);
                }
                1 => {
                    // Rotate so the single inside vertex is first.
                    let (ia, a, b, c) = if inside(da) {
                        (tri.a, a, b, c)
                    } else if inside(db) {
                        (tri.b, b, c, a)
                    } else {
                        (tri.c, c, a, b)
                    };

                    let new_b = intersect(plane, a, b);
                    let new_c = intersect(plane, a, c);
                    vertices.push(new_b);
                    let ib = vertices.len() - 1;
                    vertices.push(new_c);
                    let ic = ib + 1;

                    out_triangles.push(Triangle { a: ia, b: ib, c: ic, color: tri.color });
                    out_normals.push(normal);
                }
                2 => {
                    // Rotate so the single outside vertex is last.
                    let (ia, ib, a, b, c) = if !inside(da) {
                        (tri.b, tri.c, b, c, a)
                    } else if !inside(db) {
                        (tri.c, tri.a, c, a, b)
                    } else {
                        (tri.a, tri.b, a, b, c)
                    };

                    let a_prime = intersect(plane, c, a);
                    let b_prime = intersect(plane, c, b);
                    vertices.push(a_prime);
                    let ia_prime = vertices.len() - 1;
                    vertices.push(b_prime);
                    let ib_prime = ia_prime + 1;

                    out_triangles.push(Triangle { a: ia, b: ib, c: ia_prime, color: tri.color });
                    out_triangles.push(Triangle {
                        a: ia_prime,
                        b: ib,
                        c: ib_prime,
                        color: tri.color,
                    });
                    out_normals.push(normal);
                    out_normals.push(normal);
                }
                _ => {}
            }
        }

        ClipStage {
            vertices,
            triangles: out_triangles,
            normals: out_normals,
        }
    }
}

/// Point where the segment `from -> to` crosses the plane. `from` and `to`
/// must lie on opposite sides, so the denominator cannot vanish.
fn intersect(plane: &Plane, from: Vec3, to: Vec3) -> Vec3 {
    let t = -plane.signed_distance(from) / plane.normal.dot(to - from);
    from.lerp(to, t)
}
