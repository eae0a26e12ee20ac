//! Light sources and per-vertex intensity evaluation.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// The closed set of light sources.
///
/// Each variant contributes a non-negative scalar intensity at a surface
/// point; contributions are summed per vertex across the scene's lights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Light {
    /// Attenuation-free point light: intensity scaled by the cosine of the
    /// angle between the surface normal and the direction to the light,
    /// zero when the surface faces away.
    Point { position: Vec3, intensity: f32 },
    /// Constant contribution regardless of geometry.
    Ambient { intensity: f32 },
}

impl Light {
    /// Scalar contribution at a surface point with the given face normal.
    ///
    /// `normal` need not be unit length; the cosine is normalized by both
    /// magnitudes. Point and `position` must be in the same space — the
    /// render loop moves lights into camera space before evaluation.
    pub fn contribution(&self, normal: Vec3, point: Vec3) -> f32 {
        match *self {
            Light::Point { position, intensity } => {
                let to_light = position - point;
                let n_dot_l = normal.dot(to_light);
                if n_dot_l > 0.0 {
                    intensity * n_dot_l / (normal.length() * to_light.length())
                } else {
                    0.0
                }
            }
            Light::Ambient { intensity } => intensity,
        }
    }

    /// The same light with its position mapped by `transform`.
    pub fn transformed(&self, transform: &Mat4) -> Light {
        match *self {
            Light::Point { position, intensity } => Light::Point {
                position: transform.transform_point3(position),
                intensity,
            },
            ambient @ Light::Ambient { .. } => ambient,
        }
    }
}

/// Accumulated intensity across all lights at one vertex.
///
/// A sum outside `[0, 1]` means the scene's lights are mis-specified; that
/// is a programming error surfaced in debug builds, never silently clamped.
pub fn accumulate_intensity(lights: &[Light], normal: Vec3, point: Vec3) -> f32 {
    let total: f32 = lights
        .iter()
        .map(|light| light.contribution(normal, point))
        .sum();
    debug_assert!(
        (0.0..=1.0).contains(&total),
        "accumulated light intensity {total} outside [0, 1]"
    );
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_light_ignores_geometry() {
        let light = Light::Ambient { intensity: 0.2 };
        let i = light.contribution(Vec3::new(3.0, 0.0, 0.0), Vec3::new(9.0, -4.0, 2.0));
        assert!((i - 0.2).abs() < 1e-6);
    }

    #[test]
    fn point_light_head_on_gives_full_intensity() {
        let light = Light::Point { position: Vec3::new(0.0, 10.0, 0.0), intensity: 0.8 };
        // Normal straight up, light straight above: cosine 1.
        let i = light.contribution(Vec3::Y * 2.0, Vec3::ZERO);
        assert!((i - 0.8).abs() < 1e-5);
    }

    #[test]
    fn point_light_is_zero_when_facing_away() {
        let light = Light::Point { position: Vec3::new(0.0, 10.0, 0.0), intensity: 0.8 };
        let i = light.contribution(Vec3::NEG_Y, Vec3::ZERO);
        assert_eq!(i, 0.0);
    }

    #[test]
    fn point_light_follows_the_cosine() {
        let light = Light::Point { position: Vec3::new(1.0, 1.0, 0.0), intensity: 1.0 };
        // 45 degrees between the normal and the light direction.
        let i = light.contribution(Vec3::Y, Vec3::ZERO);
        assert!((i - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn contributions_accumulate_additively() {
        let lights = [
            Light::Ambient { intensity: 0.2 },
            Light::Point { position: Vec3::new(0.0, 10.0, 0.0), intensity: 0.5 },
        ];
        let total = accumulate_intensity(&lights, Vec3::Y, Vec3::ZERO);
        assert!((total - 0.7).abs() < 1e-5);
    }
}
