//! RON scene description loaded through serde.

use std::collections::HashMap;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::geometry::{Color, Instance, Mesh};
use crate::light::Light;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    pub vertical_fov_deg: f32,
}

impl CameraConfig {
    pub fn build(&self, canvas_width: usize, canvas_height: usize) -> Camera {
        Camera::new(
            self.position,
            self.look_at,
            self.up,
            self.vertical_fov_deg,
            canvas_width,
            canvas_height,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceConfig {
    /// Name of a mesh in the registry handed to [`SceneFile::resolve`].
    pub mesh: String,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub rotation_deg: [f32; 3],
    pub position: Vec3,
}

fn default_scale() -> f32 {
    1.0
}

/// A whole scene as stored on disk: camera, background, placed instances,
/// and lights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub camera: CameraConfig,
    pub background: Color,
    pub instances: Vec<InstanceConfig>,
    pub lights: Vec<Light>,
}

impl SceneFile {
    /// Resolve instance mesh names against a registry.
    ///
    /// Instances naming a mesh the registry does not have are skipped with a
    /// diagnostic, the same degrade-and-continue policy as a failed import.
    pub fn resolve<'a>(&self, meshes: &'a HashMap<String, Mesh>) -> Vec<Instance<'a>> {
        let mut instances = Vec::with_capacity(self.instances.len());
        for config in &self.instances {
            let Some(mesh) = meshes.get(&config.mesh) else {
                eprintln!("scene references unknown mesh {:?}, skipping instance", config.mesh);
                continue;
            };
            instances.push(Instance {
                mesh,
                scale: config.scale,
                rotation_deg: config.rotation_deg,
                position: config.position,
            });
        }
        instances
    }
}

/// Load a RON scene description from disk.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<SceneFile, String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    ron::from_str(&text).map_err(|e| format!("failed to parse {}: {}", path.display(), e))
}
