//! Demo renderer: a procedural scene (or a RON scene file given as the first
//! argument) rendered offline and written out as a PNG.

use std::collections::HashMap;
use std::time::Instant;

use glam::Vec3;
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use softrast::rasterizer::{Canvas, HEIGHT, WIDTH};
use softrast::scene::{
    self, camera_space_lights, cube, load_scene, uv_sphere, CameraConfig, InstanceConfig,
    RenderStats, SceneFile,
};
use softrast::{Color, Light, Mesh};

/// Fixed seed so the demo render is reproducible run to run.
const DEMO_SEED: u64 = 0x5EED_CAFE;

fn mesh_registry() -> HashMap<String, Mesh> {
    let face_colors = [
        Color::new(0.8, 0.2, 0.2),
        Color::new(0.2, 0.8, 0.2),
        Color::new(0.2, 0.2, 0.8),
        Color::new(0.8, 0.8, 0.2),
        Color::new(0.8, 0.2, 0.8),
        Color::new(0.2, 0.8, 0.8),
    ];

    let mut meshes = HashMap::new();
    meshes.insert("cube".to_string(), Mesh::from_imported(&cube(1.0, face_colors)));
    meshes.insert(
        "sphere".to_string(),
        Mesh::from_imported(&uv_sphere(1.0, 12, 18, Color::new(0.9, 0.45, 0.3))),
    );
    meshes
}

/// A grid of alternating spheres and cubes with randomized scale and
/// rotation, taking an injected generator so renders reproduce exactly.
fn demo_scene(rng: &mut StdRng) -> SceneFile {
    let mut instances = Vec::new();
    for i in 0..10 {
        let (mesh, scale) = if i % 2 == 1 {
            ("cube", rng.gen_range(0.5..3.5))
        } else {
            ("sphere", 3.0)
        };

        let mut rotation_deg = [0.0f32; 3];
        for _ in 0..rng.gen_range(0..3) {
            rotation_deg[rng.gen_range(0..3)] = rng.gen_range(-90.0..90.0);
        }

        instances.push(InstanceConfig {
            mesh: mesh.to_string(),
            scale,
            rotation_deg,
            position: Vec3::new(
                -15.0 + 6.0 * (i % 5) as f32,
                -3.0 + 6.0 * (i % 2) as f32,
                -10.0,
            ),
        });
    }

    SceneFile {
        camera: CameraConfig {
            position: Vec3::new(3.0, 1.0, 5.0),
            look_at: Vec3::new(0.0, 0.0, -5.0),
            up: Vec3::Y,
            vertical_fov_deg: 60.0,
        },
        background: Color::new(0.2, 0.5, 0.7),
        instances,
        lights: vec![
            Light::Point { position: Vec3::new(10.0, 20.0, 50.0), intensity: 0.8 },
            Light::Ambient { intensity: 0.2 },
        ],
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let scene_path = args.next();
    let output = args.next().unwrap_or_else(|| "render.png".to_string());

    let scene = match &scene_path {
        Some(path) => match load_scene(path) {
            Ok(scene) => scene,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => demo_scene(&mut StdRng::seed_from_u64(DEMO_SEED)),
    };

    let meshes = mesh_registry();
    let instances = scene.resolve(&meshes);

    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    let camera = scene.camera.build(WIDTH, HEIGHT);
    let lights = camera_space_lights(&scene.lights, &camera);

    println!("rendering {} instances at {}x{}", instances.len(), WIDTH, HEIGHT);
    let start = Instant::now();

    canvas.fill(scene.background);
    let progress = ProgressBar::new(instances.len() as u64);
    let mut stats = RenderStats::default();
    for instance in &instances {
        scene::render_instance(&mut canvas, &camera, instance, &lights, &mut stats);
        progress.inc(1);
    }
    progress.finish_and_clear();

    println!(
        "rendered {} instances ({} discarded), {} triangles ({} culled) in {} ms",
        stats.instances_drawn,
        stats.instances_discarded,
        stats.triangles_drawn,
        stats.triangles_culled,
        start.elapsed().as_millis()
    );

    if let Err(e) = canvas.save_png(&output) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    println!("wrote {output}");
}
