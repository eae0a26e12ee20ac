//! softrast: offline software 3D rasterizer
//!
//! Renders a scene of transformed mesh instances, lights, and one camera into
//! a z-buffered framebuffer without any hardware graphics API:
//! - Scanline triangle filling with linear depth/intensity interpolation
//! - Near + frustum side-plane clipping with triangle re-triangulation
//! - Back-face culling in camera space
//! - Flat-color shading from point and ambient lights, sqrt gamma on write
//!
//! The finished framebuffer is exposed as packed RGBA bytes for an external
//! encoder; `Canvas::save_png` wraps the common case.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod camera;
pub mod geometry;
pub mod light;
pub mod rasterizer;
pub mod scene;

pub use camera::Camera;
pub use geometry::{Color, ImportedFace, ImportedModel, Instance, Mesh, Plane, Sphere, Triangle};
pub use light::Light;
pub use rasterizer::Canvas;
pub use scene::{render, RenderStats};
