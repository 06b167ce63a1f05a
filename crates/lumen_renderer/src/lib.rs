//! Lumen Renderer - recursive ray tracing.
//!
//! One ray per pixel; each hit is shaded with ambient, Lambert and Phong
//! terms for every visible light, plus recursive reflection and refraction
//! bounded by [`RenderConfig::max_depth`].

mod camera;
mod error;
mod renderer;
mod trace;

pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use renderer::{color_to_rgb, render, render_pixel, ImageBuffer, RenderConfig};
pub use trace::{occluded, radiance, shade, trace, trace_and_shade, EPSILON};

/// Re-export the scene types the renderer consumes
pub use lumen_core::{Color, HitRecord, Light, Scene, SceneObject, Sphere, Surface};
pub use lumen_math::{Ray, Vec3};
