//! Lumen Core - scene description for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Materials and lights**: `Surface`, `Light`
//! - **Geometry**: `Sphere` and the closed `SceneObject` variant with ray
//!   intersection
//! - **Scene**: the immutable `Scene` value handed to every trace, plus
//!   `SceneBuilder`
//! - **Scene files**: parsing and loading of the text scene format
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scenes/spheres.txt")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.objects.len(),
//!     scene.lights.len());
//! ```

pub mod light;
pub mod loader;
pub mod object;
pub mod parser;
pub mod scene;
pub mod surface;

// Re-export commonly used types
pub use light::{Light, LightSample};
pub use loader::{load_scene, LoadError, LoadResult};
pub use object::{HitRecord, SceneObject, Sphere};
pub use parser::{parse_scene, ParseError, ParseResult};
pub use scene::{CameraSettings, Scene, SceneBuilder};
pub use surface::{Color, Surface};

pub use lumen_math::{Interval, MathError, Ray, Vec3};
