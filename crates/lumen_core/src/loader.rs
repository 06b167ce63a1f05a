//! High-level scene loading.

use std::path::Path;

use thiserror::Error;

use crate::parser::{parse_scene, ParseError};
use crate::scene::Scene;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene file from disk.
///
/// # Example
///
/// ```ignore
/// use lumen_core::load_scene;
///
/// let scene = load_scene("scenes/spheres.txt")?;
/// println!("Loaded {} objects", scene.objects.len());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let scene = parse_scene(&content)?;

    log::info!(
        "Loaded scene {}: {} objects, {} lights",
        path.display(),
        scene.objects.len(),
        scene.lights.len()
    );
    log::debug!(
        "Camera eye {:?} look_at {:?} up {:?} fov {}",
        scene.camera.eye,
        scene.camera.look_at,
        scene.camera.up,
        scene.camera.fov_degrees
    );

    Ok(scene)
}
