//! Scene description consumed by the renderer.
//!
//! A [`Scene`] is built once (usually by the scene-file parser through
//! [`SceneBuilder`]) and is read-only afterwards, so it can be shared by
//! every pixel of a render without synchronization.

use std::sync::Arc;

use lumen_math::Vec3;

use crate::light::Light;
use crate::object::{SceneObject, Sphere};
use crate::surface::{Color, Surface};

/// Viewing parameters from the scene file.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSettings {
    pub eye: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    /// Horizontal field of view in degrees
    pub fov_degrees: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 10.0),
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: 30.0,
        }
    }
}

/// A fully constructed, immutable scene.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub lights: Vec<Light>,
    pub camera: CameraSettings,
    pub background: Color,
}

impl Scene {
    /// Start building a scene.
    pub fn builder() -> SceneBuilder {
        SceneBuilder::new()
    }

    /// Sum of all ambient light intensities.
    pub fn ambient_intensity(&self) -> Color {
        self.lights
            .iter()
            .filter(|light| light.is_ambient())
            .map(Light::color)
            .sum()
    }

    /// Lights that have a position or direction (everything but ambient).
    pub fn direct_lights(&self) -> impl Iterator<Item = &Light> {
        self.lights.iter().filter(|light| !light.is_ambient())
    }
}

/// Incremental scene construction.
///
/// Mirrors the scene-file model: spheres pick up whatever surface was set
/// most recently, and surfaces are shared between every sphere that uses
/// them.
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    objects: Vec<SceneObject>,
    lights: Vec<Light>,
    camera: CameraSettings,
    background: Color,
    current_surface: Arc<Surface>,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            camera: CameraSettings::default(),
            background: Color::ZERO,
            current_surface: Arc::new(Surface::default()),
        }
    }

    pub fn eye(mut self, eye: Vec3) -> Self {
        self.camera.eye = eye;
        self
    }

    pub fn look_at(mut self, look_at: Vec3) -> Self {
        self.camera.look_at = look_at;
        self
    }

    pub fn up(mut self, up: Vec3) -> Self {
        self.camera.up = up;
        self
    }

    pub fn fov(mut self, degrees: f32) -> Self {
        self.camera.fov_degrees = degrees;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the surface used by subsequently added spheres.
    pub fn surface(mut self, surface: Surface) -> Self {
        self.current_surface = Arc::new(surface);
        self
    }

    /// Add a sphere with the current surface.
    pub fn sphere(mut self, center: Vec3, radius: f32) -> Self {
        let sphere = Sphere::new(center, radius, Arc::clone(&self.current_surface));
        self.objects.push(sphere.into());
        self
    }

    /// Add an already constructed object.
    pub fn object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    pub fn light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    pub fn current_surface(&self) -> &Arc<Surface> {
        &self.current_surface
    }

    pub fn build(self) -> Scene {
        Scene {
            objects: self.objects,
            lights: self.lights,
            camera: self.camera,
            background: self.background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let scene = Scene::builder().build();
        assert_eq!(scene.camera.eye, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(scene.camera.look_at, Vec3::ZERO);
        assert_eq!(scene.camera.up, Vec3::Y);
        assert_eq!(scene.camera.fov_degrees, 30.0);
        assert_eq!(scene.background, Color::ZERO);
        assert!(scene.objects.is_empty());
    }

    #[test]
    fn test_spheres_share_current_surface() {
        let builder = Scene::builder()
            .surface(Surface::matte(Color::ONE))
            .sphere(Vec3::ZERO, 1.0)
            .sphere(Vec3::X, 0.5);
        let shared = Arc::clone(builder.current_surface());
        let scene = builder.surface(Surface::default()).sphere(Vec3::Y, 2.0).build();

        assert_eq!(scene.objects.len(), 3);
        assert!(std::ptr::eq(scene.objects[0].surface(), shared.as_ref()));
        assert!(std::ptr::eq(scene.objects[1].surface(), shared.as_ref()));
        assert!(!std::ptr::eq(scene.objects[2].surface(), shared.as_ref()));
    }

    #[test]
    fn test_ambient_intensity_sums_ambient_only() {
        let scene = Scene::builder()
            .light(Light::ambient(Color::splat(0.1)))
            .light(Light::point(Vec3::ONE, Color::ONE))
            .light(Light::ambient(Color::new(0.1, 0.2, 0.3)))
            .build();

        let ambient = scene.ambient_intensity();
        assert!((ambient - Color::new(0.2, 0.3, 0.4)).length() < 1e-6);
        assert_eq!(scene.direct_lights().count(), 1);
    }
}
