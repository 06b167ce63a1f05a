//! Ray tracing kernel: nearest-hit search and recursive shading.
//!
//! Colors are accumulated unclamped through the whole recursion; clamping
//! happens once when a pixel is written out.

use lumen_core::{HitRecord, Scene, SceneObject};
use lumen_math::{Interval, Ray, VectorExt};

use crate::{Color, RenderConfig};

/// Minimum hit distance and offset applied to secondary ray origins.
pub const EPSILON: f32 = 1e-3;

/// Find the closest object hit by `ray`.
///
/// Linear scan over `objects`. When two hits are at exactly the same
/// distance the earlier object in the list wins.
pub fn trace<'a>(ray: &Ray, objects: &'a [SceneObject]) -> Option<HitRecord<'a>> {
    let mut window = Interval::from_min(EPSILON);
    let mut closest = None;

    for object in objects {
        if let Some(rec) = object.intersect(ray, window) {
            window = window.with_max(rec.t);
            closest = Some(rec);
        }
    }

    closest
}

/// Whether anything blocks `ray` before `max_distance`.
pub fn occluded(ray: &Ray, objects: &[SceneObject], max_distance: f32) -> bool {
    let window = Interval::new(EPSILON, max_distance);
    objects
        .iter()
        .any(|object| object.intersect(ray, window).is_some())
}

/// Color arriving along `ray`: the shaded nearest hit, or the scene
/// background on a miss.
pub fn radiance(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    match trace(ray, &scene.objects) {
        Some(hit) => shade(ray, &hit, scene, depth, config),
        None => scene.background,
    }
}

/// Trace a primary ray and shade it, starting at depth 0.
pub fn trace_and_shade(ray: &Ray, scene: &Scene, config: &RenderConfig) -> Color {
    radiance(ray, scene, 0, config)
}

/// Shade a hit: ambient, per-light diffuse and specular with shadow rays,
/// then reflection and refraction while `depth < config.max_depth`.
pub fn shade(
    ray: &Ray,
    hit: &HitRecord<'_>,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
) -> Color {
    let surface = hit.surface;
    let normal = hit.facing_normal();
    let incident = ray.direction().normalize_or_zero();
    let view = -incident;
    // Secondary rays leaving on the ray's side of the surface start here
    let above = hit.point + EPSILON * normal;

    let mut color = surface.ambient(scene.ambient_intensity());

    for light in scene.direct_lights() {
        let Some(sample) = light.sample(hit.point) else {
            continue;
        };

        let lambert = normal.dot(sample.direction);
        if lambert <= 0.0 {
            continue;
        }

        let shadow_ray = Ray::new(above, sample.direction);
        if occluded(&shadow_ray, &scene.objects, sample.distance) {
            continue;
        }

        let intensity = light.color();
        color += surface.diffuse(lambert, intensity);

        let reflected_light = 2.0 * lambert * normal - sample.direction;
        color += surface.specular(reflected_light.dot(view), intensity);
    }

    if depth >= config.max_depth {
        return color;
    }

    if surface.is_reflective() {
        let reflected = Ray::new(above, incident.reflect_about(normal));
        color += surface.kr * radiance(&reflected, scene, depth + 1, config);
    }

    if surface.is_transmissive() {
        let eta = if hit.front_face {
            1.0 / surface.ior
        } else {
            surface.ior
        };
        // Total internal reflection transmits nothing
        if let Some(direction) = incident.refract_through(normal, eta) {
            let refracted = Ray::new(hit.point - EPSILON * normal, direction);
            color += surface.kt * radiance(&refracted, scene, depth + 1, config);
        }
    }

    color
}
