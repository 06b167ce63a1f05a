//! Scene geometry and ray intersection.

use std::sync::Arc;

use lumen_math::{Interval, Ray, Vec3};

use crate::surface::Surface;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit surface normal at the intersection
    pub normal: Vec3,
    /// Whether the ray hit the outside of the surface
    pub front_face: bool,
    /// Material at the intersection point
    pub surface: &'a Surface,
}

impl<'a> HitRecord<'a> {
    /// Build a record from an outward normal, working out which side the
    /// ray arrived from.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3, surface: &'a Surface) -> Self {
        Self {
            t,
            point: ray.at(t),
            normal: outward_normal,
            front_face: ray.direction().dot(outward_normal) < 0.0,
            surface,
        }
    }

    /// The normal flipped, if needed, to point against the incoming ray.
    #[inline]
    pub fn facing_normal(&self) -> Vec3 {
        if self.front_face {
            self.normal
        } else {
            -self.normal
        }
    }
}

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    surface: Arc<Surface>,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, surface: Arc<Surface>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            surface,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn surface(&self) -> &Arc<Surface> {
        &self.surface
    }

    /// Nearest intersection with `ray` whose parameter lies strictly inside
    /// `ray_t`.
    ///
    /// Solves `|O + tD - C|² = r²`. The near root is preferred; when it falls
    /// outside the window (e.g. the ray starts inside the sphere) the far
    /// root is tried.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 || a == 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        let outward_normal = if self.radius > 0.0 {
            (point - self.center) / self.radius
        } else {
            -ray.direction().normalize_or_zero()
        };

        Some(HitRecord::new(ray, root, outward_normal, &self.surface))
    }
}

/// Any geometry that can appear in a scene.
///
/// New shapes are added as variants with their own intersection routine.
#[derive(Debug, Clone)]
pub enum SceneObject {
    Sphere(Sphere),
}

impl SceneObject {
    /// Nearest intersection with `ray` inside `ray_t`, if any.
    #[inline]
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            SceneObject::Sphere(sphere) => sphere.intersect(ray, ray_t),
        }
    }

    /// Material used to shade this object.
    pub fn surface(&self) -> &Surface {
        match self {
            SceneObject::Sphere(sphere) => &sphere.surface,
        }
    }
}

impl From<Sphere> for SceneObject {
    fn from(sphere: Sphere) -> Self {
        SceneObject::Sphere(sphere)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::new(center, 1.0, Arc::new(Surface::default()))
    }

    fn window() -> Interval {
        Interval::from_min(EPS)
    }

    #[test]
    fn test_hit_from_outside() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let rec = sphere.intersect(&ray, window()).unwrap();
        // originToCenterDistance - radius
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert!(rec.front_face);
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
        assert!((rec.point - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-5);
    }

    #[test]
    fn test_miss_when_aimed_away() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(sphere.intersect(&ray, window()).is_none());
    }

    #[test]
    fn test_miss_outside_silhouette() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::new(0.0, 1.5, 0.0), Vec3::NEG_Z);
        assert!(sphere.intersect(&ray, window()).is_none());
    }

    #[test]
    fn test_hit_from_inside_returns_exit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -0.5), 2.0, Arc::new(Surface::default()));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let rec = sphere.intersect(&ray, window()).unwrap();
        // originToCenterDistance + radius
        assert!((rec.t - 2.5).abs() < 1e-5);
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3::NEG_Z).length() < 1e-5);
        assert!((rec.facing_normal() - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_unnormalized_direction_scales_t() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));
        let rec = sphere.intersect(&ray, window()).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-5);
        assert!((rec.point.z + 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_hit_below_epsilon_rejected() {
        // Ray starting on the surface and leaving it must not hit itself
        let sphere = unit_sphere_at(Vec3::ZERO);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::Z);
        assert!(sphere.intersect(&ray, window()).is_none());
    }

    #[test]
    fn test_window_max_excludes_far_hits() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(sphere.intersect(&ray, Interval::new(EPS, 3.0)).is_none());
    }

    #[test]
    fn test_negative_radius_clamped() {
        let sphere = Sphere::new(Vec3::ZERO, -2.0, Arc::new(Surface::default()));
        assert_eq!(sphere.radius(), 0.0);
    }

    #[test]
    fn test_scene_object_dispatch() {
        let surface = Arc::new(Surface::matte(Vec3::ONE));
        let object: SceneObject = Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, surface.clone()).into();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let rec = object.intersect(&ray, window()).unwrap();
        assert!(std::ptr::eq(rec.surface, surface.as_ref()));
        assert_eq!(object.surface(), surface.as_ref());
    }
}
