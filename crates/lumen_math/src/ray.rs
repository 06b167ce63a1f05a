use crate::{MathResult, Vec3, VectorExt};

/// A ray in 3D space with an origin and a direction.
///
/// Rays are used for raytracing - they represent a half-line starting at
/// `origin` and traveling along `direction`. Tracing code expects the
/// direction to be unit length so that hit parameters are distances; use
/// [`Ray::toward`] to get that guarantee.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray, keeping the direction as given.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray with a normalized direction.
    ///
    /// Fails when `direction` has zero length.
    pub fn toward(origin: Vec3, direction: Vec3) -> MathResult<Self> {
        Ok(Self::new(origin, direction.checked_normalize()?))
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
