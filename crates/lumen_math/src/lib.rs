//! Lumen math - vector algebra shared by the scene and renderer crates.
//!
//! `Vec3` comes straight from `glam` (add, subtract, scalar multiply, dot,
//! cross and length are its operators and methods). The helpers in
//! [`VectorExt`] add the pieces a ray tracer needs on top: a normalize that
//! refuses zero-length input, mirror reflection and Snell refraction.

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{MathError, MathResult, VectorExt};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_operations_do_not_mutate_operands() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let _ = a + b;
        let _ = a.cross(b);
        assert_eq!(a, Vec3::X);
        assert_eq!(b, Vec3::Y);
    }
}
