//! Vector helpers layered on top of `glam::Vec3`.

use crate::Vec3;
use thiserror::Error;

/// Errors raised by vector operations that have no meaningful result.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("cannot normalize a zero-length or non-finite vector")]
    DegenerateVector,
}

/// Result type for math operations.
pub type MathResult<T> = Result<T, MathError>;

/// Ray tracing operations on 3-component vectors.
///
/// All methods are pure and return new values.
pub trait VectorExt: Sized {
    /// Scale to unit length, failing on zero-length input instead of
    /// producing NaNs.
    fn checked_normalize(self) -> MathResult<Self>;

    /// Mirror `self` about the unit normal `n`: `v - 2(v·n)n`.
    fn reflect_about(self, n: Self) -> Self;

    /// Bend the unit direction `self` through a boundary with facing unit
    /// normal `n` and index ratio `eta` (incident over transmitted).
    ///
    /// Returns `None` on total internal reflection.
    fn refract_through(self, n: Self, eta: f32) -> Option<Self>;
}

impl VectorExt for Vec3 {
    #[inline]
    fn checked_normalize(self) -> MathResult<Self> {
        self.try_normalize().ok_or(MathError::DegenerateVector)
    }

    #[inline]
    fn reflect_about(self, n: Self) -> Self {
        self - 2.0 * self.dot(n) * n
    }

    fn refract_through(self, n: Self, eta: f32) -> Option<Self> {
        let cos_i = (-self).dot(n).min(1.0);
        let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
        if k < 0.0 {
            return None;
        }
        Some(eta * self + (eta * cos_i - k.sqrt()) * n)
    }
}
