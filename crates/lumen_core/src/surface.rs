//! Surface reflectance model.

use lumen_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Material description used by the Phong + Whitted shading model.
///
/// Coefficients are not validated: out-of-range values simply produce
/// out-of-range colors. A surface is shared between objects via `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// Base color
    pub color: Color,
    /// Ambient coefficient
    pub ka: f32,
    /// Diffuse coefficient
    pub kd: f32,
    /// Specular coefficient
    pub ks: f32,
    /// Phong exponent
    pub ns: f32,
    /// Reflectivity
    pub kr: f32,
    /// Transmissivity
    pub kt: f32,
    /// Index of refraction
    pub ior: f32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            color: Color::new(0.8, 0.2, 0.9),
            ka: 0.2,
            kd: 0.4,
            ks: 0.4,
            ns: 10.0,
            kr: 0.0,
            kt: 0.0,
            ior: 1.0,
        }
    }
}

impl Surface {
    /// Create a surface from a color and all seven coefficients.
    #[allow(clippy::too_many_arguments)]
    pub fn new(color: Color, ka: f32, kd: f32, ks: f32, ns: f32, kr: f32, kt: f32, ior: f32) -> Self {
        Self {
            color,
            ka,
            kd,
            ks,
            ns,
            kr,
            kt,
            ior,
        }
    }

    /// A purely diffuse surface with the given color.
    pub fn matte(color: Color) -> Self {
        Self::new(color, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0)
    }

    /// Builder-style ambient coefficient.
    pub fn with_ambient(mut self, ka: f32) -> Self {
        self.ka = ka;
        self
    }

    /// Builder-style specular coefficient and exponent.
    pub fn with_specular(mut self, ks: f32, ns: f32) -> Self {
        self.ks = ks;
        self.ns = ns;
        self
    }

    /// Builder-style reflectivity.
    pub fn with_reflectivity(mut self, kr: f32) -> Self {
        self.kr = kr;
        self
    }

    /// Builder-style transmissivity and index of refraction.
    pub fn with_transmission(mut self, kt: f32, ior: f32) -> Self {
        self.kt = kt;
        self.ior = ior;
        self
    }

    #[inline]
    pub fn is_reflective(&self) -> bool {
        self.kr > 0.0
    }

    #[inline]
    pub fn is_transmissive(&self) -> bool {
        self.kt > 0.0
    }

    /// Ambient term: `color * ka * intensity`.
    #[inline]
    pub fn ambient(&self, intensity: Color) -> Color {
        self.color * self.ka * intensity
    }

    /// Lambert term for a light of the given intensity.
    ///
    /// `lambert` is `N·L`; back-facing light contributes nothing.
    #[inline]
    pub fn diffuse(&self, lambert: f32, intensity: Color) -> Color {
        if lambert <= 0.0 {
            return Color::ZERO;
        }
        self.kd * lambert * intensity * self.color
    }

    /// Phong highlight `ks * (R·V)^ns * intensity`. Not tinted by the base color.
    #[inline]
    pub fn specular(&self, r_dot_v: f32, intensity: Color) -> Color {
        if r_dot_v <= 0.0 {
            return Color::ZERO;
        }
        self.ks * r_dot_v.powf(self.ns) * intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_surface() {
        let s = Surface::default();
        assert_eq!(s.color, Color::new(0.8, 0.2, 0.9));
        assert_eq!(s.ns, 10.0);
        assert!(!s.is_reflective());
        assert!(!s.is_transmissive());
        assert_eq!(s.ior, 1.0);
    }

    #[test]
    fn test_ambient_term() {
        let s = Surface::matte(Color::new(1.0, 0.5, 0.0)).with_ambient(0.5);
        let a = s.ambient(Color::splat(0.4));
        assert_eq!(a, Color::new(0.2, 0.1, 0.0));
    }

    #[test]
    fn test_diffuse_ignores_back_facing_light() {
        let s = Surface::matte(Color::ONE);
        assert_eq!(s.diffuse(-0.3, Color::ONE), Color::ZERO);
        assert_eq!(s.diffuse(0.5, Color::splat(2.0)), Color::splat(1.0));
    }

    #[test]
    fn test_specular_not_tinted() {
        let s = Surface::matte(Color::new(1.0, 0.0, 0.0)).with_specular(0.5, 2.0);
        let h = s.specular(0.5, Color::ONE);
        assert!((h - Color::splat(0.125)).length() < 1e-6);
        assert_eq!(s.specular(0.0, Color::ONE), Color::ZERO);
    }

    #[test]
    fn test_negative_coefficients_accepted() {
        let s = Surface::new(Color::ONE, -1.0, -0.5, 0.0, 0.0, 0.0, 0.0, 1.0);
        assert_eq!(s.ambient(Color::ONE), Color::splat(-1.0));
    }
}
