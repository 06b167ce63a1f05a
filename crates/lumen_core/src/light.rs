//! Light sources.

use lumen_math::{MathResult, Vec3, VectorExt};

use crate::surface::Color;

/// A light contributing to surface illumination.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    /// Uniform light reaching every point; feeds the ambient term only.
    Ambient { color: Color },
    /// Light arriving from infinitely far away.
    ///
    /// `direction` is the unit vector the light travels along.
    Directional { direction: Vec3, color: Color },
    /// Light radiating from a position in the scene.
    Point { position: Vec3, color: Color },
}

/// Where a light is, as seen from a surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSample {
    /// Unit vector from the surface point toward the light
    pub direction: Vec3,
    /// Distance to the light (`f32::INFINITY` for directional lights)
    pub distance: f32,
}

impl Light {
    pub fn ambient(color: Color) -> Self {
        Light::Ambient { color }
    }

    /// Directional light travelling along `direction`.
    ///
    /// Fails when `direction` has zero length.
    pub fn directional(direction: Vec3, color: Color) -> MathResult<Self> {
        Ok(Light::Directional {
            direction: direction.checked_normalize()?,
            color,
        })
    }

    pub fn point(position: Vec3, color: Color) -> Self {
        Light::Point { position, color }
    }

    /// RGB intensity of this light.
    pub fn color(&self) -> Color {
        match self {
            Light::Ambient { color }
            | Light::Directional { color, .. }
            | Light::Point { color, .. } => *color,
        }
    }

    pub fn is_ambient(&self) -> bool {
        matches!(self, Light::Ambient { .. })
    }

    /// Direction and distance from `point` to this light.
    ///
    /// Ambient lights have no direction and return `None`, as does a point
    /// light sitting exactly on `point`.
    pub fn sample(&self, point: Vec3) -> Option<LightSample> {
        match self {
            Light::Ambient { .. } => None,
            Light::Directional { direction, .. } => Some(LightSample {
                direction: -*direction,
                distance: f32::INFINITY,
            }),
            Light::Point { position, .. } => {
                let to_light = *position - point;
                let direction = to_light.checked_normalize().ok()?;
                Some(LightSample {
                    direction,
                    distance: to_light.length(),
                })
            }
        }
    }
}
