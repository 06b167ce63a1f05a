//! Camera basis for primary ray generation.

use lumen_core::CameraSettings;
use lumen_math::{Ray, Vec3, VectorExt};

use crate::{RenderError, RenderResult};

/// Maps pixel coordinates to primary rays.
///
/// Pixel `(i, j)` looks along `i·du + j·dv + vp`, with `j` growing
/// downward. `vp` points from the eye at the top-left corner of an image
/// plane placed one focal length away, in pixel units.
#[derive(Debug, Clone)]
pub struct Camera {
    eye: Vec3,
    du: Vec3,
    dv: Vec3,
    vp: Vec3,
    pub image_width: u32,
    pub image_height: u32,
}

impl Camera {
    /// Build the viewing basis for an image of `width` x `height` pixels.
    ///
    /// Fails when the view direction is zero or parallel to `up`, or when
    /// the field of view is outside (0, 180) degrees.
    pub fn new(settings: &CameraSettings, width: u32, height: u32) -> RenderResult<Self> {
        let fov = settings.fov_degrees;
        if !(fov > 0.0 && fov < 180.0) {
            return Err(RenderError::FieldOfView(fov));
        }

        let look = settings.look_at - settings.eye;
        let du = look.cross(settings.up).checked_normalize()?;
        let dv = look.cross(du).checked_normalize()?;

        let w = width as f32;
        let h = height as f32;
        let focal_length = w / (2.0 * (0.5 * fov).to_radians().tan());
        let vp = look.checked_normalize()? * focal_length - 0.5 * (w * du + h * dv);

        Ok(Self {
            eye: settings.eye,
            du,
            dv,
            vp,
            image_width: width,
            image_height: height,
        })
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Unnormalized view direction through pixel `(i, j)`.
    #[inline]
    pub fn direction(&self, i: f32, j: f32) -> Vec3 {
        i * self.du + j * self.dv + self.vp
    }

    /// Primary ray through pixel `(i, j)` with a unit direction.
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        // vp always has a positive component along the view axis, which du
        // and dv cannot cancel, so the direction is never zero.
        let direction = self.direction(i as f32, j as f32).normalize();
        Ray::new(self.eye, direction)
    }
}
