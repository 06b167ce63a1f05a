//! Whole-image rendering and output.
//!
//! One primary ray per pixel. Rows are independent, so by default they are
//! rendered in parallel with rayon; the scene is only ever read.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use lumen_core::Scene;
use lumen_math::Interval;
use rayon::prelude::*;

use crate::{trace_and_shade, Camera, Color, RenderError, RenderResult};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum reflection/refraction recursion depth
    pub max_depth: u32,
    /// Render rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            max_depth: 5,
            parallel: true,
        }
    }
}

/// Compute the color of a single pixel.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let ray = camera.primary_ray(x, y);
    trace_and_shade(&ray, scene, config)
}

/// Convert a linear color to 8-bit RGB, clamping each channel to [0, 1].
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let channel = |c: f32| (255.0 * Interval::UNIT.clamp(c) + 0.5) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Unclamped color buffer for a rendered image.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to clamped RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| color_to_rgb(*c)).collect()
    }

    /// Write the image as a plain-text (P3) PPM.
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> RenderResult<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for color in &self.pixels {
            let [r, g, b] = color_to_rgb(*color);
            writeln!(writer, "{} {} {}", r, g, b)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Save the image, choosing the format from the file extension.
    ///
    /// `.ppm` is written as plain-text PPM; everything else is encoded by
    /// the `image` crate.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        let is_ppm = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

        if is_ppm {
            self.write_ppm(BufWriter::new(File::create(path)?))?;
        } else {
            let image = image::RgbImage::from_raw(self.width, self.height, self.to_rgb8()).ok_or(
                RenderError::BufferSize {
                    width: self.width,
                    height: self.height,
                },
            )?;
            image.save(path)?;
        }

        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Render the entire scene to an image buffer.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    let camera = Camera::new(&scene.camera, config.width, config.height)?;
    let mut image = ImageBuffer::new(config.width, config.height);
    if image.pixels.is_empty() {
        log::warn!("Nothing to render for a {}x{} image", config.width, config.height);
        return Ok(image);
    }

    log::info!(
        "Rendering {}x{} ({} objects, {} lights, max depth {})",
        config.width,
        config.height,
        scene.objects.len(),
        scene.lights.len(),
        config.max_depth
    );
    let start = Instant::now();

    let render_row = |(y, row): (usize, &mut [Color])| {
        log::trace!("Scanline {}", y);
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = render_pixel(&camera, scene, x as u32, y as u32, config);
        }
    };

    let width = config.width as usize;
    if config.parallel {
        image.pixels.par_chunks_mut(width).enumerate().for_each(render_row);
    } else {
        image.pixels.chunks_mut(width).enumerate().for_each(render_row);
    }

    log::info!("Rendered {}x{} in {:?}", config.width, config.height, start.elapsed());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{Light, Surface};
    use lumen_math::Vec3;

    fn small_config(parallel: bool) -> RenderConfig {
        RenderConfig {
            width: 16,
            height: 12,
            max_depth: 3,
            parallel,
        }
    }

    fn test_scene() -> Scene {
        Scene::builder()
            .eye(Vec3::new(0.0, 0.0, 5.0))
            .fov(60.0)
            .background(Color::new(0.0, 0.0, 1.0))
            .surface(Surface::matte(Color::ONE).with_reflectivity(0.3))
            .sphere(Vec3::ZERO, 1.0)
            .sphere(Vec3::new(1.5, 0.0, -1.0), 0.5)
            .light(Light::ambient(Color::splat(0.1)))
            .light(Light::point(Vec3::new(3.0, 3.0, 5.0), Color::ONE))
            .build()
    }

    #[test]
    fn test_color_to_rgb_clamps() {
        assert_eq!(color_to_rgb(Color::new(-1.0, 0.5, 7.0)), [0, 128, 255]);
        assert_eq!(color_to_rgb(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
    }

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(4, 3);
        image.set(3, 2, Color::X);
        assert_eq!(image.get(3, 2), Color::X);
        assert_eq!(image.pixels[11], Color::X);
        assert_eq!(image.to_rgb8().len(), 4 * 3 * 3);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scene = test_scene();
        let parallel = render(&scene, &small_config(true)).unwrap();
        let sequential = render(&scene, &small_config(false)).unwrap();
        assert_eq!(parallel.pixels, sequential.pixels);
    }

    #[test]
    fn test_render_center_hits_and_corner_misses() {
        let scene = test_scene();
        let image = render(&scene, &small_config(true)).unwrap();
        assert_ne!(image.get(8, 6), scene.background);
        assert_eq!(image.get(0, 0), scene.background);
    }

    #[test]
    fn test_empty_image() {
        let config = RenderConfig {
            width: 0,
            ..small_config(true)
        };
        let image = render(&test_scene(), &config).unwrap();
        assert!(image.pixels.is_empty());
    }

    #[test]
    fn test_write_ppm() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));
        image.set(1, 0, Color::new(0.0, 2.0, -1.0));

        let mut out = Vec::new();
        image.write_ppm(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 0 0\n0 255 0\n");
    }

    #[test]
    fn test_save_png_and_ppm() {
        let dir = tempfile::tempdir().unwrap();
        let image = render(&test_scene(), &small_config(true)).unwrap();

        let png = dir.path().join("out.png");
        image.save(&png).unwrap();
        let decoded = image::open(&png).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (16, 12));
        assert_eq!(decoded.get_pixel(0, 0).0, color_to_rgb(image.get(0, 0)));

        let ppm = dir.path().join("out.PPM");
        image.save(&ppm).unwrap();
        let text = std::fs::read_to_string(&ppm).unwrap();
        assert!(text.starts_with("P3\n16 12\n255\n"));
    }

    #[test]
    fn test_degenerate_camera_is_an_error() {
        let scene = Scene::builder().eye(Vec3::ZERO).look_at(Vec3::ZERO).build();
        assert!(matches!(
            render(&scene, &small_config(false)),
            Err(RenderError::Camera(_))
        ));
    }
}
