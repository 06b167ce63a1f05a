//! Renders a red sphere between two mirrors and a glass ball.
//!
//! Run with: cargo run -p lumen_renderer --example mirror_corridor

use lumen_renderer::{render, Color, Light, RenderConfig, Scene, Surface, Vec3};

fn main() {
    env_logger::init();

    let mirror = Surface::new(Color::splat(0.9), 0.05, 0.1, 0.3, 40.0, 0.85, 0.0, 1.0);
    let red = Surface::new(Color::new(0.9, 0.1, 0.1), 0.2, 0.7, 0.5, 30.0, 0.0, 0.0, 1.0);
    let glass = Surface::new(Color::ONE, 0.0, 0.05, 0.6, 80.0, 0.1, 0.85, 1.5);

    let scene = Scene::builder()
        .eye(Vec3::new(0.0, 1.0, 8.0))
        .look_at(Vec3::ZERO)
        .fov(50.0)
        .background(Color::new(0.02, 0.02, 0.05))
        .surface(mirror)
        .sphere(Vec3::new(1003.0, 0.0, 0.0), 1000.0)
        .sphere(Vec3::new(-1003.0, 0.0, 0.0), 1000.0)
        .surface(red)
        .sphere(Vec3::new(0.0, 0.0, -2.0), 1.0)
        .surface(glass)
        .sphere(Vec3::new(0.8, -0.3, 1.5), 0.7)
        .light(Light::ambient(Color::splat(0.1)))
        .light(Light::point(Vec3::new(0.0, 5.0, 5.0), Color::ONE))
        .build();

    let config = RenderConfig {
        max_depth: 8,
        ..RenderConfig::default()
    };

    match render(&scene, &config).and_then(|image| image.save("mirror_corridor.png")) {
        Ok(()) => println!("Saved to mirror_corridor.png"),
        Err(e) => eprintln!("Render failed: {}", e),
    }
}
