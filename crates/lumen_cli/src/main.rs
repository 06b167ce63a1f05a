//! `lumen` - render a scene file to an image.
//!
//! ```text
//! lumen scenes/spheres.txt -o spheres.png --width 800 --height 600
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lumen_core::load_scene;
use lumen_renderer::{render, RenderConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "lumen", version, about = "Recursive ray tracer for sphere scenes")]
struct Cli {
    /// Scene file to render
    scene: PathBuf,

    /// Output image (.ppm is written as plain PPM, other extensions via the image crate)
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Maximum reflection/refraction depth
    #[arg(long, default_value_t = 5)]
    max_depth: u32,

    /// Render on the current thread only
    #[arg(long)]
    single_threaded: bool,

    /// Set logging level (overrides RUST_LOG)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            max_depth: self.max_depth,
            parallel: !self.single_threaded,
        }
    }
}

fn init_logging(level: Option<LogLevel>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level.into());
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let scene = load_scene(&cli.scene)
        .with_context(|| format!("failed to load scene {}", cli.scene.display()))?;

    let config = cli.render_config();
    let image = render(&scene, &config).context("failed to render scene")?;

    image
        .save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(())
}
