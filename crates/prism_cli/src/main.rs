use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use prism_core::SceneDescription;
use prism_renderer::{render, render_parallel, ImageBuffer, RenderConfig};

#[derive(Parser, Debug)]
#[command(name = "prism", about = "Render a scene description with the Prism ray tracer")]
struct Args {
    /// Scene description in JSON
    scene: PathBuf,

    #[arg(short, long, default_value = "out.png")]
    /// Output PNG path
    output: PathBuf,

    #[arg(short, long, default_value_t = 1)]
    /// Divide the scene resolution by this factor
    reduce_by: u32,

    #[arg(long, default_value_t = RenderConfig::default().max_depth)]
    /// Maximum reflection/transparency recursion depth
    depth: u32,

    #[arg(long)]
    /// Render buckets on all cores instead of the calling thread
    parallel: bool,

    #[arg(long, default_value_t = RenderConfig::default().bucket_size)]
    /// Bucket edge length in pixels for --parallel
    bucket_size: u32,
}

fn save_png(image: &ImageBuffer, path: &Path) -> Result<()> {
    let rgba = image::RgbaImage::from_raw(image.width, image.height, image.to_rgba_bytes())
        .context("Pixel buffer does not match image dimensions")?;
    rgba.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    log::debug!("{:?}", args);

    let scene = SceneDescription::load(&args.scene)
        .and_then(|description| description.assemble())
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    let config = RenderConfig {
        max_depth: args.depth,
        bucket_size: args.bucket_size,
        ..RenderConfig::default()
    };

    let image = if args.parallel {
        render_parallel(&scene, args.reduce_by, &config)?
    } else {
        render(&scene, args.reduce_by, &config)?
    };

    save_png(&image, &args.output)
}
