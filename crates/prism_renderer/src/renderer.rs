//! Whole-image rendering.
//!
//! Maps each output pixel to a camera ray, traces it, and stores the colour
//! in a row-major [`ImageBuffer`].

use std::time::Instant;

use bytemuck::{Pod, Zeroable};
use prism_core::{Color, Scene};
use prism_math::Interval;

use crate::error::{RenderError, RenderResult};
use crate::tracer::Tracer;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum reflection/transparency recursion depth
    pub max_depth: u32,
    /// Color for rays that hit nothing
    pub background: Color,
    /// Bucket edge length in pixels for parallel rendering
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 100,
            background: Color::BLACK,
            bucket_size: 64,
        }
    }
}

/// Output resolution for `scene` divided by `reduce_by`, floored.
///
/// Fails when `reduce_by` is zero or shrinks either dimension to zero.
pub fn output_size(scene: &Scene, reduce_by: u32) -> RenderResult<(u32, u32)> {
    let (width, height) = scene.resolution();
    let invalid = RenderError::InvalidReduction {
        reduce_by,
        width,
        height,
    };

    if reduce_by == 0 {
        return Err(invalid);
    }

    let size = (width / reduce_by, height / reduce_by);
    if size.0 == 0 || size.1 == 0 {
        return Err(invalid);
    }
    Ok(size)
}

/// Trace the primary ray through pixel `(x, y)` of a `width × height` canvas.
///
/// Canvas coordinates put the origin at the image centre with `y` up. The
/// primary range starts at the viewport distance so nothing between the eye
/// and the viewport plane is drawn.
pub fn render_pixel(tracer: &Tracer, x: u32, y: u32, width: u32, height: u32, config: &RenderConfig) -> Color {
    let camera = tracer.scene().camera();
    let cx = x as f64 - width as f64 / 2.0;
    let cy = height as f64 / 2.0 - y as f64;

    let direction = camera.canvas_to_viewport(cx, cy, width, height);
    let range = Interval::from_min(camera.viewport.distance);
    tracer.trace_ray(camera.position, direction, range, config.max_depth)
}

/// Row-major buffer of rendered colours.
#[derive(Debug, Clone, PartialEq)]
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
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
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

    /// Pixels as opaque 8-bit RGBA.
    pub fn to_rgba8(&self) -> Vec<Rgba8> {
        self.pixels.iter().map(|c| Rgba8::from(*c)).collect()
    }

    /// Pixels as a flat `[r, g, b, a, r, g, b, a, ...]` byte vector.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.to_rgba8()).to_vec()
    }
}

/// One 8-bit RGBA pixel, laid out for direct byte casting.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color> for Rgba8 {
    fn from(color: Color) -> Self {
        let [r, g, b] = color.to_rgb8();
        Self { r, g, b, a: 255 }
    }
}

/// Render the entire scene on the calling thread.
pub fn render(scene: &Scene, reduce_by: u32, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    let (width, height) = output_size(scene, reduce_by)?;
    log::info!("Rendering {}x{} (reduce by {}, depth {})", width, height, reduce_by, config.max_depth);

    let start = Instant::now();
    let tracer = Tracer::new(scene).with_background(config.background);
    let mut image = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let color = render_pixel(&tracer, x, y, width, height, config);
            image.set(x, y, color);
        }
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    Ok(image)
}
