//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! on the rayon thread pool and stitched back into one buffer.

use std::time::Instant;

use prism_core::{Color, Scene};
use rayon::prelude::*;

use crate::error::RenderResult;
use crate::renderer::{output_size, render_pixel, ImageBuffer, RenderConfig};
use crate::tracer::Tracer;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Row-major position of this bucket in the grid
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Split a `width × height` image into buckets in row-major order.
///
/// Edge buckets are cropped to the image. A zero `bucket_size` is treated
/// as 1.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();

    for y in (0..height).step_by(bucket_size as usize) {
        for x in (0..width).step_by(bucket_size as usize) {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
        }
    }

    buckets
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    /// Pixel colors in row-major order within the bucket
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy this bucket's pixels into their place in `image`.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let mut pixels = self.pixels.iter();
        for y in self.bucket.y..self.bucket.y + self.bucket.height {
            for x in self.bucket.x..self.bucket.x + self.bucket.width {
                if let Some(color) = pixels.next() {
                    image.set(x, y, *color);
                }
            }
        }
    }
}

/// Render one bucket of a `width × height` image.
pub fn render_bucket(tracer: &Tracer, bucket: &Bucket, width: u32, height: u32, config: &RenderConfig) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let color = render_pixel(tracer, bucket.x + local_x, bucket.y + local_y, width, height, config);
            pixels.push(color);
        }
    }

    BucketResult::new(*bucket, pixels)
}

/// Render the scene with buckets spread across the rayon thread pool.
///
/// Every pixel goes through the same computation as [`crate::render`], so
/// the resulting buffer is identical.
pub fn render_parallel(scene: &Scene, reduce_by: u32, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    let (width, height) = output_size(scene, reduce_by)?;
    let buckets = generate_buckets(width, height, config.bucket_size);
    log::info!(
        "Rendering {}x{} in {} buckets on {} threads",
        width,
        height,
        buckets.len(),
        rayon::current_num_threads()
    );

    let start = Instant::now();
    let tracer = Tracer::new(scene).with_background(config.background);
    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(&tracer, bucket, width, height, config))
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        result.write_into(&mut image);
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::render;
    use crate::renderer::tests::test_scene;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 30, 64);
        assert_eq!(buckets.len(), 2);

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 30);
        assert!(buckets.iter().any(|b| b.width == 36 && b.height == 30));
    }

    #[test]
    fn test_row_major_order() {
        let buckets = generate_buckets(192, 128, 64);
        assert_eq!(buckets.len(), 6);

        assert_eq!((buckets[0].x, buckets[0].y), (0, 0));
        assert_eq!((buckets[2].x, buckets[2].y), (128, 0));
        assert_eq!((buckets[3].x, buckets[3].y), (0, 64));
        assert!(buckets.iter().enumerate().all(|(i, b)| b.index == i));
    }

    #[test]
    fn test_zero_bucket_size() {
        let buckets = generate_buckets(3, 2, 0);
        assert_eq!(buckets.len(), 6);
    }

    #[test]
    fn test_bucket_result_placement() {
        let mut image = ImageBuffer::new(4, 4);
        let bucket = Bucket::new(2, 1, 2, 2, 0);
        let result = BucketResult::new(bucket, vec![Color::WHITE; 4]);
        result.write_into(&mut image);

        assert_eq!(image.get(2, 1), Color::WHITE);
        assert_eq!(image.get(3, 2), Color::WHITE);
        assert_eq!(image.get(1, 1), Color::BLACK);
        assert_eq!(image.get(2, 3), Color::BLACK);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let scene = test_scene(48, 36);
        let config = RenderConfig {
            bucket_size: 7,
            ..RenderConfig::default()
        };

        for reduce_by in [1, 2, 3] {
            let serial = render(&scene, reduce_by, &config).unwrap();
            let parallel = render_parallel(&scene, reduce_by, &config).unwrap();
            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn test_parallel_rejects_zero_reduction() {
        let scene = test_scene(8, 8);
        assert!(render_parallel(&scene, 0, &RenderConfig::default()).is_err());
    }
}
