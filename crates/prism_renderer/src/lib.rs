//! Prism renderer - CPU Whitted ray tracing
//!
//! Traces one primary ray per pixel through a [`prism_core::Scene`], shading
//! hits with ambient, diffuse and specular light, hard shadows, mirror
//! reflection and transparency.
//!
//! Rendering is single-threaded via [`render`], or bucketed across the rayon
//! pool via [`render_parallel`]; both produce the same image.

mod bucket;
mod error;
mod hit;
mod lighting;
mod renderer;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult};
pub use error::{RenderError, RenderResult};
pub use hit::{any_hit, closest_hit, Hit};
pub use lighting::{compute_lighting, diffuse_lighting, specular_lighting, SURFACE_EPSILON};
pub use renderer::{output_size, render, render_pixel, ImageBuffer, RenderConfig, Rgba8};
pub use tracer::Tracer;
