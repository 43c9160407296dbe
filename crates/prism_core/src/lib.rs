//! Prism Core - scene model for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Camera`, `Light`, `Color`
//! - **Primitives**: the `Renderable` trait with `Sphere` and `Cuboid`
//! - **Descriptions**: serde-friendly descriptors and their assembly
//!
//! # Example
//!
//! ```ignore
//! use prism_core::SceneDescription;
//!
//! let scene = SceneDescription::load("scene.json")?.assemble()?;
//! println!("Loaded {} objects, {} lights",
//!     scene.object_count(),
//!     scene.light_count());
//! ```

pub mod camera;
pub mod color;
pub mod cuboid;
pub mod description;
pub mod error;
pub mod light;
pub mod object;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use camera::{Camera, Viewport};
pub use color::Color;
pub use cuboid::Cuboid;
pub use description::{CameraDescriptor, LightDescriptor, ObjectDescriptor, SceneDescription};
pub use error::{SceneError, SceneResult};
pub use light::Light;
pub use object::{Renderable, Roots, Surface, NO_HIT};
pub use scene::Scene;
pub use sphere::Sphere;

pub use prism_math::{Interval, RotationMatrix, Vector3};
