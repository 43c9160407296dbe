//! Prism math types.
//!
//! Value types shared by the scene model and the renderer: vectors, rotation
//! matrices, reflection rays and parameter intervals. Storage is backed by
//! `glam`'s double-precision types.

mod interval;
mod matrix;
mod ray;
mod vector;

pub use interval::Interval;
pub use matrix::RotationMatrix;
pub use ray::{reflect, Ray};
pub use vector::Vector3;
