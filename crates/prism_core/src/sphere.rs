//! Sphere primitive.

use prism_math::Vector3;
use smallvec::smallvec;

use crate::object::{Renderable, Roots, Surface, NO_HIT};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f64,
    pub surface: Surface,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vector3, radius: f64, surface: Surface) -> Self {
        Self {
            center,
            radius,
            surface,
        }
    }
}

impl Renderable for Sphere {
    fn intersect(&self, origin: Vector3, direction: Vector3) -> Roots {
        let co = origin - self.center;
        let a = direction.dot(direction);
        let b = 2.0 * co.dot(direction);
        let c = co.dot(co) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return smallvec![NO_HIT, NO_HIT];
        }

        let sqrtd = discriminant.sqrt();
        smallvec![(-b + sqrtd) / (2.0 * a), (-b - sqrtd) / (2.0 * a)]
    }

    fn center(&self) -> Vector3 {
        self.center
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn kind(&self) -> &'static str {
        "sphere"
    }
}
