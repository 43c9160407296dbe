//! Axis-aligned box primitive.

use prism_math::Vector3;
use smallvec::smallvec;

use crate::object::{Renderable, Roots, Surface, NO_HIT};

/// An axis-aligned box.
///
/// Shading uses the default center-relative normal, not per-face normals.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    pub center: Vector3,
    pub min: Vector3,
    pub max: Vector3,
    pub surface: Surface,
}

impl Cuboid {
    /// Create a cube with edge length `size` centred on `center`.
    pub fn new(center: Vector3, size: f64, surface: Surface) -> Self {
        let half = Vector3::splat(size / 2.0);
        Self {
            center,
            min: center - half,
            max: center + half,
            surface,
        }
    }
}

/// Entry and exit parameters of one axis slab, ordered.
#[inline]
fn slab(min: f64, max: f64, origin: f64, direction: f64) -> (f64, f64) {
    let t0 = (min - origin) / direction;
    let t1 = (max - origin) / direction;
    if t0 > t1 {
        (t1, t0)
    } else {
        (t0, t1)
    }
}

impl Renderable for Cuboid {
    /// Slab method. Returns `[t_min, t_max]`, or a single [`NO_HIT`] when any
    /// axis rejects the running interval.
    fn intersect(&self, origin: Vector3, direction: Vector3) -> Roots {
        let (mut t_min, mut t_max) = slab(self.min.x(), self.max.x(), origin.x(), direction.x());

        for axis in [1, 2] {
            let (lo, hi) = slab(
                self.min.to_array()[axis],
                self.max.to_array()[axis],
                origin.to_array()[axis],
                direction.to_array()[axis],
            );

            if t_min > hi || lo > t_max {
                return smallvec![NO_HIT];
            }
            if lo > t_min {
                t_min = lo;
            }
            if hi < t_max {
                t_max = hi;
            }
        }

        smallvec![t_min, t_max]
    }

    fn center(&self) -> Vector3 {
        self.center
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn kind(&self) -> &'static str {
        "box"
    }
}
