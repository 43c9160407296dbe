//! Closest-hit search over the scene's objects.

use prism_core::Renderable;
use prism_math::{Interval, Vector3};

/// Record of the closest ray-object intersection.
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Object that was hit
    pub object: &'a dyn Renderable,
}

impl Hit<'_> {
    /// Point of intersection along `origin + t·direction`.
    pub fn point(&self, origin: Vector3, direction: Vector3) -> Vector3 {
        origin + direction * self.t
    }
}

/// Find the closest object crossed by the ray with `t` inside `range`.
///
/// Objects are scanned in order and a root only replaces the current best if
/// it is strictly smaller, so ties keep the first object. Infinite roots never
/// win because the running best starts at `+∞`.
pub fn closest_hit<'a>(
    objects: &'a [Box<dyn Renderable>],
    origin: Vector3,
    direction: Vector3,
    range: Interval,
) -> Option<Hit<'a>> {
    let mut closest_so_far = f64::INFINITY;
    let mut closest = None;

    for object in objects {
        for t in object.intersect(origin, direction) {
            if range.contains(t) && t < closest_so_far {
                closest_so_far = t;
                closest = Some(Hit {
                    t,
                    object: object.as_ref(),
                });
            }
        }
    }

    closest
}

/// True if any object is crossed by the ray with `t` inside `range`.
///
/// Same acceptance rule as [`closest_hit`], stopping at the first match.
pub fn any_hit(objects: &[Box<dyn Renderable>], origin: Vector3, direction: Vector3, range: Interval) -> bool {
    objects.iter().any(|object| {
        object
            .intersect(origin, direction)
            .into_iter()
            .any(|t| range.contains(t) && t < f64::INFINITY)
    })
}
