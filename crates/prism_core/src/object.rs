//! Renderable trait and shared surface attributes.

use std::fmt;

use prism_math::Vector3;
use smallvec::SmallVec;

use crate::Color;

/// Ray parameters at which a surface is crossed.
///
/// `+∞` entries are "no hit" sentinels; callers filter them with a range check.
pub type Roots = SmallVec<[f64; 2]>;

/// Sentinel root meaning the ray misses the surface.
pub const NO_HIT: f64 = f64::INFINITY;

/// Appearance of a renderable object.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Surface {
    /// Base colour, multiplied by the incoming light intensity
    pub color: Color,
    /// Phong exponent; `-1` disables the specular term
    pub specular: f64,
    /// Reflection blend weight in `[0, 1]`
    pub reflective: f64,
    /// Transmission blend weight in `[0, 1]`
    pub transparency: f64,
}

impl Surface {
    /// Specular exponent value that disables the specular term.
    pub const NO_SPECULAR: f64 = -1.0;

    /// A matte, opaque surface of the given colour.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            specular: Self::NO_SPECULAR,
            reflective: 0.0,
            transparency: 0.0,
        }
    }

    pub fn with_specular(mut self, specular: f64) -> Self {
        self.specular = specular;
        self
    }

    pub fn with_reflective(mut self, reflective: f64) -> Self {
        self.reflective = reflective;
        self
    }

    pub fn with_transparency(mut self, transparency: f64) -> Self {
        self.transparency = transparency;
        self
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}

/// Trait for objects the tracer can intersect and shade.
pub trait Renderable: Send + Sync + fmt::Debug {
    /// Parameters `t` where `origin + t·direction` lies on the surface.
    ///
    /// The result may contain [`NO_HIT`] sentinels and is not sorted.
    fn intersect(&self, origin: Vector3, direction: Vector3) -> Roots;

    /// Reference point used by the default normal.
    fn center(&self) -> Vector3;

    /// Surface attributes used for shading.
    fn surface(&self) -> &Surface;

    /// Short name of the primitive kind, for logging.
    fn kind(&self) -> &'static str;

    /// Unit normal at `point`.
    ///
    /// Defaults to the direction from the center to the point, for every
    /// primitive. Returns the zero vector when `point` is the center.
    fn normal(&self, point: Vector3) -> Vector3 {
        point.minus_vector(self.center()).normalized()
    }
}
