//! Light sources.

use prism_math::Vector3;

/// A light in the scene.
///
/// Intensities are unclamped RGB weights multiplied into surface colours.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Light {
    /// Uniform light reaching every point, never shadowed
    Ambient { intensity: Vector3 },
    /// Light emitted from a point at finite distance
    Point { intensity: Vector3, position: Vector3 },
    /// Light arriving from a fixed direction. `direction` points toward the light.
    Directional { intensity: Vector3, direction: Vector3 },
}

impl Light {
    pub fn ambient(intensity: Vector3) -> Self {
        Light::Ambient { intensity }
    }

    pub fn point(intensity: Vector3, position: Vector3) -> Self {
        Light::Point {
            intensity,
            position,
        }
    }

    pub fn directional(intensity: Vector3, direction: Vector3) -> Self {
        Light::Directional {
            intensity,
            direction,
        }
    }

    pub fn intensity(&self) -> Vector3 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }

    /// Short name of the light kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Light::Ambient { .. } => "ambient",
            Light::Point { .. } => "point",
            Light::Directional { .. } => "directional",
        }
    }
}
