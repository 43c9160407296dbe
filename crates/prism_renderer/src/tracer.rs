//! Recursive Whitted tracer: local shading plus reflection and transparency.

use prism_core::{Color, Scene};
use prism_math::{reflect, Interval, Vector3};

use crate::hit::closest_hit;
use crate::lighting::{compute_lighting, SURFACE_EPSILON};

/// Traces rays through a borrowed scene.
///
/// The scene is read-only for the tracer's lifetime, so one tracer can be
/// shared across worker threads.
#[derive(Debug, Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a Scene,
    background: Color,
}

impl<'a> Tracer<'a> {
    /// Create a tracer with a black background.
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            background: Color::BLACK,
        }
    }

    /// Colour returned for rays that hit nothing.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    /// Colour seen along `origin + t·direction` for `t` in `range`.
    ///
    /// `depth` bounds the number of further reflection and transparency
    /// bounces. At depth 0 only the locally lit colour is returned.
    pub fn trace_ray(&self, origin: Vector3, direction: Vector3, range: Interval, depth: u32) -> Color {
        let Some(hit) = closest_hit(self.scene.objects(), origin, direction, range) else {
            return self.background;
        };

        let surface = hit.object.surface();
        let point = hit.point(origin, direction);
        let normal = hit.object.normal(point);
        let view = -direction;

        let lighting = compute_lighting(self.scene, point, normal, view, surface.specular);
        let mut color = surface.color.multiply_vector(lighting);

        if depth == 0 {
            return color;
        }

        if surface.reflective > 0.0 {
            let reflected_dir = reflect(view, normal);
            let reflected = self.trace_ray(point, reflected_dir, Interval::from_min(SURFACE_EPSILON), depth - 1);
            color = color.blend(reflected, surface.reflective);
        }

        // Continue the same ray past this hit
        if surface.transparency > 0.0 {
            let transmitted = self.trace_ray(
                origin,
                direction,
                Interval::from_min(hit.t + SURFACE_EPSILON),
                depth - 1,
            );
            color = color.blend(transmitted, surface.transparency);
        }

        color
    }
}
