//! Local illumination: ambient, diffuse and Phong specular with hard shadows.

use prism_core::{Light, Scene, Surface};
use prism_math::{reflect, Interval, Vector3};

use crate::hit::any_hit;

/// Offset along shadow and reflection rays to avoid self-intersection.
pub const SURFACE_EPSILON: f64 = 0.001;

/// Total light intensity arriving at `point`.
///
/// Ambient lights always contribute. Point and directional lights contribute
/// nothing when any object blocks the segment toward them. Each diffuse and
/// specular term is clamped at zero individually; the sum is not clamped.
///
/// `view` points from the surface back toward the viewer.
pub fn compute_lighting(scene: &Scene, point: Vector3, normal: Vector3, view: Vector3, specular: f64) -> Vector3 {
    let mut total = Vector3::ZERO;

    for light in scene.lights() {
        let (light_dir, t_max) = match *light {
            Light::Ambient { intensity } => {
                total.plus_equals(intensity);
                continue;
            }
            Light::Point { position, .. } => (position - point, 1.0),
            Light::Directional { direction, .. } => (direction, f64::INFINITY),
        };

        let shadow_range = Interval::new(SURFACE_EPSILON, t_max);
        if any_hit(scene.objects(), point, light_dir, shadow_range) {
            continue;
        }

        let intensity = light.intensity();
        total.plus_equals(diffuse_lighting(intensity, normal, light_dir));
        total.plus_equals(specular_lighting(intensity, normal, light_dir, view, specular));
    }

    total
}

/// Cosine of the angle between `a` and `b` when it is positive, else `None`.
///
/// Also `None` for a zero-length input, so degenerate vectors contribute no
/// light instead of NaN.
fn positive_cosine(a: Vector3, b: Vector3) -> Option<f64> {
    let dot = a.dot(b);
    if dot <= 0.0 {
        return None;
    }
    let denominator = a.magnitude() * b.magnitude();
    if denominator == 0.0 {
        return None;
    }
    Some(dot / denominator)
}

/// Lambertian term `intensity · cos(normal, light_dir)`.
pub fn diffuse_lighting(intensity: Vector3, normal: Vector3, light_dir: Vector3) -> Vector3 {
    match positive_cosine(normal, light_dir) {
        Some(cosine) => intensity.multiply_scalar(cosine),
        None => Vector3::ZERO,
    }
}

/// Phong term `intensity · cos(reflected, view)^specular`.
///
/// Zero when `specular` is `-1`.
pub fn specular_lighting(
    intensity: Vector3,
    normal: Vector3,
    light_dir: Vector3,
    view: Vector3,
    specular: f64,
) -> Vector3 {
    if specular == Surface::NO_SPECULAR {
        return Vector3::ZERO;
    }

    let reflected = reflect(light_dir, normal);
    match positive_cosine(reflected, view) {
        Some(cosine) => intensity.multiply_scalar(cosine.powf(specular)),
        None => Vector3::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Color, Sphere};

    fn scene_with(lights: &[Light]) -> Scene {
        let mut scene = Scene::new(10, 10).unwrap();
        for light in lights {
            scene.add_light(*light);
        }
        scene
    }

    #[test]
    fn test_ambient_only() {
        let scene = scene_with(&[Light::ambient(Vector3::splat(0.2))]);
        let lit = compute_lighting(&scene, Vector3::ZERO, Vector3::Y, Vector3::Y, -1.0);
        assert_eq!(lit, Vector3::splat(0.2));

        // Ambient ignores orientation entirely
        let lit = compute_lighting(&scene, Vector3::ZERO, -Vector3::Y, Vector3::X, 10.0);
        assert_eq!(lit, Vector3::splat(0.2));
    }

    #[test]
    fn test_diffuse_point_light() {
        let scene = scene_with(&[Light::point(Vector3::ONE, Vector3::new(0.0, 10.0, 0.0))]);

        let lit = compute_lighting(&scene, Vector3::ZERO, Vector3::Y, Vector3::Y, -1.0);
        assert!(lit.abs_diff_eq(Vector3::ONE, 1e-12));

        // Facing away gets nothing
        let lit = compute_lighting(&scene, Vector3::ZERO, -Vector3::Y, Vector3::Y, -1.0);
        assert_eq!(lit, Vector3::ZERO);

        // 45 degrees off the normal
        let lit = compute_lighting(&scene, Vector3::ZERO, Vector3::new(1.0, 1.0, 0.0), Vector3::Y, -1.0);
        assert!(lit.abs_diff_eq(Vector3::splat(std::f64::consts::FRAC_1_SQRT_2), 1e-12));
    }

    #[test]
    fn test_specular_highlight() {
        let scene = scene_with(&[Light::point(Vector3::ONE, Vector3::new(0.0, 10.0, 0.0))]);

        // Mirror direction equals the view: diffuse 1 + specular 1
        let lit = compute_lighting(&scene, Vector3::ZERO, Vector3::Y, Vector3::Y, 10.0);
        assert!(lit.abs_diff_eq(Vector3::splat(2.0), 1e-12));

        // Viewer below the surface: diffuse only
        let lit = compute_lighting(&scene, Vector3::ZERO, Vector3::Y, -Vector3::Y, 10.0);
        assert!(lit.abs_diff_eq(Vector3::ONE, 1e-12));
    }

    #[test]
    fn test_specular_exponent_sharpens() {
        let light_dir = Vector3::new(1.0, 1.0, 0.0);
        let view = Vector3::new(0.0, 1.0, 0.0);
        let wide = specular_lighting(Vector3::ONE, Vector3::Y, light_dir, view, 1.0);
        let tight = specular_lighting(Vector3::ONE, Vector3::Y, light_dir, view, 50.0);

        assert!(wide.x() > tight.x());
        assert!(tight.x() > 0.0);
        assert_eq!(specular_lighting(Vector3::ONE, Vector3::Y, light_dir, view, -1.0), Vector3::ZERO);
    }

    #[test]
    fn test_directional_light() {
        let scene = scene_with(&[Light::directional(Vector3::splat(0.5), Vector3::new(0.0, 0.0, -1.0))]);
        let lit = compute_lighting(&scene, Vector3::new(0.0, 0.0, -1.0), -Vector3::Z, -Vector3::Z, -1.0);
        assert!(lit.abs_diff_eq(Vector3::splat(0.5), 1e-12));
    }

    #[test]
    fn test_shadow_occlusion() {
        for strength in [1.0, 100.0] {
            let mut scene = scene_with(&[Light::point(Vector3::splat(strength), Vector3::new(0.0, 0.0, -10.0))]);
            scene.add_object(Box::new(Sphere::new(Vector3::ZERO, 1.0, Surface::new(Color::WHITE))));

            let point = Vector3::new(0.0, 0.0, -1.0);
            let normal = -Vector3::Z;
            let lit = compute_lighting(&scene, point, normal, normal, 100.0);
            assert!(lit.abs_diff_eq(Vector3::splat(strength * 2.0), 1e-9));

            // Blocker between the surface and the light
            scene.add_object(Box::new(Sphere::new(Vector3::new(0.0, 0.0, -5.0), 1.0, Surface::default())));
            let lit = compute_lighting(&scene, point, normal, normal, 100.0);
            assert_eq!(lit, Vector3::ZERO);
        }
    }

    #[test]
    fn test_objects_beyond_point_light_do_not_shadow() {
        let mut scene = scene_with(&[Light::point(Vector3::ONE, Vector3::new(0.0, 0.0, -3.0))]);
        scene.add_object(Box::new(Sphere::new(Vector3::new(0.0, 0.0, -8.0), 1.0, Surface::default())));

        let lit = compute_lighting(&scene, Vector3::ZERO, -Vector3::Z, -Vector3::Z, -1.0);
        assert!(lit.abs_diff_eq(Vector3::ONE, 1e-12));
    }

    #[test]
    fn test_directional_shadow_has_no_far_limit() {
        let mut scene = scene_with(&[Light::directional(Vector3::ONE, Vector3::new(0.0, 0.0, -1.0))]);
        scene.add_object(Box::new(Sphere::new(Vector3::new(0.0, 0.0, -1000.0), 1.0, Surface::default())));

        let lit = compute_lighting(&scene, Vector3::ZERO, -Vector3::Z, -Vector3::Z, -1.0);
        assert_eq!(lit, Vector3::ZERO);
    }

    #[test]
    fn test_degenerate_vectors_contribute_nothing() {
        let scene = scene_with(&[
            Light::point(Vector3::ONE, Vector3::new(0.0, 5.0, 0.0)),
            Light::directional(Vector3::ONE, Vector3::ZERO),
        ]);

        // Zero normal
        let lit = compute_lighting(&scene, Vector3::ZERO, Vector3::ZERO, Vector3::Y, 10.0);
        assert_eq!(lit, Vector3::ZERO);

        // Zero view vector keeps the diffuse term only
        let lit = compute_lighting(&scene, Vector3::ZERO, Vector3::Y, Vector3::ZERO, 10.0);
        assert!(lit.abs_diff_eq(Vector3::ONE, 1e-12));
        assert!(!lit.x().is_nan());
    }
}
