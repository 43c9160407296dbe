//! Pinhole camera with a rotation-matrix orientation.

use prism_math::{RotationMatrix, Vector3};

/// The virtual rectangle rays are cast through.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    /// Viewport width in world units
    pub width: f64,
    /// Viewport height in world units
    pub height: f64,
    /// Distance from the eye. Larger values narrow the field of view.
    pub distance: f64,
}

/// Camera for generating primary ray directions.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vector3,
    pub rotation: RotationMatrix,
    pub viewport: Viewport,
}

impl Camera {
    /// Create a camera at the origin looking down +Z.
    pub fn new(dimensions: (f64, f64), distance: f64) -> Self {
        Self {
            position: Vector3::ZERO,
            rotation: RotationMatrix::IDENTITY,
            viewport: Viewport {
                width: dimensions.0,
                height: dimensions.1,
                distance,
            },
        }
    }

    /// Camera whose viewport matches the aspect ratio of an output resolution.
    ///
    /// The viewport is `(width / height, 1)` at distance 1.
    pub fn for_resolution(width: u32, height: u32) -> Self {
        Self::new((width as f64 / height as f64, 1.0), 1.0)
    }

    /// Apply an incremental rotation on top of the current orientation.
    ///
    /// `rotation = rotation · rotX(dx) · rotY(dy) · rotZ(dz)`
    pub fn rotate(&mut self, delta: Vector3) {
        self.rotation = self
            .rotation
            .multiply_matrix(&RotationMatrix::from_euler(delta));
    }

    /// Move the camera to an absolute position.
    pub fn move_to(&mut self, position: Vector3) {
        self.position = position;
    }

    /// World-space direction through canvas coordinate `(cx, cy)`.
    ///
    /// Canvas coordinates are centred on the image, with +y pointing up.
    /// The direction is not normalized: its viewport-space z equals the
    /// viewport distance.
    pub fn canvas_to_viewport(&self, cx: f64, cy: f64, canvas_width: u32, canvas_height: u32) -> Vector3 {
        let vx = cx * (self.viewport.width / canvas_width as f64);
        let vy = cy * (self.viewport.height / canvas_height as f64);
        self.rotation
            .multiply_vector(Vector3::new(vx, vy, self.viewport.distance))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new((1.0, 1.0), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_camera_for_resolution() {
        let camera = Camera::for_resolution(1920, 1080);

        assert_eq!(camera.position, Vector3::ZERO);
        assert!((camera.viewport.width - 16.0 / 9.0).abs() < 1e-12);
        assert_eq!(camera.viewport.height, 1.0);
        assert_eq!(camera.viewport.distance, 1.0);
    }

    #[test]
    fn test_canvas_to_viewport_center() {
        let mut camera = Camera::for_resolution(100, 100);
        let dir = camera.canvas_to_viewport(0.0, 0.0, 100, 100);
        assert_eq!(dir, Vector3::new(0.0, 0.0, 1.0));

        camera.viewport.distance = 2.0;
        let dir = camera.canvas_to_viewport(0.0, 0.0, 100, 100);
        assert_eq!(dir, Vector3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_canvas_to_viewport_edges() {
        // 2:1 viewport on a 200x100 canvas
        let camera = Camera::for_resolution(200, 100);

        let dir = camera.canvas_to_viewport(100.0, 50.0, 200, 100);
        assert!(dir.abs_diff_eq(Vector3::new(1.0, 0.5, 1.0), 1e-12));

        // A reduced canvas maps to the same viewport corner
        let dir = camera.canvas_to_viewport(50.0, -25.0, 100, 50);
        assert!(dir.abs_diff_eq(Vector3::new(1.0, -0.5, 1.0), 1e-12));
    }

    #[test]
    fn test_rotate_is_incremental() {
        let mut camera = Camera::default();
        camera.rotate(Vector3::new(0.0, FRAC_PI_2 / 2.0, 0.0));
        camera.rotate(Vector3::new(0.0, FRAC_PI_2 / 2.0, 0.0));

        // Two quarter-turns about Y: forward +Z becomes +X
        let forward = camera.canvas_to_viewport(0.0, 0.0, 1, 1);
        assert!(forward.abs_diff_eq(Vector3::X, 1e-12));

        let once = RotationMatrix::from_euler(Vector3::new(0.0, FRAC_PI_2, 0.0));
        assert!(camera.rotation.abs_diff_eq(&once, 1e-12));
    }

    #[test]
    fn test_move_to() {
        let mut camera = Camera::default();
        camera.move_to(Vector3::new(1.0, 2.0, 3.0));
        camera.move_to(Vector3::new(0.0, 1.0, -4.0));
        assert_eq!(camera.position, Vector3::new(0.0, 1.0, -4.0));
    }
}
