//! Scene container: objects, lights, camera and output resolution.

use prism_math::Vector3;

use crate::camera::Camera;
use crate::error::{SceneError, SceneResult};
use crate::light::Light;
use crate::object::Renderable;

/// A complete scene ready to render.
///
/// Objects and lights keep their insertion order; the tracer scans them in
/// that order, so ties between equally distant hits resolve to the object
/// added first.
#[derive(Debug)]
pub struct Scene {
    objects: Vec<Box<dyn Renderable>>,
    lights: Vec<Light>,
    camera: Camera,
    width: u32,
    height: u32,
}

impl Scene {
    /// Create an empty scene with the given output resolution.
    ///
    /// The camera viewport takes its aspect ratio from the resolution.
    pub fn new(width: u32, height: u32) -> SceneResult<Self> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidResolution { width, height });
        }

        Ok(Self {
            objects: Vec::new(),
            lights: Vec::new(),
            camera: Camera::for_resolution(width, height),
            width,
            height,
        })
    }

    /// Add an object to the scene.
    pub fn add_object(&mut self, object: Box<dyn Renderable>) {
        self.objects.push(object);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn objects(&self) -> &[Box<dyn Renderable>] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Configured output resolution `(width, height)`.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Apply an incremental Euler rotation to the camera.
    pub fn rotate_camera(&mut self, delta: Vector3) {
        self.camera.rotate(delta);
    }

    /// Move the camera to an absolute position.
    pub fn move_camera(&mut self, position: Vector3) {
        self.camera.move_to(position);
    }

    /// Get object count.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
