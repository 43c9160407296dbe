//! Scene descriptions and their assembly into a [`Scene`].
//!
//! A description is the value a front end hands to the core: plain data with
//! kind tags and optional attributes. It deserializes from JSON with `serde`,
//! and [`SceneDescription::assemble`] turns it into concrete objects and lights.
//!
//! # Example
//!
//! ```ignore
//! use prism_core::SceneDescription;
//!
//! let scene = SceneDescription::load("scenes/spheres.json")?.assemble()?;
//! println!("{} objects, {} lights", scene.object_count(), scene.light_count());
//! ```

use std::fs;
use std::path::Path;

use prism_math::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::{Color, Cuboid, Light, Renderable, Scene, Sphere, Surface};

fn default_specular() -> f64 {
    Surface::NO_SPECULAR
}

fn default_unit() -> f64 {
    1.0
}

/// Initial camera pose.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraDescriptor {
    #[serde(default)]
    pub position: [f64; 3],
    /// Euler angles in radians, applied as `rotX · rotY · rotZ`
    #[serde(default)]
    pub rotation: [f64; 3],
}

/// A renderable object before assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDescriptor {
    /// Primitive kind tag: `sphere` or `box`
    pub kind: String,
    #[serde(default)]
    pub center: [f64; 3],
    /// RGB in `[0, 255]`
    #[serde(default)]
    pub color: [f64; 3],
    #[serde(default = "default_specular")]
    pub specular: f64,
    #[serde(default)]
    pub reflective: f64,
    #[serde(default)]
    pub transparency: f64,
    /// Sphere radius
    #[serde(default = "default_unit")]
    pub radius: f64,
    /// Box edge length
    #[serde(default = "default_unit")]
    pub size: f64,
}

impl ObjectDescriptor {
    /// A descriptor of the given kind with every attribute at its default.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            center: [0.0; 3],
            color: [0.0; 3],
            specular: default_specular(),
            reflective: 0.0,
            transparency: 0.0,
            radius: default_unit(),
            size: default_unit(),
        }
    }

    fn surface(&self) -> Surface {
        let [r, g, b] = self.color;
        Surface::new(Color::new(r, g, b))
            .with_specular(self.specular)
            .with_reflective(self.reflective)
            .with_transparency(self.transparency)
    }

    /// Build the concrete object.
    pub fn build(&self) -> SceneResult<Box<dyn Renderable>> {
        for (name, value) in [("reflective", self.reflective), ("transparency", self.transparency)] {
            if !(0.0..=1.0).contains(&value) {
                log::warn!("{} {} = {} is outside [0, 1]", self.kind, name, value);
            }
        }

        let center = Vector3::from(self.center);
        let object: Box<dyn Renderable> = match self.kind.as_str() {
            "sphere" => Box::new(Sphere::new(center, self.radius, self.surface())),
            "box" => Box::new(Cuboid::new(center, self.size, self.surface())),
            other => return Err(SceneError::UnknownObjectKind(other.to_string())),
        };
        Ok(object)
    }
}

/// A light before assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightDescriptor {
    /// Light kind tag: `ambient`, `point` or `directional`
    pub kind: String,
    #[serde(default)]
    pub intensity: [f64; 3],
    /// Used by point lights
    #[serde(default)]
    pub position: [f64; 3],
    /// Used by directional lights; points toward the light
    #[serde(default)]
    pub direction: [f64; 3],
}

impl LightDescriptor {
    /// A descriptor of the given kind with zero vectors.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            intensity: [0.0; 3],
            position: [0.0; 3],
            direction: [0.0; 3],
        }
    }

    /// Build the concrete light.
    pub fn build(&self) -> SceneResult<Light> {
        let intensity = Vector3::from(self.intensity);
        match self.kind.as_str() {
            "ambient" => Ok(Light::ambient(intensity)),
            "point" => Ok(Light::point(intensity, self.position.into())),
            "directional" => Ok(Light::directional(intensity, self.direction.into())),
            other => Err(SceneError::UnknownLightKind(other.to_string())),
        }
    }
}

/// Everything needed to assemble a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub camera: CameraDescriptor,
    #[serde(default)]
    pub objects: Vec<ObjectDescriptor>,
    #[serde(default)]
    pub lights: Vec<LightDescriptor>,
}

impl SceneDescription {
    /// An empty description with the given output resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            camera: CameraDescriptor::default(),
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Parse a description from a JSON string.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON description file.
    pub fn load<P: AsRef<Path>>(path: P) -> SceneResult<Self> {
        let path = path.as_ref();
        log::debug!("Reading scene description {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Assemble the concrete scene.
    ///
    /// Fails on the first unknown object or light kind; nothing is returned
    /// for a partially built scene.
    pub fn assemble(&self) -> SceneResult<Scene> {
        let mut scene = Scene::new(self.width, self.height)?;

        for descriptor in &self.objects {
            let object = descriptor.build()?;
            log::debug!("Adding {} at {:?}", object.kind(), object.center());
            scene.add_object(object);
        }

        for descriptor in &self.lights {
            let light = descriptor.build()?;
            log::debug!("Adding {} light", light.kind());
            scene.add_light(light);
        }

        scene.move_camera(self.camera.position.into());
        scene.rotate_camera(self.camera.rotation.into());

        log::info!(
            "Assembled scene {}x{}: {} objects, {} lights",
            self.width,
            self.height,
            scene.object_count(),
            scene.light_count()
        );

        Ok(scene)
    }
}
