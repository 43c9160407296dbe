//! Errors raised while building a scene.

use thiserror::Error;

/// Errors that can occur during scene construction.
///
/// All of these are fatal: no partial scene is returned.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown object kind: {0}")]
    UnknownObjectKind(String),

    #[error("Unknown light kind: {0}")]
    UnknownLightKind(String),

    #[error("Invalid resolution {width}x{height}: both dimensions must be non-zero")]
    InvalidResolution { width: u32, height: u32 },
}

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;
