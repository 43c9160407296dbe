//! Render error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("reduction factor {reduce_by} is invalid for a {width}x{height} scene")]
    InvalidReduction { reduce_by: u32, width: u32, height: u32 },
}

pub type RenderResult<T> = Result<T, RenderError>;
