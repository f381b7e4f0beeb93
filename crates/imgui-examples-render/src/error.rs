//! Rendering error types.

use std::fmt;

use imgui_examples_core::ExampleError;
use thiserror::Error;

/// An OpenGL context version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
}

impl GlVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Errors that can occur while setting up or driving a renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The current context is older than the renderer needs.
    #[error("OpenGL {required} or newer required, context provides {actual}")]
    UnsupportedVersion {
        required: GlVersion,
        actual: GlVersion,
    },

    /// The draw-list backend reported a failure.
    #[error("draw backend error: {0}")]
    Backend(String),
}

impl From<RenderError> for ExampleError {
    fn from(err: RenderError) -> Self {
        ExampleError::RendererInit(err.to_string())
    }
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Fails unless `actual` is at least `required`.
pub fn require_version(actual: GlVersion, required: GlVersion) -> RenderResult<()> {
    if actual < required {
        return Err(RenderError::UnsupportedVersion { required, actual });
    }
    Ok(())
}
