//! Error types for imgui-examples-rs.

use thiserror::Error;

/// The main error type for the example applications.
#[derive(Error, Debug)]
pub enum ExampleError {
    /// The windowing library could not be initialized.
    #[error("failed to initialize glfw: {0}")]
    PlatformInit(String),

    /// The window (and its GL context) could not be created.
    #[error("failed to create window")]
    WindowCreation,

    /// The renderer could not be set up on the current GL context.
    #[error("failed to initialize renderer: {0}")]
    RendererInit(String),

    /// The clipboard holds no text, or could not be read.
    #[error("clipboard text unavailable")]
    ClipboardUnavailable,

    /// The configuration file was read but is not usable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for the example applications.
pub type Result<T> = std::result::Result<T, ExampleError>;
