//! Core abstractions for imgui-examples-rs.
//!
//! This crate provides the pieces every example shares:
//! - [`Platform`] and [`Renderer`] traits implemented once per backend
//! - [`FrameSink`], the seam through which a platform feeds input to the GUI
//! - [`frame_loop::run`], the per-frame orchestration
//! - [`ExampleOptions`] and the error types

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod backend;
pub mod error;
pub mod frame_loop;
pub mod geometry;
pub mod input;
pub mod options;

pub use backend::{ClientApi, Platform, Renderer};
pub use error::{ExampleError, Result};
pub use frame_loop::{Frame, FrameSource, LoopStats};
pub use geometry::FramebufferGeometry;
pub use input::{
    FrameSink, GuiKey, GuiMouseButton, KeyModifiers, RecordingSink, MOUSE_BUTTON_COUNT, OFFSCREEN_CURSOR,
};
pub use options::{ExampleOptions, CONFIG_ENV_VAR};

// Re-export the GUI library for downstream crates
pub use dear_imgui_rs;
