//! OpenGL renderer adapters for imgui-examples-rs.
//!
//! [`OpenGl2Renderer`] and [`OpenGl3Renderer`] implement
//! [`imgui_examples_core::Renderer`] for the two context generations the
//! platform can create. Draw-list submission is delegated to
//! `dear-imgui-glow`; these types own clearing, viewport setup and the
//! context version check.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod opengl2;
pub mod opengl3;
mod pipeline;

pub use error::{require_version, GlVersion, RenderError, RenderResult};
pub use opengl2::OpenGl2Renderer;
pub use opengl3::OpenGl3Renderer;
