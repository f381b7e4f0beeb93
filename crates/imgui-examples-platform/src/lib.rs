//! GLFW platform adapter for imgui-examples-rs.
//!
//! [`GlfwPlatform`] owns the window and its GL context. Window events are
//! collected into an [`InputQueue`] while polling and pushed into the GUI when
//! the next frame begins; [`keymap`] holds the key translation table.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod clock;
pub mod glfw_platform;
pub mod input_queue;
pub mod keymap;

pub use clock::FrameClock;
pub use glfw_platform::GlfwPlatform;
pub use input_queue::{InputQueue, PointerState};
pub use keymap::translate_key;
