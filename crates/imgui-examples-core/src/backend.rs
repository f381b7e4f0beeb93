//! Platform and renderer abstractions.
//!
//! Each concrete backend pairing (GLFW with OpenGL2, GLFW with OpenGL3)
//! implements these traits; the pairing is picked when the application is
//! composed, see [`ClientApi`].

use std::fmt;

use dear_imgui_rs::DrawData;

use crate::{FrameSink, Result};

/// The render system a platform window is created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientApi {
    /// OpenGL 2.1 compatibility context.
    OpenGl2,
    /// OpenGL 3.2 core, forward compatible context.
    OpenGl3,
}

impl ClientApi {
    /// Minimum context version (major, minor) the renderer needs.
    #[must_use]
    pub fn context_version(self) -> (u32, u32) {
        match self {
            Self::OpenGl2 => (2, 1),
            Self::OpenGl3 => (3, 2),
        }
    }
}

impl fmt::Display for ClientApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenGl2 => f.write_str("OpenGL2"),
            Self::OpenGl3 => f.write_str("OpenGL3"),
        }
    }
}

/// Windowing, input, timing and clipboard.
pub trait Platform {
    /// Abort condition of the frame loop, checked before every iteration.
    fn should_stop(&self) -> bool;

    /// Dispatches pending window events. Called once per iteration.
    fn process_events(&mut self);

    /// Logical size of the display area.
    fn display_size(&self) -> [f32; 2];

    /// Size of the framebuffer in pixels.
    fn framebuffer_size(&self) -> [f32; 2];

    /// Begins a frame by pushing the current input state into `io`.
    fn new_frame(&mut self, io: &mut dyn FrameSink);

    /// Completes a frame, typically by swapping buffers.
    fn post_render(&mut self);

    /// Current clipboard text.
    fn clipboard_text(&self) -> Result<String>;

    /// Replaces the clipboard text.
    fn set_clipboard_text(&mut self, text: &str);
}

/// Turns a frame's draw data into pixels.
pub trait Renderer<D: ?Sized = DrawData> {
    /// Prepares the display buffer for new output.
    fn pre_render(&mut self, clear_color: [f32; 3]);

    /// Draws `draw_data`. The two sizes differ under display scaling.
    fn render(&mut self, display_size: [f32; 2], framebuffer_size: [f32; 2], draw_data: &D);
}
