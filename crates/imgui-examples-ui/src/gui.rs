//! The GUI context paired with the example content.

use dear_imgui_rs::{Context, DrawData};
use imgui_examples_core::{ExampleOptions, Frame, FrameSink, FrameSource};

use crate::ExampleState;

/// Owns the Dear ImGui context and the state of the example windows.
pub struct ExampleGui {
    imgui: Context,
    state: ExampleState,
}

impl ExampleGui {
    /// Creates a fresh GUI context.
    #[must_use]
    pub fn new(options: &ExampleOptions) -> Self {
        let imgui = Context::create();
        log::debug!(
            "created GUI context (showcase window open: {})",
            options.show_showcase_window
        );
        Self {
            imgui,
            state: ExampleState::new(options),
        }
    }

    /// The GUI context, for renderer setup.
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.imgui
    }
}

impl FrameSource for ExampleGui {
    type DrawData = DrawData;

    fn io_mut(&mut self) -> &mut dyn FrameSink {
        self.imgui.io_mut()
    }

    fn frame(&mut self) -> Frame<'_, DrawData> {
        let ui = self.imgui.frame();
        self.state.build(ui);
        let clear_color = self.state.clear_color;
        Frame {
            draw_data: self.imgui.render(),
            clear_color,
        }
    }
}
