//! The example content shown by every binary.

use dear_imgui_rs::Ui;
use imgui_examples_core::ExampleOptions;

use crate::showcase::{build_showcase_window, ShowcaseState};

const MILLIS_PER_SECOND: f32 = 1000.0;

/// UI toggles and values that persist across frames.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExampleState {
    /// The library's built-in demo window.
    pub show_demo_window: bool,
    /// The showcase window of this crate.
    pub show_showcase_window: bool,
    pub show_another_window: bool,
    /// Color the frame is cleared with, edited in the example window.
    pub clear_color: [f32; 3],
    pub value: f32,
    pub counter: u32,
    pub showcase: ShowcaseState,
}

impl ExampleState {
    /// Creates the initial state from the configuration.
    #[must_use]
    pub fn new(options: &ExampleOptions) -> Self {
        Self {
            show_demo_window: false,
            show_showcase_window: options.show_showcase_window,
            show_another_window: false,
            clear_color: options.clear_color,
            value: 0.0,
            counter: 0,
            showcase: ShowcaseState::default(),
        }
    }

    /// Builds all windows for the current frame.
    pub fn build(&mut self, ui: &Ui) {
        self.build_main_window(ui);

        if self.show_another_window {
            self.build_another_window(ui);
        }
        if self.show_demo_window {
            ui.show_demo_window(&mut self.show_demo_window);
        }
        if self.show_showcase_window {
            build_showcase_window(ui, &mut self.showcase, &mut self.show_showcase_window);
        }
    }

    /// Widgets outside any explicit window land in the implicit "Debug" window.
    fn build_main_window(&mut self, ui: &Ui) {
        // Needs a font with Thai, CJK and Hangul glyphs to display.
        ui.text("ภาษาไทย测试조선말");
        ui.text("Hello, world!");
        ui.slider("float", 0.0, 1.0, &mut self.value);
        ui.color_edit3("clear color", &mut self.clear_color);

        ui.checkbox("Demo Window", &mut self.show_demo_window);
        ui.checkbox("Showcase Window", &mut self.show_showcase_window);
        ui.checkbox("Another Window", &mut self.show_another_window);

        if ui.button("Button") {
            self.counter += 1;
        }
        ui.same_line();
        ui.text(format!("counter = {}", self.counter));

        let framerate = ui.io().framerate();
        ui.text(format!(
            "Application average {:.3} ms/frame ({framerate:.1} FPS)",
            MILLIS_PER_SECOND / framerate
        ));
    }

    fn build_another_window(&mut self, ui: &Ui) {
        let mut close_requested = false;
        ui.window("Another window")
            .opened(&mut self.show_another_window)
            .build(|| {
                ui.text("Hello from another window!");
                if ui.button("Close Me") {
                    close_requested = true;
                }
            });
        if close_requested {
            self.show_another_window = false;
        }
    }
}

impl Default for ExampleState {
    fn default() -> Self {
        Self::new(&ExampleOptions::default())
    }
}
