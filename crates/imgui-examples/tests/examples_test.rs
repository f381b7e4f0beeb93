//! Integration tests for the example composition.
//!
//! Tests that open a window are marked #[ignore]
//! and should be run manually with: cargo test -- --ignored --test-threads=1

use std::io::Write;

use imgui_examples::{
    create_renderer, ClientApi, ExampleOptions, LoopStats, Platform, Renderer, Result,
};
use imgui_examples_core::frame_loop;
use imgui_examples_core::{FrameSink, CONFIG_ENV_VAR};
use imgui_examples_platform::GlfwPlatform;
use imgui_examples_ui::ExampleGui;

/// Wraps a platform and stops it after a fixed number of presented frames.
struct FrameLimit<P> {
    inner: P,
    remaining: u32,
}

impl<P: Platform> Platform for FrameLimit<P> {
    fn should_stop(&self) -> bool {
        self.remaining == 0 || self.inner.should_stop()
    }

    fn process_events(&mut self) {
        self.inner.process_events();
    }

    fn display_size(&self) -> [f32; 2] {
        self.inner.display_size()
    }

    fn framebuffer_size(&self) -> [f32; 2] {
        self.inner.framebuffer_size()
    }

    fn new_frame(&mut self, io: &mut dyn FrameSink) {
        self.inner.new_frame(io);
    }

    fn post_render(&mut self) {
        self.inner.post_render();
        self.remaining = self.remaining.saturating_sub(1);
    }

    fn clipboard_text(&self) -> Result<String> {
        self.inner.clipboard_text()
    }

    fn set_clipboard_text(&mut self, text: &str) {
        self.inner.set_clipboard_text(text);
    }
}

fn run_frames(client_api: ClientApi, frames: u32) -> LoopStats {
    let options = ExampleOptions {
        idle_ms: 0,
        show_showcase_window: true,
        ..ExampleOptions::default()
    };
    let mut gui = ExampleGui::new(&options);
    let platform = GlfwPlatform::new(client_api, &options).expect("failed to open window");
    let mut platform = FrameLimit {
        inner: platform,
        remaining: frames,
    };
    let mut renderer: Box<dyn Renderer> =
        create_renderer(&mut platform.inner, gui.context_mut()).expect("renderer init failed");

    frame_loop::run(
        &mut platform,
        &mut *renderer,
        &mut gui,
        options.idle_duration(),
    )
}

/// Options are read from the file named by the environment variable.
///
/// Kept as a single test since it mutates the process environment.
#[test]
fn test_options_from_env() {
    std::env::remove_var(CONFIG_ENV_VAR);
    assert_eq!(ExampleOptions::from_env().unwrap(), ExampleOptions::default());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "window_width": 1024, "title": "env config", "show_showcase_window": true }}"#
    )
    .unwrap();
    std::env::set_var(CONFIG_ENV_VAR, file.path());
    let options = ExampleOptions::from_env().unwrap();
    assert_eq!(options.window_width, 1024);
    assert_eq!(options.window_title(ClientApi::OpenGl2), "env config");
    assert!(options.show_showcase_window);

    std::env::set_var(CONFIG_ENV_VAR, "/nonexistent/imgui-examples.json");
    assert!(ExampleOptions::from_env().is_err());

    std::env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[ignore = "requires a display"]
fn test_opengl2_renders_frames() {
    let stats = run_frames(ClientApi::OpenGl2, 3);
    assert_eq!(stats.frames, 3);
}

#[test]
#[ignore = "requires a display"]
fn test_opengl3_renders_frames() {
    let stats = run_frames(ClientApi::OpenGl3, 3);
    assert_eq!(stats.frames, 3);
}
