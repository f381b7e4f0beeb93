//! Platform implementation on top of GLFW.

use std::ffi::c_void;

use glfw::{
    Action, Context as _, Glfw, GlfwReceiver, OpenGlProfileHint, PWindow, SwapInterval,
    WindowEvent, WindowHint, WindowMode,
};
use imgui_examples_core::geometry::framebuffer_scale;
use imgui_examples_core::{
    ClientApi, ExampleError, ExampleOptions, FrameSink, GuiMouseButton, Platform, Result,
    MOUSE_BUTTON_COUNT,
};

use crate::clock::FrameClock;
use crate::input_queue::{glfw_button, InputQueue, PointerState};

/// A GLFW window with an OpenGL context, feeding input to the GUI.
pub struct GlfwPlatform {
    window: PWindow,
    events: GlfwReceiver<(f64, WindowEvent)>,
    glfw: Glfw,
    input: InputQueue,
    clock: FrameClock,
    client_api: ClientApi,
}

fn log_glfw_error(error: glfw::Error, description: String) {
    log::error!("glfw error {error:?}: {description}");
}

impl GlfwPlatform {
    /// Initializes GLFW and opens a window whose context matches `client_api`.
    ///
    /// The context is made current on the calling thread, which must be the
    /// main thread.
    pub fn new(client_api: ClientApi, options: &ExampleOptions) -> Result<Self> {
        let mut glfw = glfw::init(log_glfw_error)
            .map_err(|err| ExampleError::PlatformInit(format!("{err:?}")))?;

        let (major, minor) = client_api.context_version();
        glfw.window_hint(WindowHint::ContextVersion(major, minor));
        if client_api == ClientApi::OpenGl3 {
            glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
            glfw.window_hint(WindowHint::OpenGlForwardCompat(true));
        }

        let title = options.window_title(client_api);
        let (mut window, events) = glfw
            .create_window(
                options.window_width,
                options.window_height,
                &title,
                WindowMode::Windowed,
            )
            .ok_or(ExampleError::WindowCreation)?;

        window.make_current();
        glfw.set_swap_interval(match options.swap_interval {
            0 => SwapInterval::None,
            n => SwapInterval::Sync(n),
        });

        window.set_mouse_button_polling(true);
        window.set_scroll_polling(true);
        window.set_key_polling(true);
        window.set_char_polling(true);

        log::info!(
            "created {}x{} window \"{title}\" for {client_api}",
            options.window_width,
            options.window_height
        );

        Ok(Self {
            window,
            events,
            glfw,
            input: InputQueue::new(),
            clock: FrameClock::new(),
            client_api,
        })
    }

    /// The client API the window's context was created for.
    #[must_use]
    pub fn client_api(&self) -> ClientApi {
        self.client_api
    }

    /// Address of a GL function in the window's context, for loader closures.
    pub fn proc_address(&mut self, name: &str) -> *const c_void {
        self.window.get_proc_address(name)
    }

    fn pointer_state(&self) -> PointerState {
        let mut buttons = [false; MOUSE_BUTTON_COUNT];
        for button in GuiMouseButton::ALL {
            buttons[button.index()] =
                self.window.get_mouse_button(glfw_button(button)) == Action::Press;
        }
        #[allow(clippy::cast_possible_truncation)]
        let cursor = {
            let (x, y) = self.window.get_cursor_pos();
            [x as f32, y as f32]
        };
        PointerState {
            focused: self.window.is_focused(),
            cursor,
            buttons,
        }
    }
}

impl Platform for GlfwPlatform {
    fn should_stop(&self) -> bool {
        self.window.should_close()
    }

    fn process_events(&mut self) {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            self.input.push(&event);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn display_size(&self) -> [f32; 2] {
        let (w, h) = self.window.get_size();
        [w as f32, h as f32]
    }

    #[allow(clippy::cast_precision_loss)]
    fn framebuffer_size(&self) -> [f32; 2] {
        let (w, h) = self.window.get_framebuffer_size();
        [w as f32, h as f32]
    }

    fn new_frame(&mut self, io: &mut dyn FrameSink) {
        // Every frame, to follow window resizes.
        let display_size = self.display_size();
        io.push_display_size(display_size);
        io.push_framebuffer_scale(framebuffer_scale(display_size, self.framebuffer_size()));

        if let Some(step) = self.clock.tick(self.glfw.get_time()) {
            io.push_delta_time(step);
        }

        let pointer = self.pointer_state();
        self.input.flush(&pointer, io);
    }

    fn post_render(&mut self) {
        self.window.swap_buffers();
    }

    fn clipboard_text(&self) -> Result<String> {
        self.window
            .get_clipboard_string()
            .ok_or(ExampleError::ClipboardUnavailable)
    }

    fn set_clipboard_text(&mut self, text: &str) {
        self.window.set_clipboard_string(text);
    }
}

impl Drop for GlfwPlatform {
    fn drop(&mut self) {
        log::info!("closing {} window", self.client_api);
    }
}
