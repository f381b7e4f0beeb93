//! Dear ImGui example applications on GLFW.
//!
//! Each binary picks a [`ClientApi`]; [`run_example`] composes the matching
//! platform and renderer, runs the frame loop until the window is closed and
//! tears everything down again.
//!
//! # Example
//!
//! ```no_run
//! use imgui_examples::{run_example, ClientApi};
//!
//! fn main() -> imgui_examples::Result<()> {
//!     let stats = run_example(ClientApi::OpenGl3)?;
//!     println!("rendered {} frames", stats.frames);
//!     Ok(())
//! }
//! ```

#![allow(clippy::missing_errors_doc)]

use imgui_examples_core::dear_imgui_rs::Context;
use imgui_examples_core::frame_loop;
use imgui_examples_platform::GlfwPlatform;
use imgui_examples_render::{OpenGl2Renderer, OpenGl3Renderer};
use imgui_examples_ui::ExampleGui;

pub use imgui_examples_core::{
    ClientApi, ExampleError, ExampleOptions, LoopStats, Platform, Renderer, Result,
};

/// Runs the example for `client_api` until its window is closed.
///
/// Options come from [`ExampleOptions::from_env`]. Everything created here is
/// released before this function returns, on success and on failure.
pub fn run_example(client_api: ClientApi) -> Result<LoopStats> {
    let _ = env_logger::try_init();

    let options = ExampleOptions::from_env()?;
    let mut gui = ExampleGui::new(&options);
    let mut platform = GlfwPlatform::new(client_api, &options)?;
    // Declared after the platform so it is dropped while the GL context lives.
    let mut renderer = create_renderer(&mut platform, gui.context_mut())?;

    log::info!("running {} example", platform.client_api());
    Ok(frame_loop::run(
        &mut platform,
        &mut *renderer,
        &mut gui,
        options.idle_duration(),
    ))
}

/// Creates the renderer matching the platform's client API on its context.
#[allow(unsafe_code)]
pub fn create_renderer(
    platform: &mut GlfwPlatform,
    imgui: &mut Context,
) -> Result<Box<dyn Renderer>> {
    let client_api = platform.client_api();
    let loader = |name: &str| platform.proc_address(name);

    // SAFETY: `GlfwPlatform::new` made the window's context current on this
    // thread and the loader resolves against that window.
    let renderer: Box<dyn Renderer> = match client_api {
        ClientApi::OpenGl2 => Box::new(unsafe { OpenGl2Renderer::new(loader, imgui)? }),
        ClientApi::OpenGl3 => Box::new(unsafe { OpenGl3Renderer::new(loader, imgui)? }),
    };
    Ok(renderer)
}

/// Process entry point shared by the binaries.
///
/// Exits with status -1 and the error on standard error when the platform or
/// renderer cannot be initialized.
pub fn main_for(client_api: ClientApi) {
    if let Err(err) = run_example(client_api) {
        eprintln!("{err}");
        std::process::exit(-1);
    }
}
