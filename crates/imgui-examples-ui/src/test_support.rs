//! Headless GUI frames for unit tests.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use dear_imgui_rs::{BackendFlags, Context, Ui};

/// Serializes tests that create a GUI context; only one may be active.
pub(crate) fn context_guard() -> MutexGuard<'static, ()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Prepares `imgui` to run frames without a window or renderer.
pub(crate) fn make_headless(imgui: &mut Context) {
    let _ = imgui.set_ini_filename::<std::path::PathBuf>(None);
    // Lets the font atlas build itself without a texture upload.
    let flags = imgui.io().backend_flags() | BackendFlags::RENDERER_HAS_TEXTURES;
    imgui.io_mut().set_backend_flags(flags);
    imgui.io_mut().set_display_size([1280.0, 720.0]);
    imgui.io_mut().set_delta_time(1.0 / 60.0);
}

/// Runs `build` inside one headless frame and renders it.
pub(crate) fn with_headless_ui(build: impl FnOnce(&Ui)) {
    let _guard = context_guard();
    let mut imgui = Context::create();
    make_headless(&mut imgui);
    let ui: &Ui = imgui.frame();
    build(ui);
    let _ = imgui.render();
}
