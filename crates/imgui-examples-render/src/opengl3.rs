//! Renderer for OpenGL 3.2 core contexts.

use std::ffi::c_void;

use dear_imgui_rs::{Context, DrawData};
use imgui_examples_core::Renderer;

use crate::error::{GlVersion, RenderResult};
use crate::pipeline::GlPipeline;

/// Oldest context this renderer accepts.
pub const MIN_VERSION: GlVersion = GlVersion::new(3, 2);

/// Draws Dear ImGui frames on an OpenGL 3.2 core profile context.
pub struct OpenGl3Renderer {
    pipeline: GlPipeline,
}

impl OpenGl3Renderer {
    /// Creates the renderer on the context current on this thread.
    ///
    /// # Safety
    ///
    /// `loader` must resolve GL function names against that context.
    #[allow(unsafe_code)]
    pub unsafe fn new<F>(loader: F, imgui: &mut Context) -> RenderResult<Self>
    where
        F: FnMut(&str) -> *const c_void,
    {
        let pipeline = unsafe { GlPipeline::load(loader, imgui, MIN_VERSION)? };
        log::info!("OpenGL3 renderer ready");
        Ok(Self { pipeline })
    }
}

impl Renderer for OpenGl3Renderer {
    fn pre_render(&mut self, clear_color: [f32; 3]) {
        self.pipeline.clear(clear_color);
    }

    fn render(&mut self, display_size: [f32; 2], framebuffer_size: [f32; 2], draw_data: &DrawData) {
        self.pipeline.draw(display_size, framebuffer_size, draw_data);
    }
}
