//! Renderer for OpenGL 2.1 contexts.

use std::ffi::c_void;

use dear_imgui_rs::{Context, DrawData};
use imgui_examples_core::Renderer;

use crate::error::{GlVersion, RenderResult};
use crate::pipeline::GlPipeline;

/// Oldest context this renderer accepts.
pub const MIN_VERSION: GlVersion = GlVersion::new(2, 1);

/// Draws Dear ImGui frames on an OpenGL 2.1 (compatibility) context.
pub struct OpenGl2Renderer {
    pipeline: GlPipeline,
}

impl OpenGl2Renderer {
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
        log::info!("OpenGL2 renderer ready");
        Ok(Self { pipeline })
    }
}

impl Renderer for OpenGl2Renderer {
    fn pre_render(&mut self, clear_color: [f32; 3]) {
        self.pipeline.clear(clear_color);
    }

    fn render(&mut self, display_size: [f32; 2], framebuffer_size: [f32; 2], draw_data: &DrawData) {
        self.pipeline.draw(display_size, framebuffer_size, draw_data);
    }
}
