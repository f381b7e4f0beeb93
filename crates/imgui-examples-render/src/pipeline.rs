//! GL state shared by both renderer generations.

use std::ffi::c_void;

use dear_imgui_glow::glow::{self, HasContext};
use dear_imgui_glow::GlowRenderer;
use dear_imgui_rs::{Context, DrawData};
use imgui_examples_core::FramebufferGeometry;

use crate::error::{require_version, GlVersion, RenderError, RenderResult};

/// Function table of the current context plus the draw-list backend.
pub(crate) struct GlPipeline {
    gl: glow::Context,
    backend: GlowRenderer,
}

impl GlPipeline {
    /// Loads the GL function table, checks the context version and sets up
    /// the draw-list backend (shaders, buffers, font atlas texture).
    ///
    /// # Safety
    ///
    /// `loader` must resolve GL function names against the context that is
    /// current on the calling thread.
    #[allow(unsafe_code)]
    pub(crate) unsafe fn load<F>(
        mut loader: F,
        imgui: &mut Context,
        required: GlVersion,
    ) -> RenderResult<Self>
    where
        F: FnMut(&str) -> *const c_void,
    {
        let gl = unsafe { glow::Context::from_loader_function(&mut loader) };
        let version = gl.version();
        let actual = GlVersion::new(version.major, version.minor);
        log::debug!("GL context {actual} ({})", version.vendor_info);
        require_version(actual, required)?;

        // The backend owns its own function table for the same context.
        let backend_gl = unsafe { glow::Context::from_loader_function(&mut loader) };
        let backend = GlowRenderer::new(backend_gl, imgui)
            .map_err(|err| RenderError::Backend(format!("{err:?}")))?;

        Ok(Self { gl, backend })
    }

    #[allow(unsafe_code)]
    pub(crate) fn clear(&self, color: [f32; 3]) {
        unsafe {
            self.gl.clear_color(color[0], color[1], color[2], 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    #[allow(unsafe_code)]
    pub(crate) fn draw(
        &mut self,
        display_size: [f32; 2],
        framebuffer_size: [f32; 2],
        draw_data: &DrawData,
    ) {
        let Some(geometry) = FramebufferGeometry::new(display_size, framebuffer_size) else {
            return;
        };
        unsafe {
            self.gl.viewport(0, 0, geometry.width, geometry.height);
        }
        if let Err(err) = self.backend.render(draw_data) {
            log::error!("failed to render draw data: {err:?}");
        }
    }
}
