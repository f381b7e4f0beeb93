//! Display versus framebuffer sizes.
//!
//! The display size is in screen coordinates, the framebuffer size in pixels.
//! They differ under display scaling.

/// Framebuffer pixels per display unit, 1.0 on an axis with no display extent.
#[must_use]
pub fn framebuffer_scale(display_size: [f32; 2], framebuffer_size: [f32; 2]) -> [f32; 2] {
    let axis = |display: f32, framebuffer: f32| {
        if display > 0.0 {
            framebuffer / display
        } else {
            1.0
        }
    };
    [
        axis(display_size[0], framebuffer_size[0]),
        axis(display_size[1], framebuffer_size[1]),
    ]
}

/// Viewport of one frame in framebuffer pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramebufferGeometry {
    pub width: i32,
    pub height: i32,
    pub scale: [f32; 2],
}

impl FramebufferGeometry {
    /// Returns `None` when the framebuffer has no area, e.g. while minimized.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(display_size: [f32; 2], framebuffer_size: [f32; 2]) -> Option<Self> {
        let width = framebuffer_size[0] as i32;
        let height = framebuffer_size[1] as i32;
        if width <= 0 || height <= 0 {
            return None;
        }
        Some(Self {
            width,
            height,
            scale: framebuffer_scale(display_size, framebuffer_size),
        })
    }
}
