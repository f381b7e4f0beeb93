//! The main program loop shared by every example.

use std::time::Duration;

use crate::{FrameSink, Platform, Renderer};

/// The GUI side of one frame: widget evaluation and draw-data generation.
pub trait FrameSource {
    /// Per-frame output handed to the renderer.
    type DrawData: ?Sized;

    /// Input state the platform writes into before [`FrameSource::frame`].
    fn io_mut(&mut self) -> &mut dyn FrameSink;

    /// Evaluates all widgets for this frame and finalizes its draw data.
    fn frame(&mut self) -> Frame<'_, Self::DrawData>;
}

/// Output of [`FrameSource::frame`], valid until the next frame begins.
pub struct Frame<'a, D: ?Sized> {
    pub draw_data: &'a D,
    pub clear_color: [f32; 3],
}

/// Counters reported once the loop has returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Frames that went through render and present.
    pub frames: u64,
}

/// Runs frames until the platform signals to stop.
///
/// Each iteration polls events, pushes input into the GUI, evaluates the
/// widgets, clears and draws, presents, and then sleeps for `idle` to keep
/// CPU usage of the demo low.
pub fn run<P, R, G>(platform: &mut P, renderer: &mut R, gui: &mut G, idle: Duration) -> LoopStats
where
    P: Platform + ?Sized,
    G: FrameSource + ?Sized,
    R: Renderer<G::DrawData> + ?Sized,
{
    let mut stats = LoopStats::default();

    while !platform.should_stop() {
        platform.process_events();
        platform.new_frame(gui.io_mut());

        let frame = gui.frame();
        renderer.pre_render(frame.clear_color);
        renderer.render(
            platform.display_size(),
            platform.framebuffer_size(),
            frame.draw_data,
        );
        platform.post_render();
        stats.frames += 1;

        if !idle.is_zero() {
            std::thread::sleep(idle);
        }
    }

    log::info!("frame loop stopped after {} frames", stats.frames);
    stats
}
