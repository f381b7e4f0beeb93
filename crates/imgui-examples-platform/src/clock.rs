//! Frame timing from the GLFW timer.

/// Turns absolute timer readings into per-frame time steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: f64,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `now` (seconds) and returns the step since the previous reading.
    ///
    /// The first reading yields no step, and neither does a reading that did
    /// not advance, so the GUI keeps its previous delta time.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick(&mut self, now: f64) -> Option<f32> {
        let step = (self.last > 0.0 && now > self.last).then(|| (now - self.last) as f32);
        self.last = now;
        step
    }
}
