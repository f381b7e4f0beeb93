//! The seam between a platform adapter and the GUI library's input state.
//!
//! A platform pushes one frame worth of input through [`FrameSink`]. The
//! production sink is [`dear_imgui_rs::Io`]; [`RecordingSink`] keeps the
//! pushed values for inspection instead.

use dear_imgui_rs::{sys, Io, Key, MouseButton};

/// Cursor position reported while the window has no focus.
///
/// Dear ImGui reads a position this far off-screen as "no pointer".
pub const OFFSCREEN_CURSOR: [f32; 2] = [-f32::MAX, -f32::MAX];

/// Number of mouse buttons forwarded to the GUI library.
pub const MOUSE_BUTTON_COUNT: usize = 3;

/// A key as seen by the GUI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiKey {
    /// A key identifier known to the GUI library.
    Named(Key),
    /// A platform key code with no GUI counterpart, passed through unchanged.
    Raw(i32),
}

/// Modifier state sent along with key transitions.
///
/// Dear ImGui derives its Ctrl/Shift/Alt/Super flags from these, not from the
/// left and right modifier keys themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub super_key: bool,
}

/// Mouse buttons tracked by the platform, in GUI button-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuiMouseButton {
    Primary,
    Secondary,
    Tertiary,
}

impl GuiMouseButton {
    /// All buttons, indexed by [`GuiMouseButton::index`].
    pub const ALL: [Self; MOUSE_BUTTON_COUNT] = [Self::Primary, Self::Secondary, Self::Tertiary];

    /// Slot of this button in per-frame button arrays.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Secondary => 1,
            Self::Tertiary => 2,
        }
    }

    fn to_imgui(self) -> MouseButton {
        match self {
            Self::Primary => MouseButton::Left,
            Self::Secondary => MouseButton::Right,
            Self::Tertiary => MouseButton::Middle,
        }
    }
}

/// Receives one frame of platform input.
pub trait FrameSink {
    /// Logical size of the display area.
    fn push_display_size(&mut self, size: [f32; 2]);

    /// Ratio between framebuffer pixels and display units.
    fn push_framebuffer_scale(&mut self, scale: [f32; 2]);

    /// Seconds elapsed since the previous frame.
    fn push_delta_time(&mut self, seconds: f32);

    /// Cursor position, or [`OFFSCREEN_CURSOR`].
    fn push_mouse_pos(&mut self, pos: [f32; 2]);

    /// Button state for this frame.
    fn push_mouse_button(&mut self, button: GuiMouseButton, down: bool);

    /// Scroll offset (horizontal, vertical).
    fn push_mouse_wheel(&mut self, delta: [f32; 2]);

    /// Modifier state, pushed before the key transition it belongs to.
    fn push_modifiers(&mut self, modifiers: KeyModifiers);

    /// A key transition.
    fn push_key(&mut self, key: GuiKey, down: bool);

    /// A typed character.
    fn push_char(&mut self, ch: char);
}

impl FrameSink for Io {
    fn push_display_size(&mut self, size: [f32; 2]) {
        self.set_display_size(size);
    }

    fn push_framebuffer_scale(&mut self, scale: [f32; 2]) {
        self.set_display_framebuffer_scale(scale);
    }

    fn push_delta_time(&mut self, seconds: f32) {
        self.set_delta_time(seconds);
    }

    fn push_mouse_pos(&mut self, pos: [f32; 2]) {
        self.add_mouse_pos_event(pos);
    }

    fn push_mouse_button(&mut self, button: GuiMouseButton, down: bool) {
        self.add_mouse_button_event(button.to_imgui(), down);
    }

    fn push_mouse_wheel(&mut self, delta: [f32; 2]) {
        self.add_mouse_wheel_event(delta);
    }

    #[allow(unsafe_code)]
    fn push_modifiers(&mut self, modifiers: KeyModifiers) {
        let io = std::ptr::from_mut(self).cast::<sys::ImGuiIO>();
        for (key, down) in [
            (sys::ImGuiMod_Ctrl, modifiers.ctrl),
            (sys::ImGuiMod_Shift, modifiers.shift),
            (sys::ImGuiMod_Alt, modifiers.alt),
            (sys::ImGuiMod_Super, modifiers.super_key),
        ] {
            // SAFETY: `Io` is a transparent wrapper around `ImGuiIO`.
            unsafe { sys::ImGuiIO_AddKeyEvent(io, key, down) };
        }
    }

    fn push_key(&mut self, key: GuiKey, down: bool) {
        match key {
            GuiKey::Named(key) => self.add_key_event(key, down),
            // Dear ImGui only accepts named keys.
            GuiKey::Raw(code) => log::trace!("dropping unmapped key code {code}"),
        }
    }

    fn push_char(&mut self, ch: char) {
        self.add_input_character(ch);
    }
}

/// A sink that records what a platform pushed during one or more frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    pub display_size: Option<[f32; 2]>,
    pub framebuffer_scale: Option<[f32; 2]>,
    pub delta_time: Option<f32>,
    pub mouse_pos: Option<[f32; 2]>,
    pub mouse_down: [Option<bool>; MOUSE_BUTTON_COUNT],
    pub wheel: Vec<[f32; 2]>,
    /// Modifier state pushed with each key transition, in push order.
    pub modifiers: Vec<KeyModifiers>,
    pub keys: Vec<(GuiKey, bool)>,
    pub chars: String,
}

impl RecordingSink {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `button` was last pushed as down.
    #[must_use]
    pub fn is_down(&self, button: GuiMouseButton) -> bool {
        self.mouse_down[button.index()].unwrap_or(false)
    }
}

impl FrameSink for RecordingSink {
    fn push_display_size(&mut self, size: [f32; 2]) {
        self.display_size = Some(size);
    }

    fn push_framebuffer_scale(&mut self, scale: [f32; 2]) {
        self.framebuffer_scale = Some(scale);
    }

    fn push_delta_time(&mut self, seconds: f32) {
        self.delta_time = Some(seconds);
    }

    fn push_mouse_pos(&mut self, pos: [f32; 2]) {
        self.mouse_pos = Some(pos);
    }

    fn push_mouse_button(&mut self, button: GuiMouseButton, down: bool) {
        self.mouse_down[button.index()] = Some(down);
    }

    fn push_mouse_wheel(&mut self, delta: [f32; 2]) {
        self.wheel.push(delta);
    }

    fn push_modifiers(&mut self, modifiers: KeyModifiers) {
        self.modifiers.push(modifiers);
    }

    fn push_key(&mut self, key: GuiKey, down: bool) {
        self.keys.push((key, down));
    }

    fn push_char(&mut self, ch: char) {
        self.chars.push(ch);
    }
}
