//! Per-frame input queue.
//!
//! Window events are pushed while the platform polls and drained once when
//! the next frame begins. Mouse presses are latched until that drain so a
//! click shorter than one frame still reads as "down" for one frame.
//!
//! Every key transition carries the modifier state at that moment. For the
//! modifier keys themselves the state follows which sides are held, because
//! GLFW reports the flags inconsistently across platforms on those events.

use glfw::{Action, Key as GlfwKey, Modifiers, MouseButton, WindowEvent};
use imgui_examples_core::{
    FrameSink, GuiKey, GuiMouseButton, KeyModifiers, MOUSE_BUTTON_COUNT, OFFSCREEN_CURSOR,
};

use crate::keymap::translate_key;

/// Pointer state polled from the window at frame start.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub focused: bool,
    pub cursor: [f32; 2],
    /// Live button state, indexed by [`GuiMouseButton::index`].
    pub buttons: [bool; MOUSE_BUTTON_COUNT],
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum QueuedInput {
    Wheel([f32; 2]),
    Key(KeyModifiers, GuiKey, bool),
    Char(char),
}

/// Modifier flags in [`ModifierSides::held`] order.
const MODIFIER_FLAGS: [Modifiers; 4] = [
    Modifiers::Control,
    Modifiers::Shift,
    Modifiers::Alt,
    Modifiers::Super,
];

/// Slot of a modifier key: (index into [`MODIFIER_FLAGS`], side).
fn modifier_slot(key: GlfwKey) -> Option<(usize, usize)> {
    match key {
        GlfwKey::LeftControl => Some((0, 0)),
        GlfwKey::RightControl => Some((0, 1)),
        GlfwKey::LeftShift => Some((1, 0)),
        GlfwKey::RightShift => Some((1, 1)),
        GlfwKey::LeftAlt => Some((2, 0)),
        GlfwKey::RightAlt => Some((2, 1)),
        GlfwKey::LeftSuper => Some((3, 0)),
        GlfwKey::RightSuper => Some((3, 1)),
        _ => None,
    }
}

/// Left and right modifier keys currently held.
#[derive(Debug, Default)]
struct ModifierSides {
    held: [[bool; 2]; 4],
}

impl ModifierSides {
    /// Applies one key transition and returns the resulting modifier state.
    fn apply(&mut self, key: GlfwKey, down: bool, reported: Modifiers) -> KeyModifiers {
        let slot = modifier_slot(key);
        let mut active = [false; 4];
        for (i, flag) in MODIFIER_FLAGS.into_iter().enumerate() {
            match slot {
                Some((kind, side)) if kind == i => {
                    self.held[i][side] = down;
                    active[i] = self.held[i][0] || self.held[i][1];
                }
                _ => {
                    // Releases missed while unfocused are dropped here.
                    if !reported.contains(flag) {
                        self.held[i] = [false; 2];
                    }
                    active[i] = reported.contains(flag);
                }
            }
        }
        KeyModifiers {
            ctrl: active[0],
            shift: active[1],
            alt: active[2],
            super_key: active[3],
        }
    }
}

/// Collects window events between two frames.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<QueuedInput>,
    just_pressed: [bool; MOUSE_BUTTON_COUNT],
    modifiers: ModifierSides,
}

/// The GUI button tracked for a GLFW button, if any.
#[must_use]
pub fn gui_button(button: MouseButton) -> Option<GuiMouseButton> {
    match button {
        MouseButton::Button1 => Some(GuiMouseButton::Primary),
        MouseButton::Button2 => Some(GuiMouseButton::Secondary),
        MouseButton::Button3 => Some(GuiMouseButton::Tertiary),
        _ => None,
    }
}

/// The GLFW button polled for a GUI button.
#[must_use]
pub fn glfw_button(button: GuiMouseButton) -> MouseButton {
    match button {
        GuiMouseButton::Primary => MouseButton::Button1,
        GuiMouseButton::Secondary => MouseButton::Button2,
        GuiMouseButton::Tertiary => MouseButton::Button3,
    }
}

impl InputQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a window event. Events the GUI has no use for are ignored.
    pub fn push(&mut self, event: &WindowEvent) {
        match *event {
            WindowEvent::MouseButton(button, Action::Press, _) => {
                if let Some(button) = gui_button(button) {
                    self.just_pressed[button.index()] = true;
                }
            }
            #[allow(clippy::cast_possible_truncation)]
            WindowEvent::Scroll(x, y) => self.pending.push(QueuedInput::Wheel([x as f32, y as f32])),
            WindowEvent::Key(key, _, Action::Press, mods) => self.push_key(key, true, mods),
            WindowEvent::Key(key, _, Action::Release, mods) => self.push_key(key, false, mods),
            WindowEvent::Char(ch) => self.pending.push(QueuedInput::Char(ch)),
            _ => {}
        }
    }

    fn push_key(&mut self, key: GlfwKey, down: bool, mods: Modifiers) {
        let modifiers = self.modifiers.apply(key, down, mods);
        self.pending.push(QueuedInput::Key(modifiers, translate_key(key), down));
    }

    /// Writes everything collected since the previous flush into `sink`,
    /// followed by the pointer state, and consumes the button latches.
    pub fn flush(&mut self, pointer: &PointerState, sink: &mut dyn FrameSink) {
        for input in self.pending.drain(..) {
            match input {
                QueuedInput::Wheel(delta) => sink.push_mouse_wheel(delta),
                QueuedInput::Key(modifiers, key, down) => {
                    sink.push_modifiers(modifiers);
                    sink.push_key(key, down);
                }
                QueuedInput::Char(ch) => sink.push_char(ch),
            }
        }

        if pointer.focused {
            sink.push_mouse_pos(pointer.cursor);
        } else {
            sink.push_mouse_pos(OFFSCREEN_CURSOR);
        }

        for button in GuiMouseButton::ALL {
            let i = button.index();
            sink.push_mouse_button(button, self.just_pressed[i] || pointer.buttons[i]);
            self.just_pressed[i] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use dear_imgui_rs::Key;
    use imgui_examples_core::RecordingSink;
    use proptest::prelude::*;

    use super::*;

    fn press(button: MouseButton) -> WindowEvent {
        WindowEvent::MouseButton(button, Action::Press, Modifiers::empty())
    }

    fn release(button: MouseButton) -> WindowEvent {
        WindowEvent::MouseButton(button, Action::Release, Modifiers::empty())
    }

    fn focused_at(x: f32, y: f32) -> PointerState {
        PointerState {
            focused: true,
            cursor: [x, y],
            buttons: [false; MOUSE_BUTTON_COUNT],
        }
    }

    #[test]
    fn test_short_click_reads_down_for_one_frame() {
        let mut queue = InputQueue::new();
        queue.push(&press(MouseButton::Button1));
        queue.push(&release(MouseButton::Button1));

        let mut first = RecordingSink::new();
        queue.flush(&focused_at(1.0, 1.0), &mut first);
        assert!(first.is_down(GuiMouseButton::Primary));
        assert!(!first.is_down(GuiMouseButton::Secondary));

        let mut second = RecordingSink::new();
        queue.flush(&focused_at(1.0, 1.0), &mut second);
        assert!(!second.is_down(GuiMouseButton::Primary));
    }

    #[test]
    fn test_live_state_without_events() {
        let mut queue = InputQueue::new();
        let mut pointer = focused_at(0.0, 0.0);
        pointer.buttons[GuiMouseButton::Tertiary.index()] = true;

        let mut sink = RecordingSink::new();
        queue.flush(&pointer, &mut sink);
        assert!(sink.is_down(GuiMouseButton::Tertiary));
        assert!(!sink.is_down(GuiMouseButton::Primary));
    }

    #[test]
    fn test_extra_buttons_ignored() {
        let mut queue = InputQueue::new();
        queue.push(&press(MouseButton::Button5));
        assert_eq!(queue.just_pressed, [false; MOUSE_BUTTON_COUNT]);
    }

    #[test]
    fn test_unfocused_cursor_is_offscreen() {
        let mut queue = InputQueue::new();
        let pointer = PointerState {
            focused: false,
            cursor: [120.0, 48.0],
            buttons: [false; MOUSE_BUTTON_COUNT],
        };

        let mut sink = RecordingSink::new();
        queue.flush(&pointer, &mut sink);
        assert_eq!(sink.mouse_pos, Some(OFFSCREEN_CURSOR));
    }

    #[test]
    fn test_focused_cursor_is_forwarded() {
        let mut queue = InputQueue::new();
        let mut sink = RecordingSink::new();
        queue.flush(&focused_at(120.0, 48.0), &mut sink);
        assert_eq!(sink.mouse_pos, Some([120.0, 48.0]));
    }

    #[test]
    fn test_keys_scroll_and_chars_in_order() {
        let mut queue = InputQueue::new();
        queue.push(&WindowEvent::Key(GlfwKey::Tab, 15, Action::Press, Modifiers::empty()));
        queue.push(&WindowEvent::Key(GlfwKey::Tab, 15, Action::Repeat, Modifiers::empty()));
        queue.push(&WindowEvent::Scroll(0.0, -2.0));
        queue.push(&WindowEvent::Char('ß'));
        queue.push(&WindowEvent::Key(GlfwKey::Num7, 16, Action::Release, Modifiers::empty()));
        assert_eq!(queue.pending.len(), 4);

        let mut sink = RecordingSink::new();
        queue.flush(&focused_at(0.0, 0.0), &mut sink);
        assert!(queue.pending.is_empty());
        assert_eq!(
            sink.keys,
            vec![
                (GuiKey::Named(Key::Tab), true),
                (GuiKey::Raw(GlfwKey::Num7 as i32), false),
            ]
        );
        assert_eq!(sink.wheel, vec![[0.0, -2.0]]);
        assert_eq!(sink.chars, "ß");
    }

    fn key(key: GlfwKey, action: Action, mods: Modifiers) -> WindowEvent {
        WindowEvent::Key(key, 0, action, mods)
    }

    fn flushed(queue: &mut InputQueue) -> RecordingSink {
        let mut sink = RecordingSink::new();
        queue.flush(&focused_at(0.0, 0.0), &mut sink);
        sink
    }

    #[test]
    fn test_control_press_sets_ctrl_modifier() {
        let mut queue = InputQueue::new();
        queue.push(&key(GlfwKey::LeftControl, Action::Press, Modifiers::Control));

        let sink = flushed(&mut queue);
        assert_eq!(sink.keys, vec![(GuiKey::Named(Key::LeftCtrl), true)]);
        assert_eq!(
            sink.modifiers,
            vec![KeyModifiers {
                ctrl: true,
                ..KeyModifiers::default()
            }]
        );
    }

    #[test]
    fn test_releasing_one_side_keeps_modifier_down() {
        let mut queue = InputQueue::new();
        queue.push(&key(GlfwKey::LeftControl, Action::Press, Modifiers::Control));
        queue.push(&key(GlfwKey::RightControl, Action::Press, Modifiers::Control));
        // Some platforms report the flags after the release, some before.
        queue.push(&key(GlfwKey::RightControl, Action::Release, Modifiers::empty()));

        let sink = flushed(&mut queue);
        assert_eq!(sink.keys.len(), 3);
        assert!(sink.modifiers.iter().all(|m| m.ctrl));

        queue.push(&key(GlfwKey::LeftControl, Action::Release, Modifiers::Control));
        let sink = flushed(&mut queue);
        assert_eq!(sink.keys, vec![(GuiKey::Named(Key::LeftCtrl), false)]);
        assert!(!sink.modifiers[0].ctrl);
    }

    #[test]
    fn test_shortcut_key_carries_reported_modifiers() {
        let mut queue = InputQueue::new();
        queue.push(&key(GlfwKey::C, Action::Press, Modifiers::Control | Modifiers::Shift));
        queue.push(&key(GlfwKey::C, Action::Release, Modifiers::empty()));

        let sink = flushed(&mut queue);
        assert_eq!(sink.modifiers.len(), 2);
        assert!(sink.modifiers[0].ctrl && sink.modifiers[0].shift);
        assert!(!sink.modifiers[0].alt && !sink.modifiers[0].super_key);
        assert_eq!(sink.modifiers[1], KeyModifiers::default());
    }

    #[test]
    fn test_modifier_flags_clear_missed_releases() {
        let mut queue = InputQueue::new();
        queue.push(&key(GlfwKey::LeftAlt, Action::Press, Modifiers::Alt));
        // The release happened while another window had focus.
        queue.push(&key(GlfwKey::A, Action::Press, Modifiers::empty()));
        queue.push(&key(GlfwKey::RightAlt, Action::Release, Modifiers::empty()));

        let sink = flushed(&mut queue);
        assert!(sink.modifiers[0].alt);
        assert!(!sink.modifiers[1].alt);
        assert!(!sink.modifiers[2].alt);
    }

    #[test]
    fn test_button_mapping_round_trips() {
        for button in GuiMouseButton::ALL {
            assert_eq!(gui_button(glfw_button(button)), Some(button));
        }
    }

    fn any_button() -> impl Strategy<Value = MouseButton> {
        prop_oneof![
            Just(MouseButton::Button1),
            Just(MouseButton::Button2),
            Just(MouseButton::Button3),
        ]
    }

    proptest! {
        #[test]
        fn prop_pressed_buttons_read_down_next_frame(
            events in prop::collection::vec((any_button(), any::<bool>()), 0..32),
            live in prop::array::uniform3(any::<bool>()),
        ) {
            let mut queue = InputQueue::new();
            let mut pressed = [false; MOUSE_BUTTON_COUNT];
            for (button, is_press) in &events {
                if *is_press {
                    queue.push(&press(*button));
                    if let Some(gui) = gui_button(*button) {
                        pressed[gui.index()] = true;
                    }
                } else {
                    queue.push(&release(*button));
                }
            }

            let pointer = PointerState { focused: true, cursor: [0.0, 0.0], buttons: live };
            let mut sink = RecordingSink::new();
            queue.flush(&pointer, &mut sink);
            for button in GuiMouseButton::ALL {
                let i = button.index();
                prop_assert_eq!(sink.is_down(button), pressed[i] || live[i]);
            }

            // Latches are consumed; the following frame reports live state only.
            let mut next = RecordingSink::new();
            queue.flush(&pointer, &mut next);
            for button in GuiMouseButton::ALL {
                prop_assert_eq!(next.is_down(button), live[button.index()]);
            }
        }
    }
}
