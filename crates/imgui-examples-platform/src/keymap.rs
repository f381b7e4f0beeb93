//! Static translation from GLFW key codes to GUI key identifiers.

use dear_imgui_rs::Key;
use glfw::Key as GlfwKey;
use imgui_examples_core::GuiKey;

/// The mapping table. Each GLFW key appears at most once.
pub const KEY_MAP: [(GlfwKey, Key); 67] = [
    (GlfwKey::Tab, Key::Tab),
    (GlfwKey::Left, Key::LeftArrow),
    (GlfwKey::Right, Key::RightArrow),
    (GlfwKey::Up, Key::UpArrow),
    (GlfwKey::Down, Key::DownArrow),
    (GlfwKey::PageUp, Key::PageUp),
    (GlfwKey::PageDown, Key::PageDown),
    (GlfwKey::Home, Key::Home),
    (GlfwKey::End, Key::End),
    (GlfwKey::Insert, Key::Insert),
    (GlfwKey::Delete, Key::Delete),
    (GlfwKey::Backspace, Key::Backspace),
    (GlfwKey::Space, Key::Space),
    (GlfwKey::Enter, Key::Enter),
    (GlfwKey::Escape, Key::Escape),
    (GlfwKey::A, Key::A),
    (GlfwKey::B, Key::B),
    (GlfwKey::C, Key::C),
    (GlfwKey::D, Key::D),
    (GlfwKey::E, Key::E),
    (GlfwKey::F, Key::F),
    (GlfwKey::G, Key::G),
    (GlfwKey::H, Key::H),
    (GlfwKey::I, Key::I),
    (GlfwKey::J, Key::J),
    (GlfwKey::K, Key::K),
    (GlfwKey::L, Key::L),
    (GlfwKey::M, Key::M),
    (GlfwKey::N, Key::N),
    (GlfwKey::O, Key::O),
    (GlfwKey::P, Key::P),
    (GlfwKey::Q, Key::Q),
    (GlfwKey::R, Key::R),
    (GlfwKey::S, Key::S),
    (GlfwKey::T, Key::T),
    (GlfwKey::U, Key::U),
    (GlfwKey::V, Key::V),
    (GlfwKey::W, Key::W),
    (GlfwKey::X, Key::X),
    (GlfwKey::Y, Key::Y),
    (GlfwKey::Z, Key::Z),
    (GlfwKey::F1, Key::F1),
    (GlfwKey::F2, Key::F2),
    (GlfwKey::F3, Key::F3),
    (GlfwKey::F4, Key::F4),
    (GlfwKey::F5, Key::F5),
    (GlfwKey::F6, Key::F6),
    (GlfwKey::F7, Key::F7),
    (GlfwKey::F8, Key::F8),
    (GlfwKey::F9, Key::F9),
    (GlfwKey::F10, Key::F10),
    (GlfwKey::F11, Key::F11),
    (GlfwKey::F12, Key::F12),
    // The modifier flags themselves travel separately, see `KeyModifiers`.
    (GlfwKey::LeftControl, Key::LeftCtrl),
    (GlfwKey::RightControl, Key::RightCtrl),
    (GlfwKey::LeftShift, Key::LeftShift),
    (GlfwKey::RightShift, Key::RightShift),
    (GlfwKey::LeftAlt, Key::LeftAlt),
    (GlfwKey::RightAlt, Key::RightAlt),
    (GlfwKey::LeftSuper, Key::LeftSuper),
    (GlfwKey::RightSuper, Key::RightSuper),
    (GlfwKey::Menu, Key::Menu),
    (GlfwKey::Minus, Key::Minus),
    (GlfwKey::Equal, Key::Equal),
    (GlfwKey::Comma, Key::Comma),
    (GlfwKey::Period, Key::Period),
    (GlfwKey::Slash, Key::Slash),
];

/// Translates a GLFW key.
///
/// Keys without a GUI counterpart pass through as [`GuiKey::Raw`] carrying the
/// GLFW key code unchanged.
#[must_use]
pub fn translate_key(key: GlfwKey) -> GuiKey {
    match mapped_key(key) {
        Some(named) => GuiKey::Named(named),
        None => GuiKey::Raw(key as i32),
    }
}

/// The GUI key for `key`, if the table has one.
#[must_use]
pub fn mapped_key(key: GlfwKey) -> Option<Key> {
    KEY_MAP
        .iter()
        .find(|(glfw_key, _)| *glfw_key == key)
        .map(|&(_, named)| named)
}
