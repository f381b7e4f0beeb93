//! "Widgets" section of the showcase window.

use dear_imgui_rs::{TreeNodeFlags, Ui};

/// Items of the combo box; the selection is shared with the radio buttons.
pub const COMBO_ITEMS: [&str; 3] = ["one item", "two items", "three items"];

const RADIO_LABELS: [&str; 3] = ["radio a", "radio b", "radio c"];

/// Widget state shown in the "Basic" node.
#[derive(Debug, Clone, Default)]
pub struct WidgetsState {
    /// Number of clicks on the basic button.
    pub button_clicks: u32,
    pub check: bool,
    /// Index into [`COMBO_ITEMS`], also the selected radio button.
    pub selection: usize,
}

impl WidgetsState {
    /// The thank-you text follows every odd click.
    #[must_use]
    pub fn show_thanks(&self) -> bool {
        self.button_clicks % 2 == 1
    }

    /// Whether radio button `index` shows as selected.
    #[must_use]
    pub fn radio_selected(&self, index: usize) -> bool {
        self.selection == index
    }
}

/// Builds the "Widgets" collapsing header.
pub fn build_widgets_section(ui: &Ui, state: &mut WidgetsState) {
    if !ui.collapsing_header("Widgets", TreeNodeFlags::empty()) {
        return;
    }

    if let Some(_node) = ui.tree_node("Basic") {
        build_basic_widgets(ui, state);
    }
}

fn build_basic_widgets(ui: &Ui, state: &mut WidgetsState) {
    if ui.button("Button") {
        state.button_clicks += 1;
    }
    if state.show_thanks() {
        ui.same_line();
        ui.text("Thanks for clicking me!");
    }

    ui.checkbox("checkbox", &mut state.check);

    for (i, label) in RADIO_LABELS.iter().enumerate() {
        if i > 0 {
            ui.same_line();
        }
        if ui.radio_button_bool(label, state.radio_selected(i)) {
            state.selection = i;
        }
    }

    ui.combo_simple_string("combo", &mut state.selection, &COMBO_ITEMS);
}
