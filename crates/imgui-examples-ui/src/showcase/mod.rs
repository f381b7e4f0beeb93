//! Showcase window: a tour of the widgets exposed by the bindings.
//!
//! Loosely follows the layout of the library's own demo window so the two can
//! be compared side by side.

pub mod tables;
pub mod widgets;

use dear_imgui_rs::{Condition, TreeNodeFlags, Ui, WindowFlags};

pub use tables::{build_tables_section, TableOptions};
pub use widgets::{build_widgets_section, WidgetsState};

/// Title of the showcase window.
pub const SHOWCASE_TITLE: &str = "Dear ImGui-rs Showcase";

/// Toggles from the "Window options" section.
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct WindowOptions {
    pub no_titlebar: bool,
    pub no_scrollbar: bool,
    pub no_menu: bool,
    pub no_move: bool,
    pub no_resize: bool,
    pub no_collapse: bool,
    pub no_nav: bool,
    pub no_background: bool,
    pub no_bring_to_front: bool,
    /// Removes the close button, which the window flags cannot express.
    pub no_close: bool,
}

impl WindowOptions {
    /// Window flags for the current toggles.
    #[must_use]
    pub fn flags(&self) -> WindowFlags {
        let mut flags = WindowFlags::empty();
        if self.no_titlebar {
            flags |= WindowFlags::NO_TITLE_BAR;
        }
        if self.no_scrollbar {
            flags |= WindowFlags::NO_SCROLLBAR;
        }
        if !self.no_menu {
            flags |= WindowFlags::MENU_BAR;
        }
        if self.no_move {
            flags |= WindowFlags::NO_MOVE;
        }
        if self.no_resize {
            flags |= WindowFlags::NO_RESIZE;
        }
        if self.no_collapse {
            flags |= WindowFlags::NO_COLLAPSE;
        }
        if self.no_nav {
            flags |= WindowFlags::NO_NAV;
        }
        if self.no_background {
            flags |= WindowFlags::NO_BACKGROUND;
        }
        if self.no_bring_to_front {
            flags |= WindowFlags::NO_BRING_TO_FRONT_ON_FOCUS;
        }
        flags
    }
}

/// State owned by the showcase window.
#[derive(Debug, Clone, Default)]
pub struct ShowcaseState {
    pub window: WindowOptions,
    pub widgets: WidgetsState,
    pub tables: TableOptions,
}

/// Builds the showcase window. `keep_open` is cleared by its close button.
pub fn build_showcase_window(ui: &Ui, state: &mut ShowcaseState, keep_open: &mut bool) {
    let mut window = ui
        .window(SHOWCASE_TITLE)
        .position([650.0, 20.0], Condition::FirstUseEver)
        .size([550.0, 680.0], Condition::FirstUseEver)
        .flags(state.window.flags());
    if !state.window.no_close {
        window = window.opened(keep_open);
    }
    // Collapsed windows skip the closure.
    window.build(|| {
        // Fixed label width, the rest goes to the widgets.
        let _item_width = ui.push_item_width(ui.current_font_size() * -12.0);

        if let Some(_menu_bar) = ui.begin_menu_bar() {
            for name in ["Menu", "Examples", "Tools"] {
                if let Some(_menu) = ui.begin_menu(name) {}
            }
        }

        ui.text(format!(
            "dear imgui says hello. (imgui-examples {})",
            env!("CARGO_PKG_VERSION")
        ));
        ui.spacing();

        build_help_section(ui);
        build_window_options_section(ui, &mut state.window);
        build_widgets_section(ui, &mut state.widgets);
        build_tables_section(ui, &mut state.tables);
    });
}

fn build_help_section(ui: &Ui) {
    if ui.collapsing_header("Help", TreeNodeFlags::empty()) {
        build_help_text(ui);
    }
}

fn build_help_text(ui: &Ui) {
    ui.text("ABOUT THIS DEMO:");
    ui.bullet_text("Sections below are demonstrating many aspects of the bindings.");
    ui.bullet_text(
        "This demo may not be complete. Refer to the \"native\" demo window for a full overview.",
    );
    ui.bullet_text("The \"Examples\" menu above leads to more demo contents.");
    ui.bullet_text(
        "The \"Tools\" menu above gives access to: About Box, Style Editor,\n\
         and Metrics (general purpose Dear ImGui debugging tool).",
    );
    ui.separator();

    ui.text("PROGRAMMER GUIDE:");
    ui.bullet_text("See build_showcase_window() in imgui-examples-ui. <- you are here!");
    ui.bullet_text("See comments in imgui.cpp.");
    ui.bullet_text("See the example binaries of the imgui-examples crate.");
    ui.bullet_text("Read the FAQ at http://www.dearimgui.org/faq/");
    ui.bullet_text("Set 'io.ConfigFlags |= NavEnableKeyboard' for keyboard controls.");
    ui.bullet_text("Set 'io.ConfigFlags |= NavEnableGamepad' for gamepad controls.");
    ui.separator();

    ui.text("USER GUIDE:");
    build_user_guide(ui);
}

fn build_user_guide(ui: &Ui) {
    ui.bullet_text("Double-click on title bar to collapse window.");
    ui.bullet_text(
        "Click and drag on lower corner to resize window\n\
         (double-click to auto fit window to its contents).",
    );
    ui.bullet_text("CTRL+Click on a slider or drag box to input value as text.");
    ui.bullet_text("TAB/SHIFT+TAB to cycle through keyboard editable fields.");

    ui.bullet_text("While inputing text:\n");
    ui.indent();
    ui.bullet_text("CTRL+Left/Right to word jump.");
    ui.bullet_text("CTRL+A or double-click to select all.");
    ui.bullet_text("CTRL+X/C/V to use clipboard cut/copy/paste.");
    ui.bullet_text("CTRL+Z,CTRL+Y to undo/redo.");
    ui.bullet_text("ESCAPE to revert.");
    ui.bullet_text(
        "You can apply arithmetic operators +,*,/ on numerical values.\nUse +- to subtract.",
    );
    ui.unindent();

    ui.bullet_text("With keyboard navigation enabled:");
    ui.indent();
    ui.bullet_text("Arrow keys to navigate.");
    ui.bullet_text("Space to activate a widget.");
    ui.bullet_text("Return to input text into a widget.");
    ui.bullet_text("Escape to deactivate a widget, close popup, exit child window.");
    ui.bullet_text("Alt to jump to the menu layer of a window.");
    ui.bullet_text("CTRL+Tab to select a window.");
    ui.unindent();
}

/// Horizontal start of each checkbox column in the "Window options" section.
const OPTION_COLUMNS: [f32; 3] = [0.0, 150.0, 300.0];

/// Builds the "Window options" section, three checkboxes per row.
pub fn build_window_options_section(ui: &Ui, options: &mut WindowOptions) {
    if ui.collapsing_header("Window options", TreeNodeFlags::empty()) {
        build_window_option_checkboxes(ui, options);
    }
}

fn build_window_option_checkboxes(ui: &Ui, options: &mut WindowOptions) {
    let rows: [[(&str, &mut bool); 3]; 3] = [
        [
            ("No titlebar", &mut options.no_titlebar),
            ("No scrollbar", &mut options.no_scrollbar),
            ("No menu", &mut options.no_menu),
        ],
        [
            ("No move", &mut options.no_move),
            ("No resize", &mut options.no_resize),
            ("No collapse", &mut options.no_collapse),
        ],
        [
            ("No close", &mut options.no_close),
            ("No nav", &mut options.no_nav),
            ("No background", &mut options.no_background),
        ],
    ];
    for row in rows {
        for (column, (label, value)) in row.into_iter().enumerate() {
            if column > 0 {
                ui.same_line_with_pos(OPTION_COLUMNS[column]);
            }
            ui.checkbox(label, value);
        }
    }
    ui.checkbox("No bring to front", &mut options.no_bring_to_front);
}
