//! "Tables" section of the showcase window.

use dear_imgui_rs::{TableColumnFlags, TableFlags, TreeNodeFlags, Ui};

/// Column headers of the people table.
pub const PEOPLE_HEADER: [&str; 3] = ["Name", "Favourite Food", "Favourite Colour"];

/// Rows of the people table.
pub const PEOPLE: [[&str; 3]; 4] = [
    ["Eric", "Bannana", "Yellow"],
    ["Peter", "Apple", "Red"],
    ["Bruce", "Liquorice", "Black"],
    ["Aaron", "Chocolates", "Blue"],
];

/// Toggles applied to the people table.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    pub background: bool,
    pub borders: bool,
    /// Only takes effect while `borders` is on.
    pub no_inner_borders: bool,
    pub header: bool,
}

impl TableOptions {
    /// Table flags for the current toggles.
    #[must_use]
    pub fn flags(&self) -> TableFlags {
        let mut flags = TableFlags::empty();
        if self.background {
            flags |= TableFlags::ROW_BG;
        }
        if self.borders {
            flags |= TableFlags::BORDERS;
            if self.no_inner_borders {
                flags |= TableFlags::NO_BORDERS_IN_BODY;
            }
        }
        flags
    }
}

/// Builds the "Tables" collapsing header.
pub fn build_tables_section(ui: &Ui, options: &mut TableOptions) {
    if !ui.collapsing_header("Tables", TreeNodeFlags::empty()) {
        return;
    }

    if let Some(_node) = ui.tree_node("Rows & Columns") {
        build_rows_and_columns(ui);
    }
    if let Some(_node) = ui.tree_node("Options") {
        build_table_options(ui, options);
        build_people_table(ui, options.flags(), options.header);
    }
}

fn build_rows_and_columns(ui: &Ui) {
    let Some(_table) = ui.begin_table("tableRowsAndColumns", 3) else {
        return;
    };
    for row in 0..4 {
        ui.table_next_row();
        for column in 0..3 {
            ui.table_set_column_index(column);
            ui.text(format!("Row {row} Column {column}"));
        }
    }
}

// A table here only lays out the option checkboxes.
fn build_table_options(ui: &Ui, options: &mut TableOptions) {
    let Some(_table) = ui.begin_table("tableOptions", 2) else {
        return;
    };
    ui.table_next_row();
    if ui.table_next_column() {
        ui.checkbox("Background", &mut options.background);
    }
    if ui.table_next_column() {
        ui.checkbox("Header Row", &mut options.header);
    }

    ui.table_next_row();
    if ui.table_next_column() {
        ui.checkbox("Borders", &mut options.borders);
    }
    if options.borders && ui.table_next_column() {
        ui.checkbox("No Inner Borders", &mut options.no_inner_borders);
    }
}

fn build_people_table(ui: &Ui, flags: TableFlags, header: bool) {
    let Some(_table) = ui.begin_table_with_flags("tablePeople", PEOPLE_HEADER.len(), flags) else {
        return;
    };

    if header {
        for name in PEOPLE_HEADER {
            ui.table_setup_column(name, TableColumnFlags::NONE, 0.0, 0);
        }
        ui.table_headers_row();
    }

    for person in &PEOPLE {
        ui.table_next_row();
        for (column, cell) in (0..).zip(person) {
            ui.table_set_column_index(column);
            ui.text(cell);
        }
    }
}
