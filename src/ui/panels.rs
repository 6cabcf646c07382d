use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader;
use crate::data::model::{CategoryField, NumericField};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – variable & grouping controls
// ---------------------------------------------------------------------------

/// Render the control panel.
///
/// Both widgets display the parent-supplied current selection and report
/// changes through the state setters; they keep no selection state of
/// their own.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    // ---- Numeric variable selector ----
    ui.strong("Average of");
    let current = state.selection.numeric;
    egui::ComboBox::from_id_salt("numeric_variable")
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for option in NumericField::ALL {
                if ui
                    .selectable_label(current == option, option.to_string())
                    .clicked()
                {
                    state.set_numeric_field(option);
                }
            }
        });
    ui.separator();

    // ---- Grouping field radio buttons ----
    ui.strong("Group by");
    for option in CategoryField::ALL {
        if ui
            .radio(state.selection.category == option, option.to_string())
            .clicked()
        {
            state.set_category_field(option);
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if !state.dataset.is_empty() {
            ui.label(format!(
                "{} rows loaded, {} groups",
                state.dataset.len(),
                state.averages.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open tabular data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    dataset.len(),
                    dataset.column_names
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
