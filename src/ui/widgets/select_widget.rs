// src/ui/widgets/select_widget.rs
//! Dropdown for closed-vocabulary columns.
//!
//! Opening the combo box opens a fresh editor session for the cell; the
//! session resolves the current cell text to a selection and owns its own
//! state for the duration of this activation.

use bevy_egui::egui;

use crate::grid::Spreadsheet;

pub fn show_select_editor<T>(
    ui: &mut egui::Ui,
    id: egui::Id,
    sheet: &Spreadsheet<T>,
    row: usize,
    col: usize,
    current_value: &str,
) -> Option<String> {
    let Some(mut session) = sheet.open_editor(row, col) else {
        ui.label(current_value);
        return None;
    };

    let selected_text = session
        .selected()
        .and_then(|index| session.options().get(index).cloned())
        .unwrap_or_else(|| current_value.to_string());

    let mut new_value = None;
    egui::ComboBox::from_id_source(id)
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            if ui
                .selectable_label(session.selected().is_none(), "(none)")
                .clicked()
            {
                session.clear();
                new_value = Some(String::new());
            }
            let options = session.options().to_vec();
            for (index, label) in options.iter().enumerate() {
                if ui
                    .selectable_label(session.selected() == Some(index), label)
                    .clicked()
                {
                    session.select(index);
                    new_value = Some(session.cell_value());
                }
            }
        });
    new_value
}
