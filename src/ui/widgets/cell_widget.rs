// src/ui/widgets/cell_widget.rs
//! Renders one cell and reports a committed new value, if any.

use bevy_egui::egui;

use crate::grid::{CellStyle, Spreadsheet};

use super::select_widget::show_select_editor;

fn style_background(style: CellStyle, visuals: &egui::Visuals) -> egui::Color32 {
    match style {
        CellStyle::Invalid => egui::Color32::from_rgba_unmultiplied(255, 0, 0, 40),
        CellStyle::Header | CellStyle::RowNumber | CellStyle::Locked => visuals.faint_bg_color,
        CellStyle::Default => egui::Color32::TRANSPARENT,
    }
}

pub fn edit_cell_widget<T>(
    ui: &mut egui::Ui,
    id: egui::Id,
    sheet: &Spreadsheet<T>,
    row: usize,
    col: usize,
) -> Option<String> {
    let Some(cell) = sheet.cell(row, col) else {
        ui.label("?");
        return None;
    };
    let Some(column) = sheet.column(col) else {
        ui.label("?");
        return None;
    };

    let background = style_background(cell.style(), ui.visuals());
    let mut new_value = None;

    let frame = egui::Frame::NONE
        .inner_margin(egui::Margin::symmetric(2, 1))
        .fill(background);
    let frame_response = frame.show(ui, |ui| {
        if cell.style().is_locked() {
            ui.add_sized(
                ui.available_size(),
                egui::Label::new(cell.value()).selectable(false),
            );
        } else if column.has_editor() {
            new_value = show_select_editor(ui, id, sheet, row, col, cell.value());
        } else {
            let mut buffer = cell.value().to_string();
            let response = ui.add_sized(
                ui.available_size(),
                egui::TextEdit::singleline(&mut buffer).frame(false),
            );
            if response.changed() {
                new_value = Some(buffer);
            }
        }
    });

    if let Some(comment) = cell.comment() {
        frame_response.response.on_hover_text(comment);
    }
    new_value
}
