// src/ui/elements/top_panel.rs
//! Row controls and the validity indicator above the table.

use bevy::prelude::EventWriter;
use bevy_egui::egui;

use crate::batch::{
    AddRowRequest, RemoveLastRowRequest, ResetRowsRequest, SampleInfo, SetValidationModeRequest,
    ValidateRequest,
};
use crate::grid::{Spreadsheet, ValidationMode};

pub struct TopPanelWriters<'a, 'w1, 'w2, 'w3, 'w4, 'w5> {
    pub add_row: &'a mut EventWriter<'w1, AddRowRequest>,
    pub remove_row: &'a mut EventWriter<'w2, RemoveLastRowRequest>,
    pub validate: &'a mut EventWriter<'w3, ValidateRequest>,
    pub reset: &'a mut EventWriter<'w4, ResetRowsRequest>,
    pub mode: &'a mut EventWriter<'w5, SetValidationModeRequest>,
}

pub fn show_top_panel(
    ui: &mut egui::Ui,
    sheet: &Spreadsheet<SampleInfo>,
    writers: TopPanelWriters,
) {
    ui.horizontal(|ui| {
        if ui.button("Add Row").clicked() {
            writers.add_row.write(AddRowRequest);
        }
        if ui.button("Remove Last Row").clicked() {
            writers.remove_row.write(RemoveLastRowRequest);
        }
        if ui.button("Validate").clicked() {
            writers.validate.write(ValidateRequest);
        }
        if ui.button("Reset").clicked() {
            writers.reset.write(ResetRowsRequest);
        }

        ui.separator();

        let mut eager = sheet.validation_mode() == ValidationMode::Eager;
        if ui
            .checkbox(&mut eager, "Validate while typing")
            .on_hover_text("When off, cells are only checked by the Validate button.")
            .changed()
        {
            let mode = if eager {
                ValidationMode::Eager
            } else {
                ValidationMode::Lazy
            };
            writers.mode.write(SetValidationModeRequest { mode });
        }

        ui.separator();

        if sheet.is_invalid() {
            ui.colored_label(
                egui::Color32::RED,
                format!(
                    "{} invalid cell(s). Please complete the missing mandatory information.",
                    sheet.invalid_cells().len()
                ),
            );
        } else {
            ui.label(format!("{} sample(s), all valid.", sheet.data_row_count()));
        }
    });
}
