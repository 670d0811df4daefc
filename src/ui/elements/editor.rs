// src/ui/elements/editor.rs
//! The main editor window: top panel plus the sample table.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::batch::{
    AddRowRequest, CellEditRequest, RemoveLastRowRequest, ResetRowsRequest, SampleBatch,
    SetValidationModeRequest, ValidateRequest,
};
use crate::settings::AppSettings;

use super::table_body::sheet_table_body;
use super::top_panel::{show_top_panel, TopPanelWriters};

pub fn sample_batch_editor_ui(
    mut contexts: EguiContexts,
    batch: Res<SampleBatch>,
    settings: Res<AppSettings>,
    mut add_row_writer: EventWriter<AddRowRequest>,
    mut remove_row_writer: EventWriter<RemoveLastRowRequest>,
    mut validate_writer: EventWriter<ValidateRequest>,
    mut reset_writer: EventWriter<ResetRowsRequest>,
    mut mode_writer: EventWriter<SetValidationModeRequest>,
    mut cell_edit_writer: EventWriter<CellEditRequest>,
) {
    let ctx = contexts.ctx_mut();
    let sheet = &batch.sheet;
    let row_height = settings.row_height;

    egui::CentralPanel::default().show(ctx, |ui| {
        show_top_panel(
            ui,
            sheet,
            TopPanelWriters {
                add_row: &mut add_row_writer,
                remove_row: &mut remove_row_writer,
                validate: &mut validate_writer,
                reset: &mut reset_writer,
                mode: &mut mode_writer,
            },
        );
        ui.separator();

        egui::ScrollArea::horizontal().show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
            for col in 0..sheet.column_count() {
                table = table.column(
                    TableColumn::initial(sheet.column_width(col))
                        .at_least(40.0)
                        .clip(true),
                );
            }
            table
                .header(row_height, |mut header| {
                    for col in 0..sheet.column_count() {
                        header.col(|ui| {
                            let text = sheet.cell(0, col).map(|c| c.value().to_string());
                            ui.strong(text.unwrap_or_default());
                        });
                    }
                })
                .body(|body| {
                    sheet_table_body(body, row_height, sheet, &mut cell_edit_writer);
                });
        });
    });
}
