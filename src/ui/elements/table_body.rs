// src/ui/elements/table_body.rs

use bevy::prelude::*;
use egui_extras::{TableBody, TableRow};

use crate::batch::{CellEditRequest, SampleInfo};
use crate::grid::Spreadsheet;
use crate::ui::widgets::cell_widget::edit_cell_widget;

/// Renders all data rows of the sheet. Committed edits are sent as events;
/// the sheet itself is never mutated from here.
pub fn sheet_table_body(
    body: TableBody,
    row_height: f32,
    sheet: &Spreadsheet<SampleInfo>,
    cell_edit_writer: &mut EventWriter<CellEditRequest>,
) {
    let data_rows = sheet.row_count().saturating_sub(1);
    let mut body = body;
    body.rows(row_height, data_rows, |mut row: TableRow| {
        // header sits at sheet row 0 and is rendered separately
        let row_index = row.index() + 1;
        for col_index in 0..sheet.column_count() {
            row.col(|ui| {
                let id = ui.id().with((row_index, col_index));
                if let Some(new_value) = edit_cell_widget(ui, id, sheet, row_index, col_index) {
                    cell_edit_writer.write(CellEditRequest {
                        row: row_index,
                        col: col_index,
                        value: new_value,
                    });
                }
            });
        }
    });
}
