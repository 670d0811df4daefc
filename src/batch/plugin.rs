// src/batch/plugin.rs
//! Bevy plumbing around the sample batch grid: the resource owning the
//! spreadsheet and the handler systems applying UI requests to it.

use bevy::app::AppExit;
use bevy::prelude::*;

use crate::grid::Spreadsheet;
use crate::settings::{self, AppSettings};

use super::events::{
    AddRowRequest, CellEditRequest, RemoveLastRowRequest, ResetRowsRequest,
    SetValidationModeRequest, ValidateRequest,
};
use super::sample::SampleInfo;

/// Update ordering: request handlers first, then anything observing results.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum BatchSystemSet {
    ApplyChanges,
    Persistence,
}

/// The one grid instance this application edits.
#[derive(Resource)]
pub struct SampleBatch {
    pub sheet: Spreadsheet<SampleInfo>,
}

impl SampleBatch {
    pub fn new(mut sheet: Spreadsheet<SampleInfo>) -> Self {
        sheet.add_validation_change_listener(|event| {
            info!(
                "Sheet validity changed: was_valid={}, is_valid={}.",
                event.was_valid(),
                event.is_valid()
            );
        });
        Self { sheet }
    }
}

pub struct SampleBatchPlugin;

impl Plugin for SampleBatchPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AddRowRequest>()
            .add_event::<RemoveLastRowRequest>()
            .add_event::<ValidateRequest>()
            .add_event::<ResetRowsRequest>()
            .add_event::<CellEditRequest>()
            .add_event::<SetValidationModeRequest>()
            .configure_sets(
                Update,
                (BatchSystemSet::ApplyChanges, BatchSystemSet::Persistence).chain(),
            )
            .add_systems(
                Update,
                (
                    handle_cell_edit_requests,
                    handle_add_row_requests,
                    handle_remove_last_row_requests,
                    handle_reset_rows_requests,
                    handle_validation_mode_requests,
                    handle_validate_requests,
                )
                    .chain()
                    .in_set(BatchSystemSet::ApplyChanges),
            )
            .add_systems(
                Update,
                persist_settings_on_exit.in_set(BatchSystemSet::Persistence),
            );
        info!("SampleBatchPlugin initialized.");
    }
}

fn handle_cell_edit_requests(
    mut events: EventReader<CellEditRequest>,
    mut batch: ResMut<SampleBatch>,
) {
    for event in events.read() {
        trace!(
            "Applying cell edit [r:{}, c:{}] -> '{}'.",
            event.row,
            event.col,
            event.value
        );
        batch
            .sheet
            .set_cell_value(event.row, event.col, event.value.clone());
    }
}

fn handle_add_row_requests(mut events: EventReader<AddRowRequest>, mut batch: ResMut<SampleBatch>) {
    for _ in events.read() {
        batch.sheet.add_empty_row();
        info!(
            "Added empty sample row ({} data rows total).",
            batch.sheet.data_row_count()
        );
    }
}

fn handle_remove_last_row_requests(
    mut events: EventReader<RemoveLastRowRequest>,
    mut batch: ResMut<SampleBatch>,
) {
    for _ in events.read() {
        batch.sheet.remove_last_row();
        info!(
            "Removed last sample row ({} data rows remain).",
            batch.sheet.data_row_count()
        );
    }
}

fn handle_reset_rows_requests(
    mut events: EventReader<ResetRowsRequest>,
    mut batch: ResMut<SampleBatch>,
) {
    for _ in events.read() {
        batch.sheet.reset_rows();
        batch.sheet.add_empty_row();
        info!("Reset all sample rows.");
    }
}

fn handle_validation_mode_requests(
    mut events: EventReader<SetValidationModeRequest>,
    mut batch: ResMut<SampleBatch>,
) {
    for event in events.read() {
        batch.sheet.set_validation_mode(event.mode);
        info!("Validation mode set to {:?}.", event.mode);
    }
}

fn handle_validate_requests(
    mut events: EventReader<ValidateRequest>,
    mut batch: ResMut<SampleBatch>,
) {
    for _ in events.read() {
        batch.sheet.validate();
        if batch.sheet.is_valid() {
            info!("Validation passed for {} sample(s).", batch.sheet.data_row_count());
        } else {
            warn!(
                "Validation found {} invalid cell(s).",
                batch.sheet.invalid_cells().len()
            );
        }
    }
}

/// Persists the current validation mode back into the settings file when the
/// application is quitting.
fn persist_settings_on_exit(
    mut exit_events: EventReader<AppExit>,
    settings: Res<AppSettings>,
    batch: Res<SampleBatch>,
) {
    if exit_events.read().next().is_none() {
        return;
    }
    let mut to_save = settings.clone();
    to_save.validation_mode = batch.sheet.validation_mode();
    if let Err(err) = settings::io::save_settings(&to_save) {
        warn!("Failed to save settings on exit: {err}");
    }
}
