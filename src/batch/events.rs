// src/batch/events.rs
//! Requests the UI sends; handler systems apply them to the batch resource.

use bevy::prelude::Event;

use crate::grid::ValidationMode;

/// Append one empty sample row.
#[derive(Event, Debug, Clone, Default)]
pub struct AddRowRequest;

/// Remove the trailing sample row.
#[derive(Event, Debug, Clone, Default)]
pub struct RemoveLastRowRequest;

/// Run on-demand validation over the whole grid.
#[derive(Event, Debug, Clone, Default)]
pub struct ValidateRequest;

/// Discard all sample rows and start over.
#[derive(Event, Debug, Clone, Default)]
pub struct ResetRowsRequest;

/// A committed cell edit from the table UI.
#[derive(Event, Debug, Clone)]
pub struct CellEditRequest {
    pub row: usize,
    pub col: usize,
    pub value: String,
}

/// Switch between lazy and eager validation.
#[derive(Event, Debug, Clone)]
pub struct SetValidationModeRequest {
    pub mode: ValidationMode,
}
