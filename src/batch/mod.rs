// src/batch/mod.rs
//! Sample batch registration: domain bean, vocabularies, events, plugin.

pub mod events;
pub mod plugin;
pub mod sample;
pub mod sample_code;
pub mod vocabulary;

pub use events::{
    AddRowRequest, CellEditRequest, RemoveLastRowRequest, ResetRowsRequest,
    SetValidationModeRequest, ValidateRequest,
};
pub use plugin::{SampleBatch, SampleBatchPlugin};
pub use sample::{sample_batch_sheet, SampleInfo};
pub use vocabulary::{AnalysisMethod, BatchVocabularies};
