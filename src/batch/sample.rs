// src/batch/sample.rs
//! The sample batch row bean and the grid configured over it.

use bevy::log::info;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::grid::{Column, GridResult, Spreadsheet};
use crate::settings::AppSettings;

use super::vocabulary::{AnalysisMethod, BatchVocabularies};

const DATE_FORMAT: &str = "%Y-%m-%d";
const REPLICATES_PER_CONDITION: usize = 4;

/// One sample registration row. Every field mirrors one grid column; the
/// grid's column setters are the only writers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleInfo {
    pub analysis_method: Option<AnalysisMethod>,
    pub sample_label: String,
    pub biological_replicate: String,
    pub condition: String,
    pub species: String,
    pub specimen: String,
    pub analyte: String,
    pub collection_date: String,
    pub customer_comment: String,
}

/// Builds the fully configured sample batch grid: required select columns
/// for the controlled vocabularies, a required free-text label, a
/// date-checked collection date and an optional comment.
/// Replicate choices for one sample. They depend on the sample's condition,
/// so the grid recomputes them per row from the bean.
fn replicate_options(sample: &SampleInfo) -> Vec<String> {
    if sample.condition.trim().is_empty() {
        return Vec::new();
    }
    (1..=REPLICATES_PER_CONDITION)
        .map(|n| format!("{} rep{n}", sample.condition))
        .collect()
}

pub fn sample_batch_sheet(
    vocabularies: &BatchVocabularies,
    settings: &AppSettings,
) -> GridResult<Spreadsheet<SampleInfo>> {
    let mut sheet = Spreadsheet::new(SampleInfo::default);

    sheet.add_column(
        Column::new(
            "Analysis to be performed",
            |s: &SampleInfo| {
                s.analysis_method
                    .map(|method| method.label().to_string())
                    .unwrap_or_default()
            },
            |s: &mut SampleInfo, v: &str| s.analysis_method = AnalysisMethod::for_label(v),
        )
        .select_from(AnalysisMethod::all(), |method| method.label().to_string())?
        .set_required(),
    );
    sheet.add_column(
        Column::new(
            "Sample label",
            |s: &SampleInfo| s.sample_label.clone(),
            |s: &mut SampleInfo, v: &str| s.sample_label = v.to_string(),
        )
        .set_required()
        .require_distinct_values(),
    );
    sheet.add_column(
        Column::new(
            "Biological replicate",
            |s: &SampleInfo| s.biological_replicate.clone(),
            |s: &mut SampleInfo, v: &str| s.biological_replicate = v.to_string(),
        )
        .select_from_with(replicate_options, |label: &String| label.clone())?,
    );
    sheet.add_column(
        Column::new(
            "Condition",
            |s: &SampleInfo| s.condition.clone(),
            |s: &mut SampleInfo, v: &str| s.condition = v.to_string(),
        )
        .select_from(vocabularies.conditions.clone(), |term: &String| term.clone())?
        .set_required(),
    );
    sheet.add_column(
        Column::new(
            "Species",
            |s: &SampleInfo| s.species.clone(),
            |s: &mut SampleInfo, v: &str| s.species = v.to_string(),
        )
        .select_from(vocabularies.species.clone(), |term: &String| term.clone())?
        .set_required(),
    );
    sheet.add_column(
        Column::new(
            "Specimen",
            |s: &SampleInfo| s.specimen.clone(),
            |s: &mut SampleInfo, v: &str| s.specimen = v.to_string(),
        )
        .select_from(vocabularies.specimens.clone(), |term: &String| term.clone())?
        .set_required(),
    );
    sheet.add_column(
        Column::new(
            "Analyte",
            |s: &SampleInfo| s.analyte.clone(),
            |s: &mut SampleInfo, v: &str| s.analyte = v.to_string(),
        )
        .select_from(vocabularies.analytes.clone(), |term: &String| term.clone())?
        .set_required(),
    );
    sheet.add_column(
        Column::new(
            "Collection date",
            |s: &SampleInfo| s.collection_date.clone(),
            |s: &mut SampleInfo, v: &str| s.collection_date = v.to_string(),
        )
        .with_validator(
            |value| {
                value.trim().is_empty()
                    || NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).is_ok()
            },
            "'{0}' is not a date in YYYY-MM-DD format",
        ),
    );
    sheet.add_column(Column::new(
        "Customer comment",
        |s: &SampleInfo| s.customer_comment.clone(),
        |s: &mut SampleInfo, v: &str| s.customer_comment = v.to_string(),
    ));

    sheet.set_validation_mode(settings.validation_mode);
    for _ in 0..settings.initial_rows.max(1) {
        sheet.add_empty_row();
    }
    info!(
        "Configured sample batch sheet with {} columns and {} starting rows.",
        sheet.column_count(),
        sheet.data_row_count()
    );
    Ok(sheet)
}
