// src/batch/vocabulary.rs
//! Controlled vocabularies offered by the sample batch grid's select columns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The facility's supported analysis offerings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisMethod {
    WholeGenomeSequencing,
    ExomeSequencing,
    RnaSequencing,
    ShotgunProteomics,
    TargetedMetabolomics,
    AmpliconSequencing16S,
}

impl AnalysisMethod {
    pub fn all() -> Vec<AnalysisMethod> {
        vec![
            AnalysisMethod::WholeGenomeSequencing,
            AnalysisMethod::ExomeSequencing,
            AnalysisMethod::RnaSequencing,
            AnalysisMethod::ShotgunProteomics,
            AnalysisMethod::TargetedMetabolomics,
            AnalysisMethod::AmpliconSequencing16S,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMethod::WholeGenomeSequencing => "WGS (Whole Genome Sequencing)",
            AnalysisMethod::ExomeSequencing => "WES (Whole Exome Sequencing)",
            AnalysisMethod::RnaSequencing => "RNA-Seq (RNA Sequencing)",
            AnalysisMethod::ShotgunProteomics => "Shotgun Proteomics",
            AnalysisMethod::TargetedMetabolomics => "Targeted Metabolomics",
            AnalysisMethod::AmpliconSequencing16S => "16S Amplicon Sequencing",
        }
    }

    pub fn for_label(label: &str) -> Option<AnalysisMethod> {
        AnalysisMethod::all()
            .into_iter()
            .find(|method| method.label() == label)
    }
}

impl fmt::Display for AnalysisMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The term lists a concrete batch is configured with. Declarative data,
/// loadable from JSON; the defaults cover the common demo setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchVocabularies {
    pub conditions: Vec<String>,
    pub species: Vec<String>,
    pub specimens: Vec<String>,
    pub analytes: Vec<String>,
}

impl Default for BatchVocabularies {
    fn default() -> Self {
        Self {
            conditions: vec![
                "control".to_string(),
                "treated: compound A".to_string(),
                "treated: compound B".to_string(),
            ],
            species: vec![
                "Homo sapiens".to_string(),
                "Mus musculus".to_string(),
                "Arabidopsis thaliana".to_string(),
            ],
            specimens: vec![
                "Blood plasma".to_string(),
                "Liver tissue".to_string(),
                "Leaf".to_string(),
            ],
            analytes: vec![
                "DNA".to_string(),
                "RNA".to_string(),
                "Protein".to_string(),
                "Small molecules".to_string(),
            ],
        }
    }
}
