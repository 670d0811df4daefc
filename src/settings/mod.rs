// src/settings/mod.rs

pub mod io;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::grid::ValidationMode;

/// Persisted application settings.
#[derive(Debug, Clone, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Default validation mode at startup.
    pub validation_mode: ValidationMode,
    /// Number of empty sample rows a fresh batch starts with.
    pub initial_rows: usize,
    /// Table row height in points.
    pub row_height: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            validation_mode: ValidationMode::Eager,
            initial_rows: 2,
            row_height: 22.0,
        }
    }
}
