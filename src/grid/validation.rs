// src/grid/validation.rs
//! Cell validators and the validation vocabulary shared by the grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// When cell validation runs.
///
/// `Lazy` defers all validation until `Spreadsheet::validate` is called.
/// `Eager` re-validates a cell as part of every edit pipeline pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValidationMode {
    #[default]
    Lazy,
    Eager,
}

/// Outcome of running a validator against one cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    valid: bool,
    message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_invalid(&self) -> bool {
        !self.valid
    }

    /// Human-readable failure reason. Empty for valid results.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A predicate over the rendered cell text plus a parameterized error message.
///
/// The message may contain the placeholder `{0}`, which is replaced with the
/// offending cell value when the predicate fails.
pub struct CellValidator {
    predicate: Box<dyn Fn(&str) -> bool + Send + Sync>,
    error_message: String,
}

impl CellValidator {
    pub fn new(
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            error_message: error_message.into(),
        }
    }

    pub fn validate(&self, value: &str) -> ValidationResult {
        if (self.predicate)(value) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(self.error_message.replace("{0}", value))
        }
    }
}

impl fmt::Debug for CellValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellValidator")
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

/// A predicate that also sees the row bean, for columns whose valid values
/// depend on other fields of the same row.
pub struct BeanValidator<T> {
    predicate: Box<dyn Fn(&T, &str) -> bool + Send + Sync>,
    error_message: String,
}

impl<T> BeanValidator<T> {
    pub fn new(
        predicate: impl Fn(&T, &str) -> bool + Send + Sync + 'static,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            error_message: error_message.into(),
        }
    }

    pub fn validate(&self, bean: &T, value: &str) -> ValidationResult {
        if (self.predicate)(bean, value) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(self.error_message.replace("{0}", value))
        }
    }
}

impl<T> fmt::Debug for BeanValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanValidator")
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

/// A predicate over every current value of a column plus the cell under
/// validation, for column-scoped rules such as distinctness.
pub struct ColumnValuesValidator {
    predicate: Box<dyn Fn(&[String], &str) -> bool + Send + Sync>,
    error_message: String,
}

impl ColumnValuesValidator {
    pub fn new(
        predicate: impl Fn(&[String], &str) -> bool + Send + Sync + 'static,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            error_message: error_message.into(),
        }
    }

    pub fn validate(&self, column_values: &[String], value: &str) -> ValidationResult {
        if (self.predicate)(column_values, value) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(self.error_message.replace("{0}", value))
        }
    }
}

impl fmt::Debug for ColumnValuesValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnValuesValidator")
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

/// Emitted to listeners when the overall validity of a grid flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationChangeEvent {
    was_valid: bool,
    is_valid: bool,
}

impl ValidationChangeEvent {
    pub(crate) fn new(was_valid: bool, is_valid: bool) -> Self {
        Self { was_valid, is_valid }
    }

    pub fn was_valid(&self) -> bool {
        self.was_valid
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid
    }
}
