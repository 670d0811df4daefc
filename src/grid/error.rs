// src/grid/error.rs

use thiserror::Error;

/// Configuration errors raised while building or mutating a grid.
///
/// Validation failures are deliberately not errors. A failing validator
/// leaves the grid in a consistent, queryable invalid state instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("there is no row at index {index}; the last row is at index {last}")]
    RowIndexOutOfBounds { index: usize, last: usize },
    #[error("column '{column}' already has a select editor configured")]
    EditorAlreadyConfigured { column: String },
}

pub type GridResult<T> = Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_both_indices() {
        let err = GridError::RowIndexOutOfBounds { index: 7, last: 2 };
        let text = err.to_string();
        assert!(text.contains('7'));
        assert!(text.contains('2'));
    }

    #[test]
    fn editor_conflict_message_names_the_column() {
        let err = GridError::EditorAlreadyConfigured {
            column: "Species".to_string(),
        };
        assert!(err.to_string().contains("Species"));
    }
}
