// src/grid/mod.rs
//! Bound tabular editor with inline validation.
//!
//! The grid binds row beans to columns through getter/setter closures and
//! keeps a rendering surface (value, style, comment) per cell. Validation
//! verdicts live on the surface as styles and comments; configuration
//! mistakes surface as `GridError`.

pub mod cell;
pub mod column;
pub mod error;
pub mod row;
pub mod select;
pub mod sheet;
pub mod validation;

pub use cell::{CellData, CellRef, CellStyle};
pub use column::Column;
pub use error::{GridError, GridResult};
pub use row::Row;
pub use select::{CellEditor, EditorSession, SelectEditor};
pub use sheet::Spreadsheet;
pub use validation::{
    BeanValidator, CellValidator, ColumnValuesValidator, ValidationChangeEvent, ValidationMode,
    ValidationResult,
};
