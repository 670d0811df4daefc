// src/grid/cell.rs
//! The per-cell rendering surface: value text, style token, optional comment.

/// Style token attached to every rendered cell. The UI maps these to visuals;
/// the grid core only reasons about them. A cell is considered invalid
/// exactly when its style is `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStyle {
    #[default]
    Default,
    /// Failed validation. Carries a comment with the failure reason.
    Invalid,
    /// Header row cell. Not editable, never validated.
    Header,
    /// The auto-installed leading row-number cell. Not editable.
    RowNumber,
    /// Read-only data cell.
    Locked,
}

impl CellStyle {
    /// Styles that never take part in validation and refuse edits.
    pub fn is_locked(&self) -> bool {
        matches!(self, CellStyle::Header | CellStyle::RowNumber | CellStyle::Locked)
    }
}

/// One cell of the rendering surface.
#[derive(Debug, Clone, Default)]
pub struct CellData {
    pub(crate) value: String,
    pub(crate) style: CellStyle,
    pub(crate) comment: Option<String>,
}

impl CellData {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn style(&self) -> CellStyle {
        self.style
    }

    /// The validation failure reason, present iff the cell is invalid.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn is_invalid(&self) -> bool {
        self.style == CellStyle::Invalid
    }
}

/// Address of one cell, row-major with the header at row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}
