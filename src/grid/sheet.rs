// src/grid/sheet.rs
//! The spreadsheet orchestrator: rows, columns and the rendering surface.

use bevy::log::{debug, warn};

use super::cell::{CellData, CellRef, CellStyle};
use super::column::Column;
use super::error::{GridError, GridResult};
use super::row::Row;
use super::select::EditorSession;
use super::validation::{ValidationChangeEvent, ValidationMode, ValidationResult};

/// Approximate rendered width of one character, used for column auto-fit.
const CHARACTER_PIXEL_WIDTH: f32 = 9.0;
const MIN_COLUMN_WIDTH: f32 = 64.0;

type ValidationListener = Box<dyn FnMut(ValidationChangeEvent) + Send + Sync>;

/// A bound tabular editor over row beans of type `T`.
///
/// Row 0 is always the header. Every spreadsheet installs a leading locked
/// row-number column. Edits flow through a fixed pipeline: surface write,
/// model sync via the column setter, validation (in eager mode), column
/// auto-fit, then a full-grid validity rescan. Grids here are bounded (bulk
/// metadata entry), so the rescan stays cheap.
pub struct Spreadsheet<T> {
    columns: Vec<Column<T>>,
    rows: Vec<Row<T>>,
    cells: Vec<Vec<CellData>>,
    column_widths: Vec<f32>,
    invalid_cells: Vec<CellRef>,
    validation_mode: ValidationMode,
    row_factory: Box<dyn Fn() -> T + Send + Sync>,
    listeners: Vec<ValidationListener>,
}

impl<T> Spreadsheet<T> {
    /// Creates an empty spreadsheet with the row-number column and the
    /// header row already in place. `row_factory` builds the fresh bean
    /// inserted when removal would otherwise leave zero data rows.
    pub fn new(row_factory: impl Fn() -> T + Send + Sync + 'static) -> Self {
        let mut sheet = Self {
            columns: Vec::new(),
            rows: Vec::new(),
            cells: Vec::new(),
            column_widths: Vec::new(),
            invalid_cells: Vec::new(),
            validation_mode: ValidationMode::default(),
            row_factory: Box::new(row_factory),
            listeners: Vec::new(),
        };
        sheet.push_column(Column::row_number());
        sheet.add_header_row();
        sheet
    }

    /// Appends a column and materializes its cells for every existing row.
    /// Returns the column index.
    pub fn add_column(&mut self, column: Column<T>) -> usize {
        let index = self.push_column(column);
        self.update_sheet_validity();
        index
    }

    fn push_column(&mut self, column: Column<T>) -> usize {
        self.columns.push(column);
        self.column_widths.push(MIN_COLUMN_WIDTH);
        let col = self.columns.len() - 1;
        for row in 0..self.rows.len() {
            self.cells[row].push(CellData::default());
            self.init_cell(CellRef { row, col });
        }
        for row in 0..self.rows.len() {
            self.refresh_cell_data(CellRef { row, col });
        }
        col
    }

    /// Appends a data row bound to `bean` and runs the edit pipeline over
    /// its freshly created cells.
    pub fn add_row(&mut self, bean: T) {
        self.rows.push(Row::Data(bean));
        let row = self.rows.len() - 1;
        self.cells.push(vec![CellData::default(); self.columns.len()]);
        for col in 0..self.columns.len() {
            self.init_cell(CellRef { row, col });
        }
        for col in 0..self.columns.len() {
            self.refresh_cell_data(CellRef { row, col });
        }
        self.update_sheet_validity();
    }

    /// Adds a factory-built row while temporarily forcing lazy validation,
    /// so a fresh empty row is not instantly painted invalid.
    pub fn add_empty_row(&mut self) {
        let bean = (self.row_factory)();
        let mode = self.validation_mode;
        self.validation_mode = ValidationMode::Lazy;
        self.add_row(bean);
        self.validation_mode = mode;
    }

    /// Removes the trailing data row. Refuses to touch the header. If the
    /// removal leaves zero data rows, a fresh factory row is inserted so the
    /// grid always offers at least one editable row.
    pub fn remove_last_row(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        if self.rows[last].is_header() {
            debug!("Will not remove the header row at index {last}.");
            return;
        }
        if let Err(err) = self.delete_row(last) {
            warn!("Failed to remove last row: {err}");
            return;
        }
        self.update_sheet_validity();
        if self.data_row_count() == 0 {
            self.add_empty_row();
        }
    }

    /// Removes the row at `index`. Out-of-range indices are a caller bug and
    /// error; the header row is defensively kept with a logged no-op.
    pub(crate) fn delete_row(&mut self, index: usize) -> GridResult<()> {
        if index >= self.rows.len() {
            return Err(GridError::RowIndexOutOfBounds {
                index,
                last: self.rows.len().saturating_sub(1),
            });
        }
        if self.rows[index].is_header() {
            debug!("Refusing to delete the header row at index {index}.");
            return Ok(());
        }
        self.rows.remove(index);
        self.cells.remove(index);
        Ok(())
    }

    /// Clears all rows and reinstates the header.
    pub fn reset_rows(&mut self) {
        self.rows.clear();
        self.cells.clear();
        self.add_header_row();
        self.update_sheet_validity();
    }

    fn add_header_row(&mut self) {
        self.rows.push(Row::Header);
        let row = self.rows.len() - 1;
        self.cells.push(vec![CellData::default(); self.columns.len()]);
        for col in 0..self.columns.len() {
            self.init_cell(CellRef { row, col });
            self.auto_fit_column_width(col);
        }
    }

    /// Entry point of the cell edit pipeline. Locked cells (header, row
    /// number, explicitly locked columns) refuse the edit with a debug log.
    pub fn set_cell_value(&mut self, row: usize, col: usize, value: impl Into<String>) {
        if row >= self.rows.len() || col >= self.columns.len() {
            warn!("Ignoring edit of nonexistent cell [r:{row}, c:{col}].");
            return;
        }
        if self.cells[row][col].style.is_locked() {
            debug!("Ignoring edit of locked cell [r:{row}, c:{col}].");
            return;
        }
        self.cells[row][col].value = value.into();
        self.refresh_cell_data(CellRef { row, col });
        self.update_sheet_validity();
    }

    /// Validates every cell and recomputes overall validity.
    pub fn validate(&mut self) {
        for row in 0..self.rows.len() {
            for col in 0..self.columns.len() {
                self.update_validation(CellRef { row, col });
            }
        }
        self.update_sheet_validity();
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_cells.is_empty()
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Registered listeners fire only when overall validity flips, not on
    /// every change of the failure reason.
    pub fn add_validation_change_listener(
        &mut self,
        listener: impl FnMut(ValidationChangeEvent) + Send + Sync + 'static,
    ) {
        self.listeners.push(Box::new(listener));
    }

    pub fn set_validation_mode(&mut self, mode: ValidationMode) {
        self.validation_mode = mode;
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.validation_mode
    }

    /// Row beans in insertion order, header excluded.
    pub fn data(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().filter_map(Row::data)
    }

    pub fn get_data(&self) -> Vec<&T> {
        self.data().collect()
    }

    pub fn into_data(self) -> Vec<T> {
        self.rows.into_iter().filter_map(Row::into_data).collect()
    }

    /// Opens a fresh editor session for the cell, if its column carries a
    /// select editor and the row is a data row.
    pub fn open_editor(&self, row: usize, col: usize) -> Option<EditorSession> {
        let column = self.columns.get(col)?;
        let editor = column.editor()?;
        match self.rows.get(row)? {
            Row::Header => {
                debug!("Cannot open an editor on header cell [r:{row}, c:{col}].");
                None
            }
            Row::Data(bean) => Some(editor.open_session(bean, &self.cells[row][col].value)),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn data_row_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_header()).count()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CellData> {
        self.cells.get(row)?.get(col)
    }

    pub fn column(&self, col: usize) -> Option<&Column<T>> {
        self.columns.get(col)
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn column_width(&self, col: usize) -> f32 {
        self.column_widths.get(col).copied().unwrap_or(MIN_COLUMN_WIDTH)
    }

    pub fn invalid_cells(&self) -> &[CellRef] {
        &self.invalid_cells
    }

    /// Sets a cell's initial value and style from its row kind and column.
    fn init_cell(&mut self, cell: CellRef) {
        let (value, style) = {
            let column = &self.columns[cell.col];
            match &self.rows[cell.row] {
                Row::Header => (column.name().to_string(), CellStyle::Header),
                Row::Data(bean) => {
                    if column.is_row_number() {
                        // data rows are contiguous after the header, so the
                        // row index doubles as the 1-based row number
                        (cell.row.to_string(), CellStyle::RowNumber)
                    } else {
                        (column.render(bean), column.style().unwrap_or_default())
                    }
                }
            }
        };
        let data = &mut self.cells[cell.row][cell.col];
        data.value = value;
        data.style = style;
        data.comment = None;
    }

    /// The pipeline every surface write passes through: model sync, then
    /// validation when eager, then column auto-fit.
    fn refresh_cell_data(&mut self, cell: CellRef) {
        self.update_model(cell);
        if self.validation_mode == ValidationMode::Eager {
            self.update_validation(cell);
        }
        self.auto_fit_column_width(cell.col);
    }

    fn update_model(&mut self, cell: CellRef) {
        let column = &self.columns[cell.col];
        if column.is_row_number() {
            return;
        }
        let value = self.cells[cell.row][cell.col].value.clone();
        if let Some(bean) = self.rows[cell.row].data_mut() {
            column.apply_to_bean(bean, &value);
        }
    }

    /// Re-validates one cell, touching the surface only when the verdict or
    /// the failure reason actually changed.
    fn update_validation(&mut self, cell: CellRef) {
        let result = self.validate_cell(cell);
        if self.verdict_changed(cell, &result) {
            self.apply_validation_status(cell, &result);
        }
    }

    fn validate_cell(&self, cell: CellRef) -> ValidationResult {
        let column = &self.columns[cell.col];
        if column.is_row_number() {
            return ValidationResult::valid();
        }
        let Row::Data(bean) = &self.rows[cell.row] else {
            return ValidationResult::valid();
        };
        let value = &self.cells[cell.row][cell.col].value;
        for validator in column.validators() {
            let result = validator.validate(value);
            if result.is_invalid() {
                return result;
            }
        }
        for validator in column.bean_validators() {
            let result = validator.validate(bean, value);
            if result.is_invalid() {
                return result;
            }
        }
        if !column.column_validators().is_empty() {
            let values = self.column_values(cell.col);
            for validator in column.column_validators() {
                let result = validator.validate(&values, value);
                if result.is_invalid() {
                    return result;
                }
            }
        }
        ValidationResult::valid()
    }

    /// Current cell values of one column across all data rows.
    fn column_values(&self, col: usize) -> Vec<String> {
        self.rows
            .iter()
            .zip(&self.cells)
            .filter(|(row, _)| !row.is_header())
            .map(|(_, cells)| cells[col].value.clone())
            .collect()
    }

    fn verdict_changed(&self, cell: CellRef, result: &ValidationResult) -> bool {
        let data = &self.cells[cell.row][cell.col];
        if result.is_invalid() != data.is_invalid() {
            return true;
        }
        result.is_invalid() && data.comment() != Some(result.message())
    }

    fn apply_validation_status(&mut self, cell: CellRef, result: &ValidationResult) {
        let restore = self.columns[cell.col].style().unwrap_or_default();
        let data = &mut self.cells[cell.row][cell.col];
        if result.is_invalid() {
            data.style = CellStyle::Invalid;
            data.comment = Some(result.message().to_string());
        } else {
            if data.style == CellStyle::Invalid {
                data.style = restore;
            }
            data.comment = None;
        }
    }

    /// Full-grid rescan of invalid cells. Fires the registered listeners
    /// only when overall validity flips.
    fn update_sheet_validity(&mut self) {
        let was_valid = self.invalid_cells.is_empty();
        self.invalid_cells = self
            .cells
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, data)| data.is_invalid())
                    .map(move |(col, _)| CellRef { row, col })
            })
            .collect();
        let is_valid = self.invalid_cells.is_empty();
        if was_valid != is_valid {
            let event = ValidationChangeEvent::new(was_valid, is_valid);
            for listener in &mut self.listeners {
                listener(event);
            }
        }
    }

    fn auto_fit_column_width(&mut self, col: usize) {
        let longest = (0..self.rows.len())
            .map(|row| self.cells[row][col].value.chars().count())
            .max()
            .unwrap_or(0);
        let required = CHARACTER_PIXEL_WIDTH * longest as f32;
        self.column_widths[col] = required.max(MIN_COLUMN_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Person {
        name: String,
        age: String,
    }

    impl Person {
        fn new(name: &str, age: &str) -> Self {
            Self {
                name: name.to_string(),
                age: age.to_string(),
            }
        }
    }

    // column 0 is the row-number column, 1 is Name*, 2 is Age
    fn person_sheet() -> Spreadsheet<Person> {
        let mut sheet = Spreadsheet::new(Person::default);
        sheet.add_column(
            Column::new(
                "Name",
                |p: &Person| p.name.clone(),
                |p: &mut Person, v: &str| p.name = v.to_string(),
            )
            .set_required(),
        );
        sheet.add_column(
            Column::new(
                "Age",
                |p: &Person| p.age.clone(),
                |p: &mut Person, v: &str| p.age = v.to_string(),
            )
            .with_validator(
                |v| v.is_empty() || v.parse::<u32>().is_ok(),
                "'{0}' is not a number",
            ),
        );
        sheet
    }

    fn listener_counter(sheet: &mut Spreadsheet<Person>) -> Arc<AtomicUsize> {
        let fired = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&fired);
        sheet.add_validation_change_listener(move |_| {
            handle.fetch_add(1, Ordering::SeqCst);
        });
        fired
    }

    #[test]
    fn new_sheet_has_header_row_and_row_number_column() {
        let sheet = person_sheet();
        assert_eq!(sheet.row_count(), 1);
        assert_eq!(sheet.data_row_count(), 0);
        assert_eq!(sheet.column_count(), 3);
        assert_eq!(sheet.cell(0, 0).unwrap().value(), "#");
        let header = sheet.cell(0, 1).unwrap();
        assert_eq!(header.value(), "Name*");
        assert_eq!(header.style(), CellStyle::Header);
    }

    #[test]
    fn added_rows_render_bean_values_and_row_numbers() {
        let mut sheet = person_sheet();
        sheet.add_row(Person::new("Alice", "30"));
        sheet.add_row(Person::new("Bob", "41"));
        assert_eq!(sheet.cell(1, 0).unwrap().value(), "1");
        assert_eq!(sheet.cell(2, 0).unwrap().value(), "2");
        assert_eq!(sheet.cell(1, 0).unwrap().style(), CellStyle::RowNumber);
        assert_eq!(sheet.cell(1, 1).unwrap().value(), "Alice");
        assert_eq!(sheet.cell(2, 2).unwrap().value(), "41");
    }

    #[test]
    fn round_trip_leaves_beans_unchanged() {
        let mut sheet = person_sheet();
        let original = Person::new("Alice", "30");
        sheet.add_row(original.clone());
        assert_eq!(sheet.get_data(), vec![&original]);
    }

    #[test]
    fn eager_mode_marks_invalid_cells_on_creation() {
        let mut sheet = person_sheet();
        sheet.set_validation_mode(ValidationMode::Eager);
        sheet.add_row(Person::new("Alice", "30"));
        sheet.add_row(Person::new("", "40"));
        sheet.add_row(Person::new("Bob", "xx"));

        assert!(sheet.is_invalid());
        assert!(sheet.cell(2, 1).unwrap().is_invalid());
        assert!(sheet.cell(3, 2).unwrap().is_invalid());
        assert!(!sheet.cell(1, 1).unwrap().is_invalid());
        assert!(!sheet.cell(1, 2).unwrap().is_invalid());
        assert_eq!(
            sheet.cell(3, 2).unwrap().comment(),
            Some("'xx' is not a number")
        );
        // data survives with insertion order intact
        let data = sheet.get_data();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0].name, "Alice");
        assert_eq!(data[2].name, "Bob");
    }

    #[test]
    fn lazy_mode_defers_validation_until_validate() {
        let mut sheet = person_sheet();
        sheet.add_row(Person::new("", "xx"));
        assert!(sheet.is_valid());
        assert!(!sheet.cell(1, 1).unwrap().is_invalid());
        sheet.validate();
        assert!(sheet.is_invalid());
        assert!(sheet.cell(1, 1).unwrap().is_invalid());
        assert!(sheet.cell(1, 2).unwrap().is_invalid());
    }

    #[test]
    fn eager_edit_and_lazy_edit_plus_validate_agree() {
        let mut eager = person_sheet();
        eager.set_validation_mode(ValidationMode::Eager);
        eager.add_row(Person::default());
        eager.set_cell_value(1, 2, "not-a-number");

        let mut lazy = person_sheet();
        lazy.add_row(Person::default());
        lazy.set_cell_value(1, 2, "not-a-number");
        lazy.validate();

        for col in 0..eager.column_count() {
            let a = eager.cell(1, col).unwrap();
            let b = lazy.cell(1, col).unwrap();
            assert_eq!(a.style(), b.style(), "column {col}");
            assert_eq!(a.comment(), b.comment(), "column {col}");
        }
        assert_eq!(eager.is_valid(), lazy.is_valid());
    }

    #[test]
    fn edits_sync_the_model_through_the_setter() {
        let mut sheet = person_sheet();
        sheet.set_validation_mode(ValidationMode::Eager);
        sheet.add_row(Person::new("Alice", "30"));
        sheet.set_cell_value(1, 1, "Zed");
        assert_eq!(sheet.get_data()[0].name, "Zed");
        assert_eq!(sheet.cell(1, 1).unwrap().value(), "Zed");
    }

    #[test]
    fn fixing_an_invalid_cell_restores_style_and_clears_comment() {
        let mut sheet = person_sheet();
        sheet.set_validation_mode(ValidationMode::Eager);
        sheet.add_row(Person::new("Alice", "oops"));
        assert!(sheet.cell(1, 2).unwrap().is_invalid());
        sheet.set_cell_value(1, 2, "31");
        let cell = sheet.cell(1, 2).unwrap();
        assert_eq!(cell.style(), CellStyle::Default);
        assert!(cell.comment().is_none());
        assert!(sheet.is_valid());
    }

    #[test]
    fn validity_matches_presence_of_invalid_cells() {
        let mut sheet = person_sheet();
        sheet.set_validation_mode(ValidationMode::Eager);
        sheet.add_row(Person::new("Alice", "30"));
        assert!(sheet.is_valid());
        assert!(sheet.invalid_cells().is_empty());
        sheet.set_cell_value(1, 2, "bad");
        assert!(sheet.is_invalid());
        assert_eq!(sheet.invalid_cells(), &[CellRef { row: 1, col: 2 }]);
    }

    #[test]
    fn validate_is_idempotent_and_fires_listener_only_on_flip() {
        let mut sheet = person_sheet();
        let fired = listener_counter(&mut sheet);
        sheet.add_row(Person::new("", "nope"));
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        sheet.validate();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        let styles: Vec<_> = (0..3).map(|c| sheet.cell(1, c).unwrap().style()).collect();

        sheet.validate();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        let styles_again: Vec<_> = (0..3).map(|c| sheet.cell(1, c).unwrap().style()).collect();
        assert_eq!(styles, styles_again);
    }

    #[test]
    fn listener_fires_again_when_validity_is_restored() {
        let mut sheet = person_sheet();
        sheet.set_validation_mode(ValidationMode::Eager);
        let fired = listener_counter(&mut sheet);
        sheet.add_row(Person::new("Alice", "bad"));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        sheet.set_cell_value(1, 2, "30");
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn changing_the_failure_reason_does_not_fire_the_listener() {
        let mut sheet = person_sheet();
        sheet.set_validation_mode(ValidationMode::Eager);
        let fired = listener_counter(&mut sheet);
        sheet.add_row(Person::new("Alice", "first-bad"));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        sheet.set_cell_value(1, 2, "second-bad");
        assert_eq!(
            sheet.cell(1, 2).unwrap().comment(),
            Some("'second-bad' is not a number")
        );
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn removing_all_rows_leaves_one_fresh_factory_row() {
        let mut sheet = person_sheet();
        sheet.add_row(Person::new("Alice", "30"));
        sheet.add_row(Person::new("Bob", "41"));
        sheet.add_row(Person::new("Cara", "52"));
        for _ in 0..5 {
            sheet.remove_last_row();
        }
        assert_eq!(sheet.data_row_count(), 1);
        assert!(sheet.cell(0, 1).unwrap().style() == CellStyle::Header);
        assert_eq!(sheet.get_data()[0], &Person::default());
    }

    #[test]
    fn remove_last_row_is_a_no_op_on_a_header_only_sheet() {
        let mut sheet = person_sheet();
        sheet.remove_last_row();
        assert_eq!(sheet.row_count(), 1);
        assert_eq!(sheet.data_row_count(), 0);
    }

    #[test]
    fn removing_an_invalid_row_restores_validity() {
        let mut sheet = person_sheet();
        sheet.set_validation_mode(ValidationMode::Eager);
        sheet.add_row(Person::new("Alice", "30"));
        sheet.add_row(Person::new("", ""));
        assert!(sheet.is_invalid());
        sheet.remove_last_row();
        assert!(sheet.is_valid());
    }

    #[test]
    fn delete_row_rejects_out_of_range_indices() {
        let mut sheet = person_sheet();
        sheet.add_row(Person::new("Alice", "30"));
        let err = sheet.delete_row(9).unwrap_err();
        assert_eq!(err, GridError::RowIndexOutOfBounds { index: 9, last: 1 });
    }

    #[test]
    fn delete_row_keeps_the_header_with_a_no_op() {
        let mut sheet = person_sheet();
        sheet.add_row(Person::new("Alice", "30"));
        sheet.delete_row(0).unwrap();
        assert_eq!(sheet.row_count(), 2);
        assert!(sheet.cell(0, 1).unwrap().style() == CellStyle::Header);
    }

    #[test]
    fn add_empty_row_does_not_paint_the_fresh_row_invalid() {
        let mut sheet = person_sheet();
        sheet.set_validation_mode(ValidationMode::Eager);
        sheet.add_empty_row();
        assert!(sheet.is_valid());
        assert!(!sheet.cell(1, 1).unwrap().is_invalid());
        assert_eq!(sheet.validation_mode(), ValidationMode::Eager);
    }

    #[test]
    fn reset_rows_clears_data_and_reinstates_the_header() {
        let mut sheet = person_sheet();
        sheet.set_validation_mode(ValidationMode::Eager);
        sheet.add_row(Person::new("", "bad"));
        assert!(sheet.is_invalid());
        sheet.reset_rows();
        assert_eq!(sheet.row_count(), 1);
        assert_eq!(sheet.data_row_count(), 0);
        assert!(sheet.is_valid());
        assert_eq!(sheet.cell(0, 1).unwrap().value(), "Name*");
    }

    #[test]
    fn adding_a_column_materializes_cells_for_existing_rows() {
        let mut sheet = person_sheet();
        sheet.add_row(Person::new("Alice", "30"));
        let col = sheet.add_column(Column::new(
            "Name copy",
            |p: &Person| p.name.clone(),
            |p: &mut Person, v: &str| p.name = v.to_string(),
        ));
        assert_eq!(sheet.cell(0, col).unwrap().value(), "Name copy");
        assert_eq!(sheet.cell(1, col).unwrap().value(), "Alice");
    }

    #[test]
    fn locked_cells_refuse_edits() {
        let mut sheet = person_sheet();
        sheet.add_row(Person::new("Alice", "30"));
        sheet.set_cell_value(1, 0, "999");
        assert_eq!(sheet.cell(1, 0).unwrap().value(), "1");
        sheet.set_cell_value(0, 1, "hijacked");
        assert_eq!(sheet.cell(0, 1).unwrap().value(), "Name*");
    }

    #[test]
    fn out_of_bounds_edits_are_ignored() {
        let mut sheet = person_sheet();
        sheet.set_cell_value(42, 42, "nothing");
        assert_eq!(sheet.row_count(), 1);
    }

    #[test]
    fn select_column_validates_against_rendered_labels() {
        let mut sheet = person_sheet();
        sheet.set_validation_mode(ValidationMode::Eager);
        let col = sheet.add_column(
            Column::new(
                "Group",
                |_: &Person| String::new(),
                |_: &mut Person, _: &str| {},
            )
            .select_from(vec!["A", "B"], |s| s.to_string())
            .unwrap(),
        );
        sheet.add_row(Person::new("Alice", "30"));
        sheet.set_cell_value(1, col, "");
        assert!(sheet.is_valid());
        sheet.set_cell_value(1, col, "A");
        assert!(sheet.is_valid());
        sheet.set_cell_value(1, col, "C");
        assert!(sheet.is_invalid());
        let comment = sheet.cell(1, col).unwrap().comment().unwrap();
        assert!(comment.contains("'C' is not a valid option"));
        assert!(comment.contains("A"));
        assert!(comment.contains("B"));
    }

    #[test]
    fn open_editor_resolves_the_current_value() {
        let mut sheet = person_sheet();
        let col = sheet.add_column(
            Column::new(
                "Group",
                |_: &Person| String::new(),
                |_: &mut Person, _: &str| {},
            )
            .select_from(vec!["A", "B"], |s| s.to_string())
            .unwrap(),
        );
        sheet.add_row(Person::new("Alice", "30"));
        sheet.set_cell_value(1, col, "B");
        let session = sheet.open_editor(1, col).unwrap();
        assert_eq!(session.selected(), Some(1));
        // header cells and plain columns have no editor
        assert!(sheet.open_editor(0, col).is_none());
        assert!(sheet.open_editor(1, 1).is_none());
    }

    #[test]
    fn auto_fit_tracks_the_longest_value_with_a_floor() {
        let mut sheet = person_sheet();
        let narrow = sheet.column_width(1);
        sheet.add_row(Person::new("a-rather-long-sample-label", "30"));
        assert!(sheet.column_width(1) > narrow);
        assert_eq!(sheet.column_width(2), narrow);
        assert!(sheet.column_width(2) >= 64.0);
    }

    #[test]
    fn duplicate_values_in_a_distinct_column_are_flagged() {
        let mut sheet = Spreadsheet::new(Person::default);
        let col = sheet.add_column(
            Column::new(
                "Name",
                |p: &Person| p.name.clone(),
                |p: &mut Person, v: &str| p.name = v.to_string(),
            )
            .set_required()
            .require_distinct_values(),
        );
        sheet.set_validation_mode(ValidationMode::Eager);
        sheet.add_row(Person::new("s1", ""));
        sheet.add_row(Person::new("s2", ""));
        assert!(sheet.is_valid());

        sheet.set_cell_value(2, col, "s1");
        let cell = sheet.cell(2, col).unwrap();
        assert!(cell.is_invalid());
        assert!(cell.comment().unwrap().contains("'s1' appears more than once"));

        // a full pass also flags the first occurrence
        sheet.validate();
        assert!(sheet.cell(1, col).unwrap().is_invalid());

        sheet.set_cell_value(2, col, "s3");
        sheet.validate();
        assert!(sheet.is_valid());
    }

    #[test]
    fn bean_driven_select_constrains_each_row_to_its_own_options() {
        let mut sheet = Spreadsheet::new(Person::default);
        let group_col = sheet.add_column(Column::new(
            "Group",
            |p: &Person| p.name.clone(),
            |p: &mut Person, v: &str| p.name = v.to_string(),
        ));
        let replicate_col = sheet.add_column(
            Column::new(
                "Replicate",
                |p: &Person| p.age.clone(),
                |p: &mut Person, v: &str| p.age = v.to_string(),
            )
            .select_from_with(
                |p: &Person| {
                    if p.name.is_empty() {
                        Vec::new()
                    } else {
                        vec![format!("{} rep1", p.name), format!("{} rep2", p.name)]
                    }
                },
                |label: &String| label.clone(),
            )
            .unwrap(),
        );
        sheet.set_validation_mode(ValidationMode::Eager);
        sheet.add_row(Person::default());

        sheet.set_cell_value(1, group_col, "control");
        let session = sheet.open_editor(1, replicate_col).unwrap();
        assert_eq!(session.options(), ["control rep1", "control rep2"]);

        sheet.set_cell_value(1, replicate_col, "control rep2");
        assert!(sheet.is_valid());

        // another row's group does not make its replicates valid here
        sheet.set_cell_value(1, replicate_col, "treated rep1");
        let cell = sheet.cell(1, replicate_col).unwrap();
        assert!(cell.is_invalid());
        assert!(cell
            .comment()
            .unwrap()
            .contains("'treated rep1' is not a valid option"));
    }

    #[test]
    fn into_data_preserves_insertion_order() {
        let mut sheet = person_sheet();
        sheet.add_row(Person::new("Alice", "30"));
        sheet.add_row(Person::new("Bob", "41"));
        let beans = sheet.into_data();
        assert_eq!(beans, vec![Person::new("Alice", "30"), Person::new("Bob", "41")]);
    }
}
