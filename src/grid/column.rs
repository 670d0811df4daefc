// src/grid/column.rs
//! Column definitions: the binding between row beans and rendered cells.

use super::cell::CellStyle;
use super::error::{GridError, GridResult};
use super::select::{labels_match, CellEditor, SelectEditor};
use super::validation::{BeanValidator, CellValidator, ColumnValuesValidator};

/// Binds one field of the row bean `T` to a grid column.
///
/// The getter renders the bean field as cell text; the setter parses edited
/// cell text back into the bean. All model writes flow through the setter,
/// which keeps bean and surface in sync by construction.
///
/// Three validator kinds run per cell, in this order: plain cell validators
/// over the text, bean validators that also see the row bean, and
/// column-scoped validators that see every current value of the column.
pub struct Column<T> {
    name: String,
    getter: Box<dyn Fn(&T) -> String + Send + Sync>,
    setter: Box<dyn Fn(&mut T, &str) + Send + Sync>,
    validators: Vec<CellValidator>,
    bean_validators: Vec<BeanValidator<T>>,
    column_validators: Vec<ColumnValuesValidator>,
    editor: Option<Box<dyn CellEditor<T>>>,
    style: Option<CellStyle>,
    required: bool,
    row_number: bool,
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("style", &self.style)
            .field("required", &self.required)
            .field("row_number", &self.row_number)
            .finish_non_exhaustive()
    }
}

impl<T> Column<T> {
    pub fn new(
        name: impl Into<String>,
        getter: impl Fn(&T) -> String + Send + Sync + 'static,
        setter: impl Fn(&mut T, &str) + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            getter: Box::new(getter),
            setter: Box::new(setter),
            validators: Vec::new(),
            bean_validators: Vec::new(),
            column_validators: Vec::new(),
            editor: None,
            style: None,
            required: false,
            row_number: false,
        }
    }

    /// The leading row-number column every spreadsheet installs for itself.
    pub(crate) fn row_number() -> Self {
        let mut column = Column::new("#", |_: &T| String::new(), |_: &mut T, _: &str| {});
        column.style = Some(CellStyle::RowNumber);
        column.row_number = true;
        column
    }

    /// Appends a validator to the column's ordered validator list.
    pub fn with_validator(
        mut self,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
        error_message: impl Into<String>,
    ) -> Self {
        self.validators.push(CellValidator::new(predicate, error_message));
        self
    }

    /// Marks the column mandatory: a blank-rejecting validator is inserted at
    /// the front of the validator list and the displayed name gets a `*`.
    pub fn set_required(mut self) -> Self {
        self.required = true;
        self.name.push('*');
        let message = format!(
            "The column '{}' does not allow empty values.\nPlease enter a value.",
            self.name
        );
        self.validators
            .insert(0, CellValidator::new(|value: &str| !value.trim().is_empty(), message));
        self
    }

    /// Rejects values appearing in more than one cell of this column.
    /// Blank cells are exempt; the required validator covers those.
    pub fn require_distinct_values(mut self) -> Self {
        let message = format!(
            "The column '{}' does not allow duplicate values.\n'{{0}}' appears more than once.",
            self.name
        );
        self.column_validators.push(ColumnValuesValidator::new(
            |values: &[String], value: &str| {
                value.trim().is_empty()
                    || values.iter().filter(|v| v.as_str() == value).count() <= 1
            },
            message,
        ));
        self
    }

    /// Restricts the column to a closed list of items. Installs a select
    /// editor and a validator accepting blank or any rendered label.
    ///
    /// A column can only carry one editor; configuring a second one is a
    /// wiring mistake and is rejected.
    pub fn select_from<E>(
        mut self,
        items: Vec<E>,
        to_label: impl Fn(&E) -> String + Send + Sync + 'static,
    ) -> GridResult<Self>
    where
        E: Clone + Send + Sync + 'static,
        T: 'static,
    {
        if self.editor.is_some() {
            return Err(GridError::EditorAlreadyConfigured {
                column: self.name.clone(),
            });
        }
        let allowed: Vec<String> = items.iter().map(|item| to_label(item)).collect();
        let message = format!(
            "'{{0}}' is not a valid option for column '{}'. Expected one of: {:?}",
            self.name, allowed
        );
        self.validators.push(CellValidator::new(
            move |value: &str| {
                value.trim().is_empty() || allowed.iter().any(|label| labels_match(label, value))
            },
            message,
        ));
        self.editor = Some(Box::new(SelectEditor::fixed(items, to_label)));
        Ok(self)
    }

    /// Restricts the column to a closed list recomputed from the row bean,
    /// for columns whose choices depend on other fields of the same row.
    pub fn select_from_with<E>(
        mut self,
        provider: impl Fn(&T) -> Vec<E> + Send + Sync + 'static,
        to_label: impl Fn(&E) -> String + Send + Sync + 'static,
    ) -> GridResult<Self>
    where
        E: Send + Sync + 'static,
        T: 'static,
    {
        if self.editor.is_some() {
            return Err(GridError::EditorAlreadyConfigured {
                column: self.name.clone(),
            });
        }
        let editor = SelectEditor::with_provider(provider, to_label);
        let message = format!(
            "'{{0}}' is not a valid option for column '{}'.",
            self.name
        );
        let checker = editor.clone();
        self.bean_validators.push(BeanValidator::new(
            move |bean: &T, value: &str| {
                value.trim().is_empty() || checker.resolve(bean, value).is_some()
            },
            message,
        ));
        self.editor = Some(Box::new(editor));
        Ok(self)
    }

    /// Fixed style for this column's data cells, e.g. `Locked`.
    pub fn with_cell_style(mut self, style: CellStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn has_editor(&self) -> bool {
        self.editor.is_some()
    }

    pub fn validators(&self) -> &[CellValidator] {
        &self.validators
    }

    pub fn bean_validators(&self) -> &[BeanValidator<T>] {
        &self.bean_validators
    }

    pub fn column_validators(&self) -> &[ColumnValuesValidator] {
        &self.column_validators
    }

    pub(crate) fn style(&self) -> Option<CellStyle> {
        self.style
    }

    pub(crate) fn is_row_number(&self) -> bool {
        self.row_number
    }

    pub(crate) fn editor(&self) -> Option<&dyn CellEditor<T>> {
        self.editor.as_deref()
    }

    pub(crate) fn render(&self, bean: &T) -> String {
        (self.getter)(bean)
    }

    pub(crate) fn apply_to_bean(&self, bean: &mut T, value: &str) {
        (self.setter)(bean, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Sample {
        label: String,
        group: String,
    }

    fn label_column() -> Column<Sample> {
        Column::new(
            "Label",
            |s: &Sample| s.label.clone(),
            |s: &mut Sample, v: &str| s.label = v.to_string(),
        )
    }

    #[test]
    fn getter_and_setter_round_trip_through_the_bean() {
        let column = label_column();
        let mut bean = Sample::default();
        column.apply_to_bean(&mut bean, "QTEST001AE");
        assert_eq!(column.render(&bean), "QTEST001AE");
    }

    #[test]
    fn set_required_prepends_the_blank_validator_and_stars_the_name() {
        let column = label_column()
            .with_validator(|v| v.len() <= 10, "too long")
            .set_required();
        assert_eq!(column.name(), "Label*");
        assert!(column.is_required());
        // blank check runs first even though it was configured last
        let first = column.validators()[0].validate("  ");
        assert!(first.is_invalid());
        assert!(first.message().contains("Label*"));
    }

    #[test]
    fn required_column_accepts_any_non_blank_value() {
        let column = label_column().set_required();
        assert!(column.validators()[0].validate("x").is_valid());
        assert!(column.validators()[0].validate("").is_invalid());
        assert!(column.validators()[0].validate(" ").is_invalid());
    }

    #[test]
    fn select_from_accepts_blank_and_known_labels_only() {
        let column = label_column()
            .select_from(vec!["A", "B"], |s| s.to_string())
            .unwrap();
        assert!(column.has_editor());
        let validator = &column.validators()[0];
        assert!(validator.validate("").is_valid());
        assert!(validator.validate("A").is_valid());
        let result = validator.validate("C");
        assert!(result.is_invalid());
        assert!(result.message().contains("'C' is not a valid option"));
        assert!(result.message().contains("A"));
        assert!(result.message().contains("B"));
    }

    #[test]
    fn select_from_with_validates_against_the_beans_own_options() {
        let column = label_column()
            .select_from_with(
                |s: &Sample| {
                    if s.group.is_empty() {
                        Vec::new()
                    } else {
                        vec![format!("{} rep1", s.group), format!("{} rep2", s.group)]
                    }
                },
                |label: &String| label.clone(),
            )
            .unwrap();
        assert!(column.has_editor());
        let validator = &column.bean_validators()[0];
        let control = Sample {
            group: "control".to_string(),
            ..Sample::default()
        };
        assert!(validator.validate(&control, "").is_valid());
        assert!(validator.validate(&control, "control rep1").is_valid());
        let result = validator.validate(&control, "treated rep1");
        assert!(result.is_invalid());
        assert!(result.message().contains("'treated rep1' is not a valid option"));
    }

    #[test]
    fn require_distinct_values_flags_duplicates_only() {
        let column = label_column().require_distinct_values();
        let validator = &column.column_validators()[0];
        let values = vec![
            "s1".to_string(),
            "s2".to_string(),
            "s1".to_string(),
            String::new(),
            String::new(),
        ];
        assert!(validator.validate(&values, "s2").is_valid());
        assert!(validator.validate(&values, "").is_valid());
        let result = validator.validate(&values, "s1");
        assert!(result.is_invalid());
        assert!(result.message().contains("'s1' appears more than once"));
    }

    #[test]
    fn second_select_from_is_rejected() {
        let column = label_column()
            .select_from(vec!["A"], |s| s.to_string())
            .unwrap();
        let err = column.select_from(vec!["B"], |s| s.to_string()).unwrap_err();
        assert_eq!(
            err,
            GridError::EditorAlreadyConfigured {
                column: "Label".to_string()
            }
        );
    }

    #[test]
    fn mixing_select_variants_is_rejected_too() {
        let column = label_column()
            .select_from_with(|_: &Sample| vec!["A".to_string()], |s: &String| s.clone())
            .unwrap();
        let err = column.select_from(vec!["B"], |s| s.to_string()).unwrap_err();
        assert_eq!(
            err,
            GridError::EditorAlreadyConfigured {
                column: "Label".to_string()
            }
        );
    }
}
