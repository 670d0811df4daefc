// src/grid/select.rs
//! Closed-vocabulary cell editors.
//!
//! A `SelectEditor` holds an item provider and a label function for a
//! column. The provider may ignore the row bean (a fixed vocabulary) or
//! recompute the list from it, so one row's choices can depend on another
//! field of the same row. Every cell activation produces a fresh
//! `EditorSession` that owns its own selection state, so stale state from a
//! previous cell can never leak into the next activation.

use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

/// Labels are compared after NFC normalization so visually identical
/// composed/decomposed forms resolve to the same option.
pub(crate) fn normalize_label(value: &str) -> String {
    value.nfc().collect()
}

pub(crate) fn labels_match(a: &str, b: &str) -> bool {
    normalize_label(a) == normalize_label(b)
}

/// A cell editor that can open per-activation sessions. Implemented by
/// `SelectEditor` and object-safe so columns can store it type-erased.
pub trait CellEditor<T>: Send + Sync {
    fn open_session(&self, bean: &T, current_value: &str) -> EditorSession;
}

/// Offers a closed list of items, rendered through a label function.
pub struct SelectEditor<T, E> {
    provider: Arc<dyn Fn(&T) -> Vec<E> + Send + Sync>,
    to_label: Arc<dyn Fn(&E) -> String + Send + Sync>,
}

impl<T, E> SelectEditor<T, E> {
    /// An editor over a fixed item list, the same for every row.
    pub fn fixed(items: Vec<E>, to_label: impl Fn(&E) -> String + Send + Sync + 'static) -> Self
    where
        E: Clone + Send + Sync + 'static,
    {
        Self::with_provider(move |_| items.clone(), to_label)
    }

    /// An editor whose item list is recomputed from the row bean on every
    /// activation.
    pub fn with_provider(
        provider: impl Fn(&T) -> Vec<E> + Send + Sync + 'static,
        to_label: impl Fn(&E) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            provider: Arc::new(provider),
            to_label: Arc::new(to_label),
        }
    }

    /// The rendered option labels this row currently offers.
    pub fn labels_for(&self, bean: &T) -> Vec<String> {
        (self.provider)(bean)
            .iter()
            .map(|item| (self.to_label)(item))
            .collect()
    }

    /// Resolves a cell value back to an option index by label equality.
    /// Values matching no label resolve to `None`, which clears the editor.
    pub fn resolve(&self, bean: &T, value: &str) -> Option<usize> {
        self.labels_for(bean)
            .iter()
            .position(|label| labels_match(label, value))
    }
}

impl<T, E> Clone for SelectEditor<T, E> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            to_label: Arc::clone(&self.to_label),
        }
    }
}

impl<T, E> CellEditor<T> for SelectEditor<T, E> {
    fn open_session(&self, bean: &T, current_value: &str) -> EditorSession {
        let options = self.labels_for(bean);
        let selected = options
            .iter()
            .position(|label| labels_match(label, current_value));
        EditorSession { options, selected }
    }
}

/// One activation of a select editor on one cell. Discarded when the cell
/// deactivates; the next activation gets a fresh session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    options: Vec<String>,
    selected: Option<usize>,
}

impl EditorSession {
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selects an option by index. Out-of-range indices clear the selection.
    pub fn select(&mut self, index: usize) {
        self.selected = if index < self.options.len() {
            Some(index)
        } else {
            None
        };
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The cell text this session would commit: the selected label, or the
    /// empty string when nothing is selected.
    pub fn cell_value(&self) -> String {
        self.selected
            .and_then(|index| self.options.get(index).cloned())
            .unwrap_or_default()
    }
}
