//! # Composition
//!
//! The ordered list of widget instances that makes up a page.
//!
//! Invariants held after every operation:
//! - ids are unique
//! - the sequence is dense (a `Vec`, positions `0..len`)
//! - ids are never reissued to a different widget
//!
//! Operations on an id that is not present are no-ops and report `false`.

use crate::EditorError;
use pagesmith_model::{
    merge_patch, patch_changes, strip_nulls, IdGenerator, ModelError, WidgetData, WidgetId,
    WidgetInstance, WidgetType,
};
use std::collections::HashSet;
use tracing::debug;

/// Ordered widget sequence of a page
#[derive(Debug, Clone)]
pub struct Composition {
    widgets: Vec<WidgetInstance>,
    ids: IdGenerator,

    /// Current version number (increments on each effective mutation)
    pub version: u64,
}

impl Composition {
    pub fn new() -> Self {
        Self {
            widgets: Vec::new(),
            ids: IdGenerator::new(),
            version: 0,
        }
    }

    /// Load records supplied by the embedding application
    pub fn from_records(mut records: Vec<WidgetInstance>) -> Result<Self, EditorError> {
        let mut seen = HashSet::new();
        for (index, record) in records.iter().enumerate() {
            if record.id.as_str().is_empty() {
                return Err(ModelError::EmptyId(index).into());
            }
            if !seen.insert(&record.id) {
                return Err(ModelError::DuplicateId(record.id.to_string()).into());
            }
        }

        for record in &mut records {
            strip_nulls(&mut record.data);
        }

        let ids = IdGenerator::seeded(records.iter().map(|r| &r.id));
        debug!(widgets = records.len(), "Loaded composition");

        Ok(Self {
            widgets: records,
            ids,
            version: 0,
        })
    }

    /// Decode records from JSON text
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        let records: Vec<WidgetInstance> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Outbound snapshot in record shape
    pub fn to_records(&self) -> Vec<WidgetInstance> {
        self.widgets.clone()
    }

    pub fn widgets(&self) -> &[WidgetInstance] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn ids(&self) -> Vec<WidgetId> {
        self.widgets.iter().map(|w| w.id.clone()).collect()
    }

    pub fn get(&self, id: &WidgetId) -> Option<&WidgetInstance> {
        self.widgets.iter().find(|w| &w.id == id)
    }

    pub fn index_of(&self, id: &WidgetId) -> Option<usize> {
        self.widgets.iter().position(|w| &w.id == id)
    }

    pub fn contains(&self, id: &WidgetId) -> bool {
        self.index_of(id).is_some()
    }

    /// Append a new widget with an empty field bag
    pub fn add_widget(&mut self, widget_type: WidgetType) -> WidgetId {
        let id = self.ids.next_id();
        self.widgets.push(WidgetInstance::new(id.clone(), widget_type));
        self.bump();
        id
    }

    /// Insert an existing instance at `index` (clamped to `0..=len`).
    ///
    /// Refused when the id is already present.
    pub fn insert_widget(&mut self, index: usize, mut instance: WidgetInstance) -> bool {
        if self.contains(&instance.id) {
            return false;
        }
        strip_nulls(&mut instance.data);
        self.ids.reserve(&instance.id);
        let index = index.min(self.widgets.len());
        self.widgets.insert(index, instance);
        self.bump();
        true
    }

    /// Shallow-merge `patch` into a widget's field bag.
    ///
    /// Returns the previous values of the patched keys, or `None` when the id
    /// is absent or the patch would change nothing.
    pub fn update_widget(&mut self, id: &WidgetId, patch: &WidgetData) -> Option<WidgetData> {
        let widget = self.widgets.iter_mut().find(|w| &w.id == id)?;
        if !patch_changes(&widget.data, patch) {
            return None;
        }
        let previous = merge_patch(&mut widget.data, patch);
        self.bump();
        Some(previous)
    }

    /// Delete a widget, returning it with its former index
    pub fn remove_widget(&mut self, id: &WidgetId) -> Option<(usize, WidgetInstance)> {
        let index = self.index_of(id)?;
        let removed = self.widgets.remove(index);
        self.bump();
        Some((index, removed))
    }

    /// Move a widget to `new_index`, clamped to `0..len`.
    ///
    /// Returns the former index, or `None` when the id is absent. Moving to the
    /// current position leaves the version unchanged.
    pub fn reorder(&mut self, id: &WidgetId, new_index: usize) -> Option<usize> {
        let from = self.index_of(id)?;
        let to = new_index.min(self.widgets.len() - 1);
        if from != to {
            let widget = self.widgets.remove(from);
            self.widgets.insert(to, widget);
            self.bump();
        }
        Some(from)
    }

    /// Copy a widget's type and data into a new instance placed right after it
    pub fn duplicate_widget(&mut self, id: &WidgetId) -> Option<WidgetId> {
        let index = self.index_of(id)?;
        let source = &self.widgets[index];
        let copy = WidgetInstance::with_tag(self.ids.next_id(), source.widget_type.clone())
            .with_data(source.data.clone());
        let new_id = copy.id.clone();
        self.widgets.insert(index + 1, copy);
        self.bump();
        Some(new_id)
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::new()
    }
}
