//! # Edit Session
//!
//! One user's editing state for a page: the composition, the exclusive
//! selection, undo history, the drag gesture in progress, and the sinks that
//! receive post-effects.
//!
//! All operations are synchronous and never fail; stale ids and out-of-range
//! indices degrade to no-ops or clamping.

use crate::drag::{DragController, SlotRect};
use crate::inline_editor::{InlineEditor, SurfaceEntry};
use crate::mutations::{apply_add, Applied, Mutation};
use crate::post_effects::{Effect, EffectContext, EffectSink, PostEffectEngine};
use crate::selection::Selection;
use crate::undo_stack::UndoStack;
use crate::Composition;
use pagesmith_model::{WidgetData, WidgetId, WidgetInstance, WidgetType};
use pagesmith_preview::{render_preview, Preview, Viewport};
use pagesmith_registry::Registry;
use serde_json::Value;
use tracing::{debug, info};

/// Tunables for an edit session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Maximum number of undo levels (0 = unlimited)
    pub max_undo_levels: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_undo_levels: 100,
        }
    }
}

/// Single edit session over one composition
pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    composition: Composition,
    selection: Selection,
    history: UndoStack,
    drag: DragController,
    editor: InlineEditor,
    effects: PostEffectEngine,
    sinks: Vec<Box<dyn EffectSink>>,
}

impl EditSession {
    /// Create new edit session
    pub fn new(id: impl Into<String>, composition: Composition) -> Self {
        Self::with_options(id, composition, SessionOptions::default())
    }

    pub fn with_options(id: impl Into<String>, composition: Composition, options: SessionOptions) -> Self {
        let id = id.into();
        info!(session = %id, widgets = composition.len(), "Starting edit session");

        Self {
            id,
            composition,
            selection: Selection::new(),
            history: UndoStack::with_max_levels(options.max_undo_levels),
            drag: DragController::new(),
            editor: InlineEditor::new(Registry::new()),
            effects: PostEffectEngine::new(),
            sinks: Vec::new(),
        }
    }

    /// Replace the post-effect engine
    pub fn with_effects(mut self, effects: PostEffectEngine) -> Self {
        self.effects = effects;
        self
    }

    /// Receive effects from now on
    pub fn subscribe(&mut self, sink: impl EffectSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Outbound records
    pub fn records(&self) -> Vec<WidgetInstance> {
        self.composition.to_records()
    }

    pub fn selected(&self) -> Option<&WidgetId> {
        self.selection.selected()
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    // -- composition operations ------------------------------------------

    /// Append a widget of `widget_type`
    pub fn add_widget(&mut self, widget_type: WidgetType) -> WidgetId {
        let (id, applied) = apply_add(&mut self.composition, widget_type);
        debug!(session = %self.id, widget_id = %id, widget_type = %widget_type, "Added widget");
        self.history.record(applied.clone());
        self.after_change(std::slice::from_ref(&applied));
        id
    }

    /// Shallow-merge `patch` into a widget's data. No-op for an absent id.
    pub fn update_widget(&mut self, id: &WidgetId, patch: WidgetData) -> bool {
        self.apply(&Mutation::UpdateWidget {
            id: id.clone(),
            patch,
        })
        .is_some()
    }

    /// Delete a widget. No-op for an absent id.
    pub fn remove_widget(&mut self, id: &WidgetId) -> bool {
        self.apply(&Mutation::RemoveWidget { id: id.clone() }).is_some()
    }

    /// Move a widget, clamping `index`
    pub fn reorder(&mut self, id: &WidgetId, index: usize) -> bool {
        self.apply(&Mutation::Reorder {
            id: id.clone(),
            index,
        })
        .is_some()
    }

    pub fn duplicate_widget(&mut self, id: &WidgetId) -> Option<WidgetId> {
        self.apply(&Mutation::DuplicateWidget { id: id.clone() })?
            .target()
            .cloned()
    }

    /// Apply any mutation with undo recording and post-effects
    pub fn apply(&mut self, mutation: &Mutation) -> Option<Applied> {
        let applied = self.history.apply(mutation, &mut self.composition);
        match &applied {
            Some(change) => {
                debug!(session = %self.id, mutation = mutation.name(), target = ?change.target(), "Applied mutation");
                self.after_change(std::slice::from_ref(change));
            }
            None => debug!(session = %self.id, mutation = mutation.name(), "Mutation was a no-op"),
        }
        applied
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo(&mut self.composition) {
            Some(changes) => {
                self.after_change(&changes);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(&mut self.composition) {
            Some(changes) => {
                self.after_change(&changes);
                true
            }
            None => false,
        }
    }

    /// Group following edits into one undo step (e.g. while a field has focus)
    pub fn begin_batch(&mut self, description: impl Into<String>) {
        self.history.begin_batch();
        self.history.set_batch_description(description);
    }

    pub fn end_batch(&mut self) {
        self.history.end_batch();
    }

    // -- selection and inline editing ------------------------------------

    /// Select exclusively; `None` clears. Selecting an absent id is ignored.
    pub fn select_widget(&mut self, id: Option<&WidgetId>) -> bool {
        if let Some(id) = id {
            if !self.composition.contains(id) {
                debug!(widget_id = %id, "Ignoring selection of missing widget");
                return false;
            }
        }
        let changed = self.selection.select(id.cloned());
        if changed {
            self.deliver(&[Effect::SelectionChanged(id.cloned())]);
        }
        changed
    }

    /// Route one field edit from the selected widget's form to `update_widget`.
    ///
    /// Returns `false` when nothing is selected, the selected type has no
    /// editable fields, or the value does not fit the field.
    pub fn edit_field(&mut self, field: &str, value: Value) -> bool {
        let Some((id, form)) = self.editor.selected_form(&self.composition, &self.selection) else {
            return false;
        };

        let mut pending = None;
        if !form.input(field, value, |patch| pending = Some(patch)) {
            debug!(widget_id = %id, field, "Field edit rejected");
            return false;
        }

        match pending {
            Some(patch) => self.update_widget(&id, patch),
            None => false,
        }
    }

    /// Canvas entries in visual order
    pub fn surface(&self) -> Vec<SurfaceEntry> {
        self.editor
            .render_surface(&self.composition, &self.selection, &self.drag)
    }

    // -- drag gesture ----------------------------------------------------

    pub fn begin_drag(&mut self, id: &WidgetId) -> bool {
        self.drag.begin(id, &self.composition)
    }

    pub fn pointer_move(&mut self, pointer_y: f64, slots: &[SlotRect]) -> Option<usize> {
        self.drag.pointer_move(pointer_y, slots)
    }

    pub fn drag_to(&mut self, index: usize) -> Option<usize> {
        self.drag.move_to(index, self.composition.len())
    }

    /// Drop: commits exactly one reorder for the dragged widget
    pub fn drop_drag(&mut self) -> bool {
        match self.drag.drop() {
            Some(commit) => {
                debug!(widget_id = %commit.id, from = commit.from, to = commit.to, "Committing drag");
                self.reorder(&commit.id, commit.to)
            }
            None => false,
        }
    }

    /// Cancel: discards the pending move
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.cancel()
    }

    // -- preview ---------------------------------------------------------

    /// Read-only preview of the current composition snapshot
    pub fn preview(&self, viewport: Viewport) -> Preview {
        render_preview(self.composition.widgets(), viewport)
    }

    // -- internals -------------------------------------------------------

    fn after_change(&mut self, changes: &[Applied]) {
        let mut effects = Vec::new();

        if let Some(selected) = self.selection.selected() {
            if !self.composition.contains(selected) {
                self.selection.clear();
                effects.push(Effect::SelectionChanged(None));
            }
        }

        let ctx = EffectContext {
            composition: &self.composition,
            selected: self.selection.selected(),
        };
        effects.extend(self.effects.run(changes, &ctx));
        self.deliver(&effects);
    }

    fn deliver(&mut self, effects: &[Effect]) {
        for effect in effects {
            for sink in &mut self.sinks {
                sink.deliver(effect);
            }
        }
    }
}

impl std::fmt::Debug for EditSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSession")
            .field("id", &self.id)
            .field("composition", &self.composition)
            .field("selection", &self.selection)
            .field("drag", &self.drag)
            .field("sinks", &format!("{} sinks", self.sinks.len()))
            .finish()
    }
}
