//! # Undo/Redo Stack
//!
//! Tracks mutation history and enables undo/redo operations.
//!
//! ## Design
//!
//! - Applying a mutation records its resolved forward form and its inverse
//! - Undo applies the inverses and moves the batch to the redo stack
//! - Redo replays the forward mutations
//! - New mutations clear the redo stack
//! - No-op mutations are not recorded
//! - Batches group several mutations (e.g. a burst of keystrokes) into one step
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//! let mut comp = Composition::new();
//!
//! stack.apply(&Mutation::AddWidget { widget_type: WidgetType::Hero }, &mut comp);
//! stack.undo(&mut comp);
//! stack.redo(&mut comp);
//! ```

use crate::mutations::{Applied, Mutation};
use crate::Composition;

/// A group of mutations that should be undone/redone together
#[derive(Debug, Clone)]
pub struct MutationBatch {
    /// The mutations in this batch (in application order)
    pub mutations: Vec<Mutation>,

    /// The inverse mutations (in reverse order for undo)
    pub inverses: Vec<Mutation>,

    /// Optional description of this batch
    pub description: Option<String>,
}

impl MutationBatch {
    fn empty() -> Self {
        Self {
            mutations: Vec::new(),
            inverses: Vec::new(),
            description: None,
        }
    }

    /// Create a single-mutation batch
    pub fn single(applied: Applied) -> Self {
        Self {
            mutations: vec![applied.forward],
            inverses: vec![applied.inverse],
            description: None,
        }
    }

    /// Add a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Undo/redo stack for composition editing
#[derive(Debug)]
pub struct UndoStack {
    /// Stack of applied mutations (most recent last)
    undo_stack: Vec<MutationBatch>,

    /// Stack of undone mutations (most recent last)
    redo_stack: Vec<MutationBatch>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    current_batch: Option<MutationBatch>,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Apply a mutation and record it for undo
    pub fn apply(&mut self, mutation: &Mutation, comp: &mut Composition) -> Option<Applied> {
        let applied = mutation.apply(comp)?;
        self.record(applied.clone());
        Some(applied)
    }

    /// Record a mutation that was already applied
    pub fn record(&mut self, applied: Applied) {
        if let Some(batch) = &mut self.current_batch {
            batch.mutations.push(applied.forward);
            batch.inverses.insert(0, applied.inverse);
        } else {
            self.push_batch(MutationBatch::single(applied));
        }
    }

    /// Start a batch of mutations (will be undone/redone together)
    pub fn begin_batch(&mut self) {
        if self.current_batch.is_none() {
            self.current_batch = Some(MutationBatch::empty());
        }
    }

    /// End the current batch and push to undo stack
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if !batch.mutations.is_empty() {
                self.push_batch(batch);
            }
        }
    }

    pub fn is_batching(&self) -> bool {
        self.current_batch.is_some()
    }

    /// Set description for current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    /// Push a batch to the undo stack
    fn push_batch(&mut self, batch: MutationBatch) {
        self.undo_stack.push(batch);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // New action invalidates the redo future
        self.redo_stack.clear();
    }

    /// Undo the most recent batch, returning what changed (`None` if nothing to undo)
    pub fn undo(&mut self, comp: &mut Composition) -> Option<Vec<Applied>> {
        self.end_batch();
        let batch = self.undo_stack.pop()?;
        let changes = batch
            .inverses
            .iter()
            .filter_map(|inverse| inverse.apply(comp))
            .collect();
        self.redo_stack.push(batch);
        Some(changes)
    }

    /// Redo the most recently undone batch
    pub fn redo(&mut self, comp: &mut Composition) -> Option<Vec<Applied>> {
        let batch = self.redo_stack.pop()?;
        let changes = batch
            .mutations
            .iter()
            .filter_map(|mutation| mutation.apply(comp))
            .collect();
        self.undo_stack.push(batch);
        Some(changes)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
