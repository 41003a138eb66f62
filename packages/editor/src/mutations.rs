//! # Composition Mutations
//!
//! Serializable operations on a [`Composition`].
//!
//! ## Mutation Semantics
//!
//! ### AddWidget
//! - Appends a fresh instance with an empty field bag
//! - Resolves to an `InsertWidget` carrying the created instance, so replaying
//!   it (redo) restores the same id instead of minting a new one
//!
//! ### UpdateWidget
//! - Shallow merge; `null` resets a field to its default
//! - Absent id or empty patch is a no-op
//!
//! ### RemoveWidget / Reorder / DuplicateWidget
//! - Absent id is a no-op
//! - Reorder index is clamped; moving to the current index is a no-op

use crate::Composition;
use pagesmith_model::{WidgetData, WidgetId, WidgetInstance, WidgetType};
use serde::{Deserialize, Serialize};

/// Semantic operations on a composition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a new widget of the given type
    AddWidget { widget_type: WidgetType },

    /// Insert a complete instance at index (undo of remove, redo of add)
    InsertWidget {
        index: usize,
        widget: WidgetInstance,
    },

    /// Merge fields into a widget's data
    UpdateWidget { id: WidgetId, patch: WidgetData },

    /// Delete a widget
    RemoveWidget { id: WidgetId },

    /// Move a widget to a new index
    Reorder { id: WidgetId, index: usize },

    /// Copy a widget right after itself
    DuplicateWidget { id: WidgetId },
}

/// Outcome of a mutation that changed the composition
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    /// Replayable form of what happened
    pub forward: Mutation,

    /// Mutation that reverts it
    pub inverse: Mutation,
}

impl Applied {
    /// Widget the mutation touched
    pub fn target(&self) -> Option<&WidgetId> {
        self.forward.target()
    }
}

impl Mutation {
    /// Widget this mutation addresses, if it names one
    pub fn target(&self) -> Option<&WidgetId> {
        match self {
            Mutation::AddWidget { .. } => None,
            Mutation::InsertWidget { widget, .. } => Some(&widget.id),
            Mutation::UpdateWidget { id, .. }
            | Mutation::RemoveWidget { id }
            | Mutation::Reorder { id, .. }
            | Mutation::DuplicateWidget { id } => Some(id),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddWidget { .. } => "add_widget",
            Mutation::InsertWidget { .. } => "insert_widget",
            Mutation::UpdateWidget { .. } => "update_widget",
            Mutation::RemoveWidget { .. } => "remove_widget",
            Mutation::Reorder { .. } => "reorder",
            Mutation::DuplicateWidget { .. } => "duplicate_widget",
        }
    }

    /// Apply to a composition. `None` means nothing changed.
    pub fn apply(&self, comp: &mut Composition) -> Option<Applied> {
        match self {
            Mutation::AddWidget { widget_type } => Some(apply_add(comp, *widget_type).1),

            Mutation::InsertWidget { index, widget } => {
                if !comp.insert_widget(*index, widget.clone()) {
                    return None;
                }
                Some(Applied {
                    forward: self.clone(),
                    inverse: Mutation::RemoveWidget {
                        id: widget.id.clone(),
                    },
                })
            }

            Mutation::UpdateWidget { id, patch } => {
                let previous = comp.update_widget(id, patch)?;
                Some(Applied {
                    forward: self.clone(),
                    inverse: Mutation::UpdateWidget {
                        id: id.clone(),
                        patch: previous,
                    },
                })
            }

            Mutation::RemoveWidget { id } => {
                let (index, widget) = comp.remove_widget(id)?;
                Some(Applied {
                    forward: self.clone(),
                    inverse: Mutation::InsertWidget { index, widget },
                })
            }

            Mutation::Reorder { id, index } => {
                let version = comp.version;
                let from = comp.reorder(id, *index)?;
                if comp.version == version {
                    return None;
                }
                Some(Applied {
                    forward: Mutation::Reorder {
                        id: id.clone(),
                        index: comp.index_of(id)?,
                    },
                    inverse: Mutation::Reorder {
                        id: id.clone(),
                        index: from,
                    },
                })
            }

            Mutation::DuplicateWidget { id } => {
                let new_id = comp.duplicate_widget(id)?;
                let index = comp.index_of(&new_id)?;
                let widget = comp.get(&new_id)?.clone();
                Some(Applied {
                    forward: Mutation::InsertWidget { index, widget },
                    inverse: Mutation::RemoveWidget { id: new_id },
                })
            }
        }
    }
}

/// Append a widget, returning its id and the resolved change
pub(crate) fn apply_add(comp: &mut Composition, widget_type: WidgetType) -> (WidgetId, Applied) {
    let id = comp.add_widget(widget_type);
    let index = comp.len() - 1;
    let applied = Applied {
        forward: Mutation::InsertWidget {
            index,
            widget: WidgetInstance::new(id.clone(), widget_type),
        },
        inverse: Mutation::RemoveWidget { id: id.clone() },
    };
    (id, applied)
}
