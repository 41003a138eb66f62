//! # Drag Reorder
//!
//! State machine for a single drag gesture over the widget list.
//!
//! ```text
//!          begin(id)                 drop()
//!   Idle ───────────▶ Dragging ─────────────▶ Idle   (one reorder committed)
//!                        │  ▲
//!          pointer_move  └──┘        cancel()
//!          move_to                ─────────────▶ Idle   (nothing committed)
//! ```
//!
//! While dragging only the live target index changes; the composition itself
//! is untouched until the drop commits one reorder.

use crate::mutations::Mutation;
use crate::Composition;
use pagesmith_model::WidgetId;
use tracing::warn;

/// Vertical extent of one list entry, in committed order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotRect {
    pub top: f64,
    pub height: f64,
}

impl SlotRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Uniform slots, as laid out by a simple vertical list
    pub fn stacked(count: usize, height: f64) -> Vec<SlotRect> {
        (0..count)
            .map(|i| SlotRect::new(i as f64 * height, height))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        id: WidgetId,
        /// Index in the composition when the drag began
        origin: usize,
        /// Live drop position
        target: usize,
    },
}

/// Reorder to perform when a drag is dropped
#[derive(Debug, Clone, PartialEq)]
pub struct DragCommit {
    pub id: WidgetId,
    pub from: usize,
    pub to: usize,
}

impl DragCommit {
    pub fn to_mutation(&self) -> Mutation {
        Mutation::Reorder {
            id: self.id.clone(),
            index: self.to,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn dragged(&self) -> Option<&WidgetId> {
        match &self.state {
            DragState::Dragging { id, .. } => Some(id),
            DragState::Idle => None,
        }
    }

    pub fn target(&self) -> Option<usize> {
        match &self.state {
            DragState::Dragging { target, .. } => Some(*target),
            DragState::Idle => None,
        }
    }

    /// Whether the drag handle of `id` accepts input.
    ///
    /// During a drag every handle except the dragged one is disabled.
    pub fn handle_enabled(&self, id: &WidgetId) -> bool {
        match &self.state {
            DragState::Idle => true,
            DragState::Dragging { id: dragged, .. } => dragged == id,
        }
    }

    /// Pointer-down on a drag handle. Refused while another drag is active or
    /// when `id` is not in the composition.
    pub fn begin(&mut self, id: &WidgetId, comp: &Composition) -> bool {
        if self.is_dragging() {
            warn!(widget_id = %id, "Drag already in progress, ignoring");
            return false;
        }
        let Some(origin) = comp.index_of(id) else {
            warn!(widget_id = %id, "Cannot drag missing widget");
            return false;
        };

        self.state = DragState::Dragging {
            id: id.clone(),
            origin,
            target: origin,
        };
        true
    }

    /// Recompute the target from the pointer position.
    ///
    /// `slots` describe the entries in committed order. The target is the
    /// number of other entries whose midpoint lies above the pointer.
    pub fn pointer_move(&mut self, pointer_y: f64, slots: &[SlotRect]) -> Option<usize> {
        let DragState::Dragging { origin, target, .. } = &mut self.state else {
            return None;
        };
        let origin = *origin;

        let above = slots
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != origin)
            .filter(|(_, slot)| slot.midpoint() < pointer_y)
            .count();

        *target = above.min(slots.len().saturating_sub(1));
        Some(*target)
    }

    /// Set the target directly (keyboard reordering)
    pub fn move_to(&mut self, index: usize, len: usize) -> Option<usize> {
        let DragState::Dragging { target, .. } = &mut self.state else {
            return None;
        };
        *target = index.min(len.saturating_sub(1));
        Some(*target)
    }

    /// Order to display while dragging: committed order with the dragged
    /// widget shown at the live target
    pub fn visual_order(&self, comp: &Composition) -> Vec<WidgetId> {
        let mut ids = comp.ids();
        if let DragState::Dragging { id, target, .. } = &self.state {
            if let Some(current) = ids.iter().position(|x| x == id) {
                let dragged = ids.remove(current);
                let at = (*target).min(ids.len());
                ids.insert(at, dragged);
            }
        }
        ids
    }

    /// Pointer-up: end the gesture and return the single reorder to commit
    pub fn drop(&mut self) -> Option<DragCommit> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging { id, origin, target } => Some(DragCommit {
                id,
                from: origin,
                to: target,
            }),
            DragState::Idle => None,
        }
    }

    /// Abandon the gesture. Returns whether a drag was active.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}
