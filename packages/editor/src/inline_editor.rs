//! # Inline Editor Surface
//!
//! Renders the composition as the editing canvas sees it: every widget through
//! its display renderer except the selected one, which renders its edit form.
//! Whether a widget is in edit mode is decided solely by `selected == id`.

use crate::drag::DragController;
use crate::selection::Selection;
use crate::Composition;
use pagesmith_model::WidgetId;
use pagesmith_registry::{EditForm, Registry};
use pagesmith_render::VNode;

/// How one entry of the canvas renders
#[derive(Debug, Clone, PartialEq)]
pub enum EntryView {
    Display(VNode),
    Editing(EditForm),
}

/// One widget on the editing canvas
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceEntry {
    pub id: WidgetId,
    pub widget_type: String,
    /// Position in the visual order (reflects a drag in progress)
    pub index: usize,
    pub handle_enabled: bool,
    pub view: EntryView,
}

impl SurfaceEntry {
    pub fn is_editing(&self) -> bool {
        matches!(self.view, EntryView::Editing(_))
    }

    pub fn form(&self) -> Option<&EditForm> {
        match &self.view {
            EntryView::Editing(form) => Some(form),
            EntryView::Display(_) => None,
        }
    }

    /// Canvas node: the rendered block or form inside an entry wrapper
    pub fn to_vnode(&self) -> VNode {
        let (class, body) = match &self.view {
            EntryView::Display(node) => ("canvas-entry", node.clone()),
            EntryView::Editing(form) => ("canvas-entry canvas-entry-selected", form.view.clone()),
        };

        let mut handle = VNode::element("button")
            .with_attr("class", "drag-handle")
            .with_attr("type", "button")
            .with_attr("aria-label", "Drag to reorder");
        if !self.handle_enabled {
            handle = handle.with_attr("disabled", "disabled");
        }

        VNode::element("div")
            .with_attr("class", class)
            .with_key(self.id.as_str())
            .with_child(handle)
            .with_child(body)
    }
}

/// Builds the editing canvas
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineEditor {
    registry: Registry,
}

impl InlineEditor {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Entries in visual order
    pub fn render_surface(
        &self,
        comp: &Composition,
        selection: &Selection,
        drag: &DragController,
    ) -> Vec<SurfaceEntry> {
        drag.visual_order(comp)
            .into_iter()
            .enumerate()
            .filter_map(|(index, id)| {
                let widget = comp.get(&id)?;
                let view = if selection.is_selected(&id) {
                    EntryView::Editing(self.registry.edit_instance(widget))
                } else {
                    EntryView::Display(self.registry.render_instance(widget))
                };
                Some(SurfaceEntry {
                    handle_enabled: drag.handle_enabled(&id),
                    widget_type: widget.widget_type.clone(),
                    id,
                    index,
                    view,
                })
            })
            .collect()
    }

    /// Edit form of the selected widget, if any
    pub fn selected_form(&self, comp: &Composition, selection: &Selection) -> Option<(WidgetId, EditForm)> {
        let id = selection.selected()?;
        let widget = comp.get(id)?;
        Some((id.clone(), self.registry.edit_instance(widget)))
    }
}
