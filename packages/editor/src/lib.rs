//! # Pagesmith Editor
//!
//! Composition editing engine for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: WidgetInstance records in / out      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Composition (ordered, unique ids)        │
//! │  - Mutations with undo/redo                 │
//! │  - Exclusive selection + inline editor      │
//! │  - Drag reorder state machine               │
//! │  - Post-effects (re-render, emit)           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ registry / preview: records → VNode         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Records are the source of truth**: rendered views are derived
//! 2. **Nothing throws**: stale ids are no-ops, indices are clamped
//! 3. **One commit per gesture**: drags touch the composition only on drop
//! 4. **Defaults at read time**: field bags only hold what the user set
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagesmith_editor::{Composition, EditSession, Effect, Viewport};
//! use pagesmith_model::WidgetType;
//!
//! let mut session = EditSession::new("local", Composition::new());
//! session.subscribe(|effect: &Effect| println!("{:?}", effect));
//!
//! let hero = session.add_widget(WidgetType::Hero);
//! session.select_widget(Some(&hero));
//! session.edit_field("title", "Hi".into());
//!
//! let preview = session.preview(Viewport::Tablet);
//! ```

mod composition;
mod drag;
mod errors;
mod inline_editor;
mod mutations;
mod post_effects;
mod selection;
mod session;
mod undo_stack;

pub use composition::Composition;
pub use drag::{DragCommit, DragController, DragState, SlotRect};
pub use errors::EditorError;
pub use inline_editor::{EntryView, InlineEditor, SurfaceEntry};
pub use mutations::{Applied, Mutation};
pub use post_effects::{
    Effect, EffectContext, EffectSink, EmitSnapshot, PostEffect, PostEffectEngine,
    RerenderComposition, RerenderSelectedEditor,
};
pub use selection::Selection;
pub use session::{EditSession, SessionOptions};
pub use undo_stack::{MutationBatch, UndoStack};

// Re-export common types for convenience
pub use pagesmith_model::{WidgetData, WidgetId, WidgetInstance, WidgetType};
pub use pagesmith_preview::{Preview, Viewport};
