//! # Pagesmith Model
//!
//! Plain data types shared by every layer of the page builder: the closed set
//! of widget types, placed widget instances and their field bags, and the id
//! generator that keeps instance ids unique within a composition.
//!
//! Records cross the engine boundary in this shape:
//!
//! ```json
//! [{ "id": "w1", "type": "hero", "data": { "title": "Hi" } }]
//! ```

pub mod data;
pub mod error;
pub mod id_generator;
pub mod widget;

pub use data::{merge_patch, patch_changes, strip_nulls, WidgetData};
pub use error::ModelError;
pub use id_generator::IdGenerator;
pub use widget::{WidgetId, WidgetInstance, WidgetKind, WidgetType};
