//! # Pagesmith Registry
//!
//! Maps a widget type tag to its behavior: a display renderer, an edit-form
//! renderer and a table of field defaults.
//!
//! ```text
//! "hero" ──lookup──▶ Variant::Known(Hero) ──display(data)──▶ VNode
//!                                         └─edit(data)─────▶ EditForm
//! "???"  ──lookup──▶ Variant::Unknown     ──display/edit───▶ placeholder
//! ```
//!
//! Defaults are applied when a field is read, never written into the stored
//! field bag. A field that is missing, `null`, or of the wrong JSON kind reads
//! as its default.

mod field;
mod form;
mod registry;
mod variants;

pub use field::{Control, FieldSpec, Fields};
pub use form::{EditForm, FieldEditor};
pub use registry::{Registry, Variant};
