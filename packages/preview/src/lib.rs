//! # Pagesmith Preview
//!
//! Read-only rendering of a composition inside a simulated device viewport.
//!
//! The renderer is a pure function of the widgets it is handed: it never
//! invokes edit renderers, never mutates, and the returned [`Preview`] owns its
//! output, so later edits to the composition cannot leak into it.

mod preview;
mod viewport;

pub use preview::{render_preview, render_preview_document, Preview};
pub use viewport::{Viewport, ViewportParseError};
