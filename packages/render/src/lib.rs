//! # Pagesmith Render
//!
//! Renderer-neutral output tree produced by widget display/edit renderers, and
//! a deterministic HTML emitter for it.

mod html;
mod vdom;

pub use html::{escape_html, to_html, to_html_fragment, HtmlOptions};
pub use vdom::VNode;
