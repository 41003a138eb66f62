//! Built-in widget variants.
//!
//! Each module declares its field table once and a display renderer reading
//! through [`Fields`]. Edit forms are derived from the field tables.

mod button;
mod contact;
mod features;
mod hero;
mod image;
mod pricing;
mod testimonials;
mod text;

use crate::field::{FieldSpec, Fields};
use pagesmith_model::WidgetType;
use pagesmith_render::VNode;

pub(crate) fn fields(widget_type: WidgetType) -> &'static [FieldSpec] {
    match widget_type {
        WidgetType::Hero => hero::FIELDS,
        WidgetType::Text => text::FIELDS,
        WidgetType::Image => image::FIELDS,
        WidgetType::Button => button::FIELDS,
        WidgetType::Features => features::FIELDS,
        WidgetType::Testimonials => testimonials::FIELDS,
        WidgetType::Contact => contact::FIELDS,
        WidgetType::Pricing => pricing::FIELDS,
    }
}

pub(crate) fn display(widget_type: WidgetType, fields: &Fields) -> VNode {
    let body = match widget_type {
        WidgetType::Hero => hero::display(fields),
        WidgetType::Text => text::display(fields),
        WidgetType::Image => image::display(fields),
        WidgetType::Button => button::display(fields),
        WidgetType::Features => features::display(fields),
        WidgetType::Testimonials => testimonials::display(fields),
        WidgetType::Contact => contact::display(fields),
        WidgetType::Pricing => pricing::display(fields),
    };

    block(widget_type, fields).with_children(body)
}

/// Section root shared by every block, carrying the common style fields
fn block(widget_type: WidgetType, fields: &Fields) -> VNode {
    let mut root = VNode::element("section")
        .with_attr("class", format!("widget widget-{}", widget_type.tag()))
        .with_attr("data-widget-type", widget_type.tag());

    for (field, property) in [
        ("backgroundColor", "background-color"),
        ("textColor", "color"),
        ("padding", "padding"),
    ] {
        if let Some(value) = css_value(&fields.str(field)) {
            root = root.with_style(property, value);
        }
    }

    root
}

/// A user value usable as one inline declaration value, or `None` when it is
/// empty or could close the value, the declaration or the attribute.
pub(super) fn css_value(value: &str) -> Option<&str> {
    let breaks_out = |c: char| matches!(c, ';' | '\'' | '"' | '(' | ')' | '\\' | '{' | '}' | '<' | '>');
    if value.trim().is_empty() || value.contains(breaks_out) {
        None
    } else {
        Some(value)
    }
}

fn heading(level: u8, content: impl Into<String>) -> VNode {
    VNode::element(format!("h{}", level)).with_child(VNode::text(content))
}

fn paragraph(content: impl Into<String>) -> VNode {
    VNode::element("p").with_child(VNode::text(content))
}

fn link(href: impl Into<String>, class: &str, label: impl Into<String>) -> VNode {
    VNode::element("a")
        .with_attr("href", href)
        .with_attr("class", class)
        .with_child(VNode::text(label))
}
