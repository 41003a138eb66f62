use super::{heading, paragraph};
use crate::field::{item_str, Control, FieldSpec, Fields};
use pagesmith_render::VNode;
use serde_json::{json, Value};

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        label: "Title",
        control: Control::Text,
        default: || Value::from("What Our Customers Say"),
    },
    FieldSpec {
        name: "items",
        label: "Testimonials",
        control: Control::List,
        default: default_items,
    },
];

fn default_items() -> Value {
    json!([
        { "quote": "This product changed the way we work.", "author": "Jane Doe", "role": "CEO, Acme" },
        { "quote": "Simple, fast and reliable.", "author": "John Smith", "role": "Designer" }
    ])
}

pub(crate) fn display(fields: &Fields) -> Vec<VNode> {
    let quotes = fields
        .list("items")
        .iter()
        .filter(|item| item.is_object())
        .map(|item| {
            let mut cite = VNode::element("figcaption")
                .with_child(VNode::element("strong").with_child(VNode::text(item_str(item, "author"))));
            let role = item_str(item, "role");
            if !role.is_empty() {
                cite = cite.with_child(VNode::element("span").with_child(VNode::text(role)));
            }

            VNode::element("figure")
                .with_attr("class", "testimonial")
                .with_child(VNode::element("blockquote").with_child(paragraph(item_str(item, "quote"))))
                .with_child(cite)
        })
        .collect::<Vec<_>>();

    vec![
        heading(2, fields.str("title")),
        VNode::element("div")
            .with_attr("class", "testimonial-list")
            .with_children(quotes),
    ]
}
