use super::{heading, paragraph};
use crate::field::{item_str, Control, FieldSpec, Fields};
use pagesmith_render::VNode;
use serde_json::{json, Value};

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        label: "Title",
        control: Control::Text,
        default: || Value::from("Our Features"),
    },
    FieldSpec {
        name: "items",
        label: "Features",
        control: Control::List,
        default: default_items,
    },
];

fn default_items() -> Value {
    json!([
        { "title": "Fast", "description": "Lightning-fast performance out of the box." },
        { "title": "Secure", "description": "Security built in at every layer." },
        { "title": "Scalable", "description": "Grows with your business." }
    ])
}

pub(crate) fn display(fields: &Fields) -> Vec<VNode> {
    let cards = fields
        .list("items")
        .iter()
        .filter(|item| item.is_object())
        .map(|item| {
            VNode::element("div")
                .with_attr("class", "feature-card")
                .with_child(heading(3, item_str(item, "title")))
                .with_child(paragraph(item_str(item, "description")))
        })
        .collect::<Vec<_>>();

    vec![
        heading(2, fields.str("title")),
        VNode::element("div")
            .with_attr("class", "feature-grid")
            .with_children(cards),
    ]
}
