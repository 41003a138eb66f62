use super::link;
use crate::field::{Control, FieldSpec, Fields};
use pagesmith_render::VNode;
use serde_json::Value;

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "text",
        label: "Label",
        control: Control::Text,
        default: || Value::from("Click Me"),
    },
    FieldSpec {
        name: "link",
        label: "Link",
        control: Control::Url,
        default: || Value::from("#"),
    },
    FieldSpec {
        name: "style",
        label: "Style",
        control: Control::Select(&["primary", "secondary", "outline"]),
        default: || Value::from("primary"),
    },
    FieldSpec {
        name: "alignment",
        label: "Alignment",
        control: Control::Select(&["left", "center", "right"]),
        default: || Value::from("center"),
    },
];

pub(crate) fn display(fields: &Fields) -> Vec<VNode> {
    let class = format!("button button-{}", fields.str("style"));

    vec![VNode::element("div")
        .with_attr("class", "button-row")
        .with_style("text-align", fields.str("alignment"))
        .with_child(link(fields.str("link"), &class, fields.str("text")))]
}
