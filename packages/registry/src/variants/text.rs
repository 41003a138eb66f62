use super::{heading, paragraph};
use crate::field::{Control, FieldSpec, Fields};
use pagesmith_render::VNode;
use serde_json::Value;

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "heading",
        label: "Heading",
        control: Control::Text,
        default: || Value::from(""),
    },
    FieldSpec {
        name: "content",
        label: "Content",
        control: Control::TextArea,
        default: || Value::from("Add your text content here. Click to edit."),
    },
    FieldSpec {
        name: "alignment",
        label: "Alignment",
        control: Control::Select(&["left", "center", "right"]),
        default: || Value::from("left"),
    },
];

pub(crate) fn display(fields: &Fields) -> Vec<VNode> {
    let mut body = VNode::element("div")
        .with_attr("class", "text-content")
        .with_style("text-align", fields.str("alignment"));

    let title = fields.str("heading");
    if !title.is_empty() {
        body = body.with_child(heading(2, title));
    }

    // Blank lines separate paragraphs
    let content = fields.str("content");
    let paragraphs = content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| paragraph(p));

    vec![body.with_children(paragraphs)]
}
