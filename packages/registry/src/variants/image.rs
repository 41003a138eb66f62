use crate::field::{Control, FieldSpec, Fields};
use pagesmith_render::VNode;
use serde_json::Value;

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "src",
        label: "Image URL",
        control: Control::Url,
        default: || Value::from("https://placehold.co/800x400"),
    },
    FieldSpec {
        name: "alt",
        label: "Alt text",
        control: Control::Text,
        default: || Value::from("Placeholder image"),
    },
    FieldSpec {
        name: "caption",
        label: "Caption",
        control: Control::Text,
        default: || Value::from(""),
    },
];

pub(crate) fn display(fields: &Fields) -> Vec<VNode> {
    let mut figure = VNode::element("figure").with_child(
        VNode::element("img")
            .with_attr("src", fields.str("src"))
            .with_attr("alt", fields.str("alt"))
            .with_style("max-width", "100%"),
    );

    let caption = fields.str("caption");
    if !caption.is_empty() {
        figure = figure.with_child(VNode::element("figcaption").with_child(VNode::text(caption)));
    }

    vec![figure]
}
