use super::{css_value, heading, link, paragraph};
use crate::field::{Control, FieldSpec, Fields};
use pagesmith_render::VNode;
use serde_json::Value;

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        label: "Title",
        control: Control::Text,
        default: || Value::from("Welcome to Our Website"),
    },
    FieldSpec {
        name: "subtitle",
        label: "Subtitle",
        control: Control::TextArea,
        default: || Value::from("Build something amazing with our platform"),
    },
    FieldSpec {
        name: "buttonText",
        label: "Button text",
        control: Control::Text,
        default: || Value::from("Get Started"),
    },
    FieldSpec {
        name: "buttonLink",
        label: "Button link",
        control: Control::Url,
        default: || Value::from("#"),
    },
    FieldSpec {
        name: "backgroundImage",
        label: "Background image",
        control: Control::Url,
        default: || Value::from(""),
    },
];

pub(crate) fn display(fields: &Fields) -> Vec<VNode> {
    let mut inner = VNode::element("div")
        .with_attr("class", "hero-content")
        .with_child(heading(1, fields.str("title")))
        .with_child(paragraph(fields.str("subtitle")));

    let button_text = fields.str("buttonText");
    if !button_text.is_empty() {
        inner = inner.with_child(link(fields.str("buttonLink"), "hero-button", button_text));
    }

    match css_value(&fields.str("backgroundImage")) {
        Some(background) => vec![VNode::element("div")
            .with_attr("class", "hero-background")
            .with_style("background-image", format!("url('{}')", background))
            .with_child(inner)],
        None => vec![inner],
    }
}
