use super::heading;
use crate::field::{Control, FieldSpec, Fields};
use pagesmith_render::VNode;
use serde_json::Value;

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        label: "Title",
        control: Control::Text,
        default: || Value::from("Contact Us"),
    },
    FieldSpec {
        name: "email",
        label: "Email",
        control: Control::Text,
        default: || Value::from("hello@example.com"),
    },
    FieldSpec {
        name: "phone",
        label: "Phone",
        control: Control::Text,
        default: || Value::from("+1 (555) 123-4567"),
    },
    FieldSpec {
        name: "address",
        label: "Address",
        control: Control::TextArea,
        default: || Value::from("123 Main Street, City, Country"),
    },
    FieldSpec {
        name: "showForm",
        label: "Show contact form",
        control: Control::Toggle,
        default: || Value::Bool(true),
    },
];

pub(crate) fn display(fields: &Fields) -> Vec<VNode> {
    let email = fields.str("email");
    let details = VNode::element("ul")
        .with_attr("class", "contact-details")
        .with_child(
            VNode::element("li").with_child(
                VNode::element("a")
                    .with_attr("href", format!("mailto:{}", email))
                    .with_child(VNode::text(email)),
            ),
        )
        .with_child(VNode::element("li").with_child(VNode::text(fields.str("phone"))))
        .with_child(VNode::element("li").with_child(VNode::text(fields.str("address"))));

    let mut nodes = vec![heading(2, fields.str("title")), details];

    if fields.bool("showForm") {
        nodes.push(
            VNode::element("form")
                .with_attr("class", "contact-form")
                .with_child(text_input("text", "name", "Your name"))
                .with_child(text_input("email", "email", "Your email"))
                .with_child(
                    VNode::element("textarea")
                        .with_attr("name", "message")
                        .with_attr("placeholder", "Your message"),
                )
                .with_child(
                    VNode::element("button")
                        .with_attr("type", "submit")
                        .with_child(VNode::text("Send Message")),
                ),
        );
    }

    nodes
}

fn text_input(kind: &str, name: &str, placeholder: &str) -> VNode {
    VNode::element("input")
        .with_attr("type", kind)
        .with_attr("name", name)
        .with_attr("placeholder", placeholder)
}
