use super::{heading, link};
use crate::field::{item_str, Control, FieldSpec, Fields};
use pagesmith_render::VNode;
use serde_json::{json, Value};

pub(crate) const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        label: "Title",
        control: Control::Text,
        default: || Value::from("Pricing Plans"),
    },
    FieldSpec {
        name: "plans",
        label: "Plans",
        control: Control::List,
        default: default_plans,
    },
];

fn default_plans() -> Value {
    json!([
        {
            "name": "Basic",
            "price": "$9",
            "period": "/month",
            "features": ["1 website", "Basic analytics", "Email support"],
            "highlighted": false
        },
        {
            "name": "Pro",
            "price": "$29",
            "period": "/month",
            "features": ["10 websites", "Advanced analytics", "Priority support"],
            "highlighted": true
        },
        {
            "name": "Enterprise",
            "price": "$99",
            "period": "/month",
            "features": ["Unlimited websites", "Custom analytics", "24/7 support"],
            "highlighted": false
        }
    ])
}

pub(crate) fn display(fields: &Fields) -> Vec<VNode> {
    let cards = fields
        .list("plans")
        .iter()
        .filter(|plan| plan.is_object())
        .map(plan_card)
        .collect::<Vec<_>>();

    vec![
        heading(2, fields.str("title")),
        VNode::element("div")
            .with_attr("class", "pricing-grid")
            .with_children(cards),
    ]
}

fn plan_card(plan: &Value) -> VNode {
    let highlighted = plan.get("highlighted").and_then(Value::as_bool).unwrap_or(false);
    let class = if highlighted {
        "pricing-card pricing-card-highlighted"
    } else {
        "pricing-card"
    };

    let features = plan
        .get("features")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(|f| VNode::element("li").with_child(VNode::text(f)))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    VNode::element("div")
        .with_attr("class", class)
        .with_child(heading(3, item_str(plan, "name")))
        .with_child(
            VNode::element("p")
                .with_attr("class", "price")
                .with_child(VNode::element("strong").with_child(VNode::text(item_str(plan, "price"))))
                .with_child(VNode::element("span").with_child(VNode::text(item_str(plan, "period")))),
        )
        .with_child(VNode::element("ul").with_children(features))
        .with_child(link("#", "button button-primary", "Choose Plan"))
}
