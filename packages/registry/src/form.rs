use crate::field::{Control, FieldSpec, Fields, STYLE_FIELDS};
use pagesmith_model::WidgetData;
use pagesmith_render::VNode;
use serde_json::Value;

/// One editable field of an edit form
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEditor {
    pub name: &'static str,
    pub label: &'static str,
    pub control: Control,
    /// Current value with defaults applied
    pub value: Value,
    /// Whether the value comes from the variant default
    pub is_default: bool,
}

/// Edit-mode rendering of a widget
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub widget_type: String,
    pub fields: Vec<FieldEditor>,
    pub view: VNode,
}

impl EditForm {
    /// Build the form for a variant's field table
    pub(crate) fn build(widget_type: &str, title: &str, data: &WidgetData, specs: &'static [FieldSpec]) -> Self {
        let resolved = Fields::new(data, specs);
        let fields: Vec<FieldEditor> = specs
            .iter()
            .chain(STYLE_FIELDS.iter())
            .map(|spec| FieldEditor {
                name: spec.name,
                label: spec.label,
                control: spec.control,
                value: resolved.get(spec.name).into_owned(),
                is_default: resolved.is_default(spec.name),
            })
            .collect();

        let view = VNode::element("form")
            .with_attr("class", "widget-editor")
            .with_attr("data-widget-type", widget_type)
            .with_child(VNode::element("h3").with_child(VNode::text(title)))
            .with_children(fields.iter().map(render_field));

        Self {
            widget_type: widget_type.to_string(),
            fields,
            view,
        }
    }

    /// Form for a type with no registered editor
    pub(crate) fn unavailable(widget_type: &str) -> Self {
        let view = VNode::element("div")
            .with_attr("class", "widget-editor widget-editor-unknown")
            .with_attr("data-widget-type", widget_type)
            .with_child(VNode::placeholder(format!("Unknown widget type: {}", widget_type)));

        Self {
            widget_type: widget_type.to_string(),
            fields: Vec::new(),
            view,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldEditor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_editable(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Route one field edit to `on_update` as a single-field patch.
    ///
    /// `null` resets the field to its default. Returns `false` (and does not
    /// call `on_update`) when the form has no such field or the value does not
    /// fit the field's control.
    pub fn input(&self, field: &str, value: Value, on_update: impl FnOnce(WidgetData)) -> bool {
        let Some(editor) = self.field(field) else {
            return false;
        };
        if !value.is_null() && !editor.control.accepts(&value) {
            return false;
        }

        let mut patch = WidgetData::new();
        patch.insert(editor.name.to_string(), value);
        on_update(patch);
        true
    }
}

fn render_field(field: &FieldEditor) -> VNode {
    let input = match field.control {
        Control::Text | Control::Url | Control::Color => {
            let kind = match field.control {
                Control::Url => "url",
                Control::Color => "color",
                _ => "text",
            };
            VNode::element("input")
                .with_attr("type", kind)
                .with_attr("name", field.name)
                .with_attr("value", field.value.as_str().unwrap_or_default())
        }
        Control::TextArea => VNode::element("textarea")
            .with_attr("name", field.name)
            .with_child(VNode::text(field.value.as_str().unwrap_or_default())),
        Control::Select(options) => {
            let current = field.value.as_str().unwrap_or_default();
            VNode::element("select")
                .with_attr("name", field.name)
                .with_children(options.iter().map(|option| {
                    let node = VNode::element("option")
                        .with_attr("value", *option)
                        .with_child(VNode::text(*option));
                    if *option == current {
                        node.with_attr("selected", "selected")
                    } else {
                        node
                    }
                }))
        }
        Control::Toggle => {
            let node = VNode::element("input")
                .with_attr("type", "checkbox")
                .with_attr("name", field.name);
            if field.value.as_bool().unwrap_or(false) {
                node.with_attr("checked", "checked")
            } else {
                node
            }
        }
        Control::List => VNode::element("textarea")
            .with_attr("name", field.name)
            .with_attr("data-format", "json")
            .with_child(VNode::text(
                serde_json::to_string_pretty(&field.value).unwrap_or_default(),
            )),
    };

    VNode::element("label")
        .with_attr("class", "widget-editor-field")
        .with_attr("data-field", field.name)
        .with_child(VNode::element("span").with_child(VNode::text(field.label)))
        .with_child(input)
}
