use crate::field::{FieldSpec, Fields, STYLE_FIELDS};
use crate::form::EditForm;
use crate::variants;
use pagesmith_model::{WidgetData, WidgetInstance, WidgetKind, WidgetType};
use pagesmith_render::VNode;
use tracing::warn;

/// Behavior resolved for one type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant<'a> {
    Known(WidgetType),
    /// Tag with no registered behavior; renders a placeholder and has no fields
    Unknown(&'a str),
}

impl<'a> Variant<'a> {
    pub fn tag(&self) -> &'a str {
        match self {
            Variant::Known(t) => t.tag(),
            Variant::Unknown(tag) => *tag,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Variant::Known(_))
    }

    /// Variant-specific field table (style fields excluded)
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Variant::Known(t) => variants::fields(*t),
            Variant::Unknown(_) => &[],
        }
    }

    /// Read-only display renderer
    pub fn display(&self, data: &WidgetData) -> VNode {
        match self {
            Variant::Known(t) => variants::display(*t, &Fields::new(data, self.fields())),
            Variant::Unknown(tag) => VNode::element("section")
                .with_attr("class", "widget widget-unknown")
                .with_attr("data-widget-type", *tag)
                .with_child(VNode::placeholder(format!("Unknown widget type: {}", tag))),
        }
    }

    /// Edit-mode renderer
    pub fn edit(&self, data: &WidgetData) -> EditForm {
        match self {
            Variant::Known(t) => EditForm::build(t.tag(), t.label(), data, self.fields()),
            Variant::Unknown(tag) => EditForm::unavailable(tag),
        }
    }

    /// Materialized defaults, for inspection only; never stored
    pub fn defaults(&self) -> WidgetData {
        match self {
            Variant::Known(_) => self
                .fields()
                .iter()
                .chain(STYLE_FIELDS.iter())
                .map(|spec| (spec.name.to_string(), spec.default_value()))
                .collect(),
            Variant::Unknown(_) => WidgetData::new(),
        }
    }
}

/// Fixed mapping from widget type tag to variant behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry;

impl Registry {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a type tag. Unknown tags never fail; they map to [`Variant::Unknown`].
    pub fn lookup<'a>(&self, tag: &'a str) -> Variant<'a> {
        match WidgetKind::classify(tag) {
            WidgetKind::Known(t) => Variant::Known(t),
            WidgetKind::Unknown(_) => {
                warn!(widget_type = %tag, "No variant registered, using fallback");
                Variant::Unknown(tag)
            }
        }
    }

    /// Types offered by the add-widget menu
    pub fn menu(&self) -> &'static [WidgetType] {
        &WidgetType::ALL
    }

    /// Display an instance, tagging the root with its id
    pub fn render_instance(&self, instance: &WidgetInstance) -> VNode {
        self.lookup(&instance.widget_type)
            .display(&instance.data)
            .with_attr("data-widget-id", instance.id.as_str())
            .with_key(instance.id.as_str())
    }

    /// Edit form for an instance
    pub fn edit_instance(&self, instance: &WidgetInstance) -> EditForm {
        self.lookup(&instance.widget_type).edit(&instance.data)
    }
}
