use pagesmith_model::WidgetData;
use serde_json::Value;
use std::borrow::Cow;

/// Editor control used for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Text,
    TextArea,
    Url,
    Color,
    Select(&'static [&'static str]),
    Toggle,
    /// Array of items, edited as JSON
    List,
}

impl Control {
    /// Whether `value` has the JSON kind this control produces
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Control::Text | Control::TextArea | Control::Url | Control::Color => value.is_string(),
            Control::Select(options) => value
                .as_str()
                .map(|s| options.contains(&s))
                .unwrap_or(false),
            Control::Toggle => value.is_boolean(),
            Control::List => value.is_array(),
        }
    }
}

/// Declaration of one variant field: name, editor and default
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub control: Control,
    pub default: fn() -> Value,
}

impl FieldSpec {
    pub fn default_value(&self) -> Value {
        (self.default)()
    }
}

/// Style fields every known variant accepts, applied to the block root
pub(crate) const STYLE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "backgroundColor",
        label: "Background color",
        control: Control::Color,
        default: || Value::from(""),
    },
    FieldSpec {
        name: "textColor",
        label: "Text color",
        control: Control::Color,
        default: || Value::from(""),
    },
    FieldSpec {
        name: "padding",
        label: "Padding",
        control: Control::Text,
        default: || Value::from(""),
    },
];

/// Read-through view of a field bag with variant defaults applied
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    data: &'a WidgetData,
    specs: &'static [FieldSpec],
}

impl<'a> Fields<'a> {
    pub fn new(data: &'a WidgetData, specs: &'static [FieldSpec]) -> Self {
        Self { data, specs }
    }

    pub fn spec(&self, name: &str) -> Option<&'static FieldSpec> {
        self.specs
            .iter()
            .chain(STYLE_FIELDS.iter())
            .find(|spec| spec.name == name)
    }

    /// Stored value if usable, otherwise the declared default
    pub fn get(&self, name: &str) -> Cow<'a, Value> {
        let stored = self.data.get(name);
        match self.spec(name) {
            Some(spec) => match stored {
                Some(value) if spec.control.accepts(value) => Cow::Borrowed(value),
                _ => Cow::Owned(spec.default_value()),
            },
            None => stored.map(Cow::Borrowed).unwrap_or(Cow::Owned(Value::Null)),
        }
    }

    /// True when the field reads as its default
    pub fn is_default(&self, name: &str) -> bool {
        match (self.spec(name), self.data.get(name)) {
            (Some(spec), Some(value)) => !spec.control.accepts(value),
            _ => true,
        }
    }

    pub fn str(&self, name: &str) -> String {
        self.get(name).as_str().unwrap_or_default().to_string()
    }

    pub fn bool(&self, name: &str) -> bool {
        self.get(name).as_bool().unwrap_or(false)
    }

    pub fn list(&self, name: &str) -> Vec<Value> {
        match self.get(name).into_owned() {
            Value::Array(items) => items,
            _ => Vec::new(),
        }
    }
}

/// String member of a list item, empty when missing
pub(crate) fn item_str(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SPECS: &[FieldSpec] = &[
        FieldSpec {
            name: "title",
            label: "Title",
            control: Control::Text,
            default: || Value::from("Default title"),
        },
        FieldSpec {
            name: "align",
            label: "Align",
            control: Control::Select(&["left", "right"]),
            default: || Value::from("left"),
        },
    ];

    fn bag(value: Value) -> WidgetData {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_missing_reads_as_default() {
        let data = WidgetData::new();
        let fields = Fields::new(&data, SPECS);

        assert_eq!(fields.str("title"), "Default title");
        assert!(fields.is_default("title"));
    }

    #[test]
    fn test_stored_value_wins() {
        let data = bag(json!({ "title": "Hi" }));
        let fields = Fields::new(&data, SPECS);

        assert_eq!(fields.str("title"), "Hi");
        assert!(!fields.is_default("title"));
    }

    #[test]
    fn test_wrong_kind_reads_as_default() {
        let data = bag(json!({ "title": 42, "align": "diagonal" }));
        let fields = Fields::new(&data, SPECS);

        assert_eq!(fields.str("title"), "Default title");
        assert_eq!(fields.str("align"), "left");
    }

    #[test]
    fn test_style_fields_available_everywhere() {
        let data = bag(json!({ "backgroundColor": "#000" }));
        let fields = Fields::new(&data, SPECS);

        assert_eq!(fields.str("backgroundColor"), "#000");
        assert_eq!(fields.str("textColor"), "");
    }

    #[test]
    fn test_undeclared_field_passes_through() {
        let data = bag(json!({ "legacy": 3 }));
        let fields = Fields::new(&data, SPECS);

        assert_eq!(*fields.get("legacy"), json!(3));
        assert_eq!(*fields.get("absent"), Value::Null);
    }
}
