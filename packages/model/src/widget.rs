//! Widget identity and type tags.

use crate::data::WidgetData;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of widget types offered by the add-widget menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetType {
    Hero,
    Text,
    Image,
    Button,
    Features,
    Testimonials,
    Contact,
    Pricing,
}

impl WidgetType {
    /// Every type, in add-widget menu order
    pub const ALL: [WidgetType; 8] = [
        WidgetType::Hero,
        WidgetType::Text,
        WidgetType::Image,
        WidgetType::Button,
        WidgetType::Features,
        WidgetType::Testimonials,
        WidgetType::Contact,
        WidgetType::Pricing,
    ];

    /// Tag used in stored records
    pub fn tag(&self) -> &'static str {
        match self {
            WidgetType::Hero => "hero",
            WidgetType::Text => "text",
            WidgetType::Image => "image",
            WidgetType::Button => "button",
            WidgetType::Features => "features",
            WidgetType::Testimonials => "testimonials",
            WidgetType::Contact => "contact",
            WidgetType::Pricing => "pricing",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            WidgetType::Hero => "Hero Section",
            WidgetType::Text => "Text Block",
            WidgetType::Image => "Image",
            WidgetType::Button => "Button",
            WidgetType::Features => "Features",
            WidgetType::Testimonials => "Testimonials",
            WidgetType::Contact => "Contact",
            WidgetType::Pricing => "Pricing",
        }
    }

    /// Look up a type by its stored tag. Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<WidgetType> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Classification of a stored type tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    Known(WidgetType),
    /// Tag not in the deployed variant set (e.g. data from a newer release)
    Unknown(String),
}

impl WidgetKind {
    pub fn classify(tag: &str) -> Self {
        match WidgetType::parse(tag) {
            Some(t) => WidgetKind::Known(t),
            None => WidgetKind::Unknown(tag.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, WidgetKind::Known(_))
    }
}

/// Opaque widget identifier, stable across reorders and edits
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WidgetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One placed widget
///
/// The type tag is kept as the raw stored string so that records with a type
/// this build does not know about survive a load/edit/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetInstance {
    pub id: WidgetId,

    #[serde(rename = "type")]
    pub widget_type: String,

    #[serde(default)]
    pub data: WidgetData,
}

impl WidgetInstance {
    /// New instance with an empty field bag (all fields at their defaults)
    pub fn new(id: WidgetId, widget_type: WidgetType) -> Self {
        Self {
            id,
            widget_type: widget_type.tag().to_string(),
            data: WidgetData::new(),
        }
    }

    /// Instance with an arbitrary stored tag
    pub fn with_tag(id: WidgetId, tag: impl Into<String>) -> Self {
        Self {
            id,
            widget_type: tag.into(),
            data: WidgetData::new(),
        }
    }

    pub fn with_data(mut self, data: WidgetData) -> Self {
        self.data = data;
        self
    }

    pub fn kind(&self) -> WidgetKind {
        WidgetKind::classify(&self.widget_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_every_tag() {
        for t in WidgetType::ALL {
            assert_eq!(WidgetType::parse(t.tag()), Some(t));
        }
        assert_eq!(WidgetType::parse("nonexistent"), None);
        assert_eq!(WidgetType::parse("Hero"), None);
    }

    #[test]
    fn test_serde_tag_matches_tag() {
        for t in WidgetType::ALL {
            let json = serde_json::to_value(t).unwrap();
            assert_eq!(json, json!(t.tag()));
        }
    }

    #[test]
    fn test_record_shape() {
        let record = json!({ "id": "w7", "type": "carousel", "data": { "speed": 3 } });
        let instance: WidgetInstance = serde_json::from_value(record.clone()).unwrap();

        assert_eq!(instance.id.as_str(), "w7");
        assert_eq!(instance.kind(), WidgetKind::Unknown("carousel".to_string()));
        assert_eq!(serde_json::to_value(&instance).unwrap(), record);
    }

    #[test]
    fn test_missing_data_defaults_to_empty_bag() {
        let instance: WidgetInstance =
            serde_json::from_value(json!({ "id": "w1", "type": "hero" })).unwrap();

        assert!(instance.data.is_empty());
        assert_eq!(instance.kind(), WidgetKind::Known(WidgetType::Hero));
    }
}
