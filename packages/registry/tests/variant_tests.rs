//! Display/edit behavior of the built-in variants

use pagesmith_model::{WidgetData, WidgetType};
use pagesmith_registry::{Control, Registry};
use pagesmith_render::{to_html, HtmlOptions, VNode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn bag(value: Value) -> WidgetData {
    value.as_object().cloned().unwrap()
}

fn html(node: &VNode) -> String {
    to_html(node, &HtmlOptions::compact())
}

#[test]
fn test_hero_defaults_and_overrides() {
    let hero = Registry::new().lookup("hero");

    let default_html = html(&hero.display(&WidgetData::new()));
    assert!(default_html.contains("Welcome to Our Website"));
    assert!(default_html.contains("Get Started"));

    let edited = html(&hero.display(&bag(json!({ "title": "Hi" }))));
    assert!(edited.contains("<h1>Hi</h1>"));
    // Untouched fields still fall back
    assert!(edited.contains("Build something amazing with our platform"));
}

#[test]
fn test_text_alignment_and_paragraphs() {
    let text = Registry::new().lookup("text");
    let view = text.display(&bag(json!({
        "content": "First\n\nSecond",
        "alignment": "center"
    })));

    let body = &view.children()[0];
    assert_eq!(body.style("text-align"), Some("center"));
    assert_eq!(body.find_all(&|n| n.tag() == Some("p")).len(), 2);
}

#[test]
fn test_style_fields_apply_to_root() {
    let view = Registry::new()
        .lookup("button")
        .display(&bag(json!({ "backgroundColor": "#111111", "padding": "24px" })));

    assert_eq!(view.style("background-color"), Some("#111111"));
    assert_eq!(view.style("padding"), Some("24px"));
    assert_eq!(view.style("color"), None);
}

#[test]
fn test_list_variants_render_items() {
    let registry = Registry::new();

    let features = registry.lookup("features").display(&WidgetData::new());
    assert_eq!(features.find_all(&|n| n.attr("class") == Some("feature-card")).len(), 3);

    let custom = registry.lookup("features").display(&bag(json!({
        "items": [{ "title": "Only", "description": "One" }, "not an object"]
    })));
    assert_eq!(custom.find_all(&|n| n.attr("class") == Some("feature-card")).len(), 1);

    let pricing = registry.lookup("pricing").display(&WidgetData::new());
    let highlighted = pricing.find_all(&|n| n.attr("class") == Some("pricing-card pricing-card-highlighted"));
    assert_eq!(highlighted.len(), 1);
    assert!(highlighted[0].text_content().contains("Pro"));
}

#[test]
fn test_contact_form_toggle() {
    let contact = Registry::new().lookup("contact");

    let with_form = contact.display(&WidgetData::new());
    assert_eq!(with_form.find_all(&|n| n.tag() == Some("form")).len(), 1);

    let without = contact.display(&bag(json!({ "showForm": false })));
    assert!(without.find_all(&|n| n.tag() == Some("form")).is_empty());
}

#[test]
fn test_image_escapes_attributes() {
    let image = Registry::new().lookup("image");
    let out = html(&image.display(&bag(json!({ "alt": "a \"quoted\" <alt>" }))));

    assert!(out.contains("alt=\"a &quot;quoted&quot; &lt;alt&gt;\""));
}

#[test]
fn test_edit_form_reflects_current_values() {
    let form = Registry::new()
        .lookup("hero")
        .edit(&bag(json!({ "title": "Custom" })));

    let title = form.field("title").unwrap();
    assert_eq!(title.value, json!("Custom"));
    assert!(!title.is_default);

    let subtitle = form.field("subtitle").unwrap();
    assert_eq!(subtitle.value, json!("Build something amazing with our platform"));
    assert!(subtitle.is_default);

    assert!(form.field("backgroundColor").is_some());
}

#[test]
fn test_edit_form_input_emits_single_field_patch() {
    let form = Registry::new().lookup("hero").edit(&WidgetData::new());

    let mut received = Vec::new();
    assert!(form.input("title", json!("Hi"), |patch| received.push(patch)));
    assert_eq!(received, vec![bag(json!({ "title": "Hi" }))]);
}

#[test]
fn test_edit_form_input_rejects_bad_values() {
    let form = Registry::new().lookup("text").edit(&WidgetData::new());

    assert!(!form.input("nope", json!("x"), |_| panic!("unknown field")));
    assert!(!form.input("content", json!(5), |_| panic!("wrong kind")));
    assert!(!form.input("alignment", json!("diagonal"), |_| panic!("not an option")));

    let mut reset = None;
    assert!(form.input("content", Value::Null, |patch| reset = Some(patch)));
    assert_eq!(reset, Some(bag(json!({ "content": null }))));
}

#[test]
fn test_select_and_toggle_controls() {
    let registry = Registry::new();

    let button = registry.lookup("button").edit(&WidgetData::new());
    assert_eq!(
        button.field("style").map(|f| f.control),
        Some(Control::Select(&["primary", "secondary", "outline"]))
    );
    let out = html(&button.view);
    assert!(out.contains("<option selected=\"selected\" value=\"primary\">primary</option>"));

    let contact = registry.lookup("contact").edit(&WidgetData::new());
    assert_eq!(contact.field("showForm").map(|f| f.control), Some(Control::Toggle));
}

#[test]
fn test_defaults_are_never_written_back() {
    let registry = Registry::new();
    let data = WidgetData::new();

    for t in WidgetType::ALL {
        let variant = registry.lookup(t.tag());
        let _ = variant.display(&data);
        let _ = variant.edit(&data);
    }

    assert!(data.is_empty());
}

#[test]
fn test_style_values_cannot_inject_declarations() {
    let view = Registry::new().lookup("hero").display(&bag(json!({
        "backgroundColor": "red; position: fixed",
        "padding": "24px",
        "textColor": "\"><script>",
        "backgroundImage": "x.png'); background: url('evil.png",
    })));

    assert_eq!(view.style("background-color"), None);
    assert_eq!(view.style("color"), None);
    assert_eq!(view.style("padding"), Some("24px"));

    let markup = html(&view);
    assert!(!markup.contains("evil.png"));
    assert!(!markup.contains("hero-background"));
    assert!(!markup.contains("position"));
}

#[test]
fn test_hero_background_image_is_applied() {
    let view = Registry::new()
        .lookup("hero")
        .display(&bag(json!({ "backgroundImage": "https://example.com/bg.jpg" })));

    let background = view
        .find_all(&|node: &VNode| node.attr("class") == Some("hero-background"))
        .into_iter()
        .next()
        .and_then(|node| node.style("background-image"))
        .map(str::to_string);
    assert_eq!(background, Some("url('https://example.com/bg.jpg')".to_string()));
}
