//! Preview renderer behavior: viewport framing, purity, unknown-type resilience

use pagesmith_model::{WidgetId, WidgetInstance, WidgetType};
use pagesmith_preview::{render_preview, Viewport};
use pagesmith_render::HtmlOptions;
use pretty_assertions::assert_eq;
use serde_json::json;

fn widgets() -> Vec<WidgetInstance> {
    vec![
        WidgetInstance::new(WidgetId::from("w1"), WidgetType::Hero)
            .with_data(json!({ "title": "Hi" }).as_object().cloned().unwrap()),
        WidgetInstance::new(WidgetId::from("w2"), WidgetType::Text),
        WidgetInstance::new(WidgetId::from("w3"), WidgetType::Pricing),
    ]
}

#[test]
fn test_tablet_frame_dimensions() {
    let preview = render_preview(&widgets(), Viewport::Tablet);

    assert_eq!(preview.root.attr("data-viewport"), Some("tablet"));
    assert_eq!(preview.root.style("width"), Some("768px"));
    assert_eq!(preview.root.style("height"), Some("1024px"));
}

#[test]
fn test_mobile_frame_dimensions() {
    let preview = render_preview(&widgets(), Viewport::Mobile);

    assert_eq!(preview.root.style("width"), Some("375px"));
    assert_eq!(preview.root.style("height"), Some("667px"));
}

#[test]
fn test_blocks_follow_composition_order() {
    let preview = render_preview(&widgets(), Viewport::Desktop);

    let ids: Vec<_> = preview
        .blocks()
        .iter()
        .filter_map(|b| b.attr("data-widget-id"))
        .collect();
    assert_eq!(ids, vec!["w1", "w2", "w3"]);
    assert_eq!(preview.widget_count(), 3);
}

#[test]
fn test_preview_never_renders_edit_forms() {
    let html = render_preview(&widgets(), Viewport::Desktop).to_html(&HtmlOptions::compact());

    assert!(!html.contains("widget-editor"));
}

#[test]
fn test_same_snapshot_same_output() {
    let snapshot = widgets();

    let first = render_preview(&snapshot, Viewport::Mobile);
    let second = render_preview(&snapshot, Viewport::Mobile);

    assert_eq!(first, second);
    assert_eq!(
        first.to_html(&HtmlOptions::default()),
        second.to_html(&HtmlOptions::default())
    );
}

#[test]
fn test_later_mutation_does_not_change_earlier_render() {
    let mut snapshot = widgets();
    let preview = render_preview(&snapshot, Viewport::Mobile);
    let html_before = preview.to_html(&HtmlOptions::compact());

    snapshot[0]
        .data
        .insert("title".to_string(), json!("Changed"));
    snapshot.remove(1);

    assert_eq!(preview.to_html(&HtmlOptions::compact()), html_before);
    assert!(html_before.contains("<h1>Hi</h1>"));

    let fresh = render_preview(&snapshot, Viewport::Mobile);
    assert!(fresh.to_html(&HtmlOptions::compact()).contains("<h1>Changed</h1>"));
}

#[test]
fn test_unknown_type_does_not_break_other_widgets() {
    let mut snapshot = widgets();
    snapshot.insert(1, WidgetInstance::with_tag(WidgetId::from("w9"), "nonexistent"));

    let preview = render_preview(&snapshot, Viewport::Tablet);
    let text = preview.root.text_content();

    assert_eq!(preview.blocks().len(), 4);
    assert!(text.contains("Unknown widget type: nonexistent"));
    assert!(text.contains("Hi"));
    assert!(text.contains("Pricing Plans"));
}
