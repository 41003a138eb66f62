//! Viewport-framed rendering of a composition snapshot.

use crate::viewport::Viewport;
use pagesmith_model::WidgetInstance;
use pagesmith_registry::Registry;
use pagesmith_render::{to_html, HtmlOptions, VNode};
use tracing::{info, warn};

/// Rendered preview; owns its output
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub viewport: Viewport,
    /// Viewport frame containing the page
    pub root: VNode,
    widget_count: usize,
}

impl Preview {
    /// Number of widgets rendered (unknown types included)
    pub fn widget_count(&self) -> usize {
        self.widget_count
    }

    pub fn is_empty(&self) -> bool {
        self.widget_count == 0
    }

    /// Rendered widget blocks, in page order
    pub fn blocks(&self) -> Vec<&VNode> {
        self.root
            .find_all(&|node| node.attr("data-widget-id").is_some())
    }

    pub fn to_html(&self, options: &HtmlOptions) -> String {
        to_html(&self.root, options)
    }
}

/// Render every widget read-only inside a frame sized to `viewport`.
///
/// Unknown widget types render as placeholders; an empty composition renders
/// an empty-state message.
pub fn render_preview(widgets: &[WidgetInstance], viewport: Viewport) -> Preview {
    let registry = Registry::new();

    let page = if widgets.is_empty() {
        VNode::element("main")
            .with_attr("class", "preview-page preview-empty")
            .with_child(
                VNode::element("div")
                    .with_attr("class", "empty-state")
                    .with_child(VNode::element("h2").with_child(VNode::text("No widgets yet")))
                    .with_child(
                        VNode::element("p")
                            .with_child(VNode::text("Add a widget to start building your page.")),
                    ),
            )
    } else {
        VNode::element("main")
            .with_attr("class", "preview-page")
            .with_children(widgets.iter().map(|widget| {
                if !widget.kind().is_known() {
                    warn!(widget_id = %widget.id, widget_type = %widget.widget_type, "Previewing unknown widget type");
                }
                registry.render_instance(widget)
            }))
    };

    let mut frame = VNode::element("div")
        .with_attr("class", format!("preview-frame preview-{}", viewport.name()))
        .with_attr("data-viewport", viewport.name());

    frame = match viewport.dimensions() {
        Some((width, height)) => frame
            .with_attr("data-width", width.to_string())
            .with_attr("data-height", height.to_string())
            .with_style("width", format!("{}px", width))
            .with_style("height", format!("{}px", height))
            .with_style("overflow-y", "auto")
            .with_style("margin", "0 auto"),
        None => frame.with_style("width", "100%"),
    };

    info!(viewport = %viewport, widgets = widgets.len(), "Rendered preview");

    Preview {
        viewport,
        root: frame.with_child(page),
        widget_count: widgets.len(),
    }
}

/// Standalone HTML page for a full-window preview
pub fn render_preview_document(widgets: &[WidgetInstance], viewport: Viewport, options: &HtmlOptions) -> String {
    let preview = render_preview(widgets, viewport);
    let body = preview.to_html(options);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Page Preview ({viewport})</title>
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #f3f4f6;
        }}
        .preview-frame {{
            background: #ffffff;
        }}
        .widget {{
            padding: 48px 24px;
        }}
        .empty-state {{
            padding: 96px 24px;
            text-align: center;
            color: #6b7280;
        }}
    </style>
</head>
<body>
{body}</body>
</html>
"#,
        viewport = viewport,
        body = body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_model::{WidgetId, WidgetType};

    #[test]
    fn test_empty_composition_shows_empty_state() {
        let preview = render_preview(&[], Viewport::Mobile);

        assert!(preview.is_empty());
        assert!(preview.root.text_content().contains("No widgets yet"));
        assert!(!preview.root.find_all(&|n| n.attr("class") == Some("empty-state")).is_empty());
    }

    #[test]
    fn test_desktop_is_fluid() {
        let widgets = vec![WidgetInstance::new(WidgetId::from("w1"), WidgetType::Text)];
        let preview = render_preview(&widgets, Viewport::Desktop);

        assert_eq!(preview.root.style("width"), Some("100%"));
        assert_eq!(preview.root.style("height"), None);
    }

    #[test]
    fn test_document_wraps_frame() {
        let widgets = vec![WidgetInstance::new(WidgetId::from("w1"), WidgetType::Hero)];
        let html = render_preview_document(&widgets, Viewport::Tablet, &HtmlOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Page Preview (tablet)"));
        assert!(html.contains("data-viewport=\"tablet\""));
    }
}
