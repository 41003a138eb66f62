use crate::vdom::VNode;

/// Options for HTML emission
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

impl HtmlOptions {
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Default::default()
        }
    }
}

struct Context<'a> {
    options: &'a HtmlOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a HtmlOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        self.newline();
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn newline(&mut self) {
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Emit HTML for a single node tree
pub fn to_html(node: &VNode, options: &HtmlOptions) -> String {
    to_html_fragment(std::slice::from_ref(node), options)
}

/// Emit HTML for a list of sibling nodes
pub fn to_html_fragment(nodes: &[VNode], options: &HtmlOptions) -> String {
    let mut ctx = Context::new(options);
    for node in nodes {
        emit_node(node, &mut ctx);
    }
    ctx.get_output()
}

fn emit_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
            key,
        } => {
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add("<");
            ctx.add(tag);

            if let Some(key) = key {
                ctx.add(&format!(" data-key=\"{}\"", escape_html(key)));
            }

            for (name, value) in attributes {
                ctx.add(&format!(" {}=\"{}\"", name, escape_html(value)));
            }

            if !styles.is_empty() {
                let inline = styles
                    .iter()
                    .map(|(k, v)| format!("{}: {};", k, v))
                    .collect::<Vec<_>>()
                    .join(" ");
                ctx.add(&format!(" style=\"{}\"", escape_html(&inline)));
            }

            if children.is_empty() && is_self_closing(tag) {
                ctx.add(" />");
                ctx.newline();
                return;
            }

            ctx.add(">");

            if has_only_text(children) {
                for child in children {
                    if let VNode::Text { content } = child {
                        ctx.add(&escape_html(content));
                    }
                }
            } else {
                ctx.newline();
                ctx.indent();
                for child in children {
                    emit_node(child, ctx);
                }
                ctx.dedent();
                if ctx.options.pretty {
                    ctx.add_indent();
                }
            }

            ctx.add(&format!("</{}>", tag));
            ctx.newline();
        }

        VNode::Text { content } => {
            ctx.add_line(&escape_html(content));
        }

        VNode::Comment { content } => {
            let mut content = content.clone();
            while content.contains("--") {
                content = content.replace("--", "- -");
            }
            ctx.add_line(&format!("<!-- {} -->", content));
        }

        VNode::Placeholder { message } => {
            ctx.add_line(&format!(
                r#"<div class="widget-placeholder" style="color: #b91c1c; border: 1px dashed #b91c1c; padding: 8px;">{}</div>"#,
                escape_html(message)
            ));
        }
    }
}

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn has_only_text(children: &[VNode]) -> bool {
    children.iter().all(|child| matches!(child, VNode::Text { .. }))
}
