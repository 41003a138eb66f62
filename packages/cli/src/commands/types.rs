use anyhow::Result;
use colored::Colorize;
use pagesmith_registry::Registry;

/// Print the add-widget menu
pub fn types() -> Result<()> {
    println!("{}", "Widget types".bright_blue().bold());

    let registry = Registry::new();
    for widget_type in registry.menu() {
        let fields: Vec<&str> = registry
            .lookup(widget_type.tag())
            .fields()
            .iter()
            .map(|spec| spec.name)
            .collect();
        println!(
            "  {} {:<14} {}",
            format!("{:<14}", widget_type.tag()).green(),
            widget_type.label(),
            fields.join(", ").dimmed()
        );
    }

    Ok(())
}
