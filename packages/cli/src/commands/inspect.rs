use super::load_composition;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagesmith_registry::{Registry, Variant};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Composition file (JSON list of widget records)
    pub file: PathBuf,
}

pub fn inspect(args: InspectArgs) -> Result<()> {
    let composition = load_composition(&args.file)?;
    let registry = Registry::new();

    println!("{} {}", "Composition".bright_blue().bold(), args.file.display());

    if composition.is_empty() {
        println!("{}", "  (no widgets)".dimmed());
        return Ok(());
    }

    let mut unknown = 0;
    for (index, widget) in composition.widgets().iter().enumerate() {
        let fields = widget.data.len();
        match registry.lookup(&widget.widget_type) {
            Variant::Known(widget_type) => println!(
                "  {:>3}  {:<8} {:<14} {}",
                index,
                widget.id.as_str(),
                widget_type.label(),
                format!("{} fields set", fields).dimmed()
            ),
            Variant::Unknown(tag) => {
                unknown += 1;
                println!(
                    "  {:>3}  {:<8} {} {}",
                    index,
                    widget.id.as_str(),
                    format!("{:<14}", tag).yellow(),
                    "unknown type".yellow()
                );
            }
        }
    }

    println!();
    if unknown == 0 {
        println!("{} {} widgets", "✓".green(), composition.len());
    } else {
        println!(
            "{} {} widgets, {} of unknown type",
            "⚠".yellow(),
            composition.len(),
            unknown
        );
    }

    Ok(())
}
