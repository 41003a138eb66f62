use super::{load_composition, write_output};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagesmith_preview::{render_preview, render_preview_document, Viewport};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Composition file (JSON list of widget records)
    pub file: PathBuf,

    /// Viewport (mobile, tablet, desktop); defaults to config
    #[arg(short, long)]
    pub viewport: Option<Viewport>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Emit only the preview frame instead of a full HTML document
    #[arg(long)]
    pub fragment: bool,
}

pub fn preview(args: PreviewArgs, config: &Config) -> Result<()> {
    let composition = load_composition(&args.file)?;
    let viewport = args.viewport.unwrap_or(config.default_viewport);
    let options = config.html_options();

    info!(file = %args.file.display(), %viewport, widgets = composition.len(), "Rendering preview");

    let html = if args.fragment {
        render_preview(composition.widgets(), viewport).to_html(&options)
    } else {
        render_preview_document(composition.widgets(), viewport, &options)
    };

    write_output(args.out.as_ref(), &html)?;

    if let Some(out) = &args.out {
        println!(
            "{} {} widgets at {} → {}",
            "✓".green(),
            composition.len(),
            describe(viewport).bold(),
            out.display()
        );
    }

    Ok(())
}

fn describe(viewport: Viewport) -> String {
    match viewport.dimensions() {
        Some((width, height)) => format!("{} ({}×{})", viewport, width, height),
        None => format!("{} (fluid)", viewport),
    }
}
