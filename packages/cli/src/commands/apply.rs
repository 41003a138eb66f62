use super::{load_composition, write_output};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagesmith_editor::{EditSession, Mutation, SessionOptions};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Composition file (JSON list of widget records)
    pub file: PathBuf,

    /// Mutations file, e.g. `[{"Reorder": {"id": "w2", "index": 0}}]`
    pub mutations: PathBuf,

    /// Output file for the resulting records (stdout when omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn apply(args: ApplyArgs, config: &Config) -> Result<()> {
    let composition = load_composition(&args.file)?;
    let mutations = load_mutations(&args.mutations)?;

    let options = SessionOptions {
        max_undo_levels: config.max_undo_levels,
    };
    let mut session = EditSession::with_options("cli", composition, options);

    info!(mutations = mutations.len(), "Replaying mutations");

    // Progress goes to stderr when the records go to stdout
    let report = |line: String| {
        if args.out.is_some() {
            println!("{}", line);
        } else {
            eprintln!("{}", line);
        }
    };

    let mut applied = 0;
    for mutation in &mutations {
        match session.apply(mutation) {
            Some(change) => {
                applied += 1;
                let target = change.target().map(|id| id.to_string()).unwrap_or_default();
                report(format!("  {} {} {}", "✓".green(), mutation.name(), target));
            }
            None => report(format!(
                "  {} {} {}",
                "-".dimmed(),
                mutation.name(),
                "(no change)".dimmed()
            )),
        }
    }

    let records = serde_json::to_string_pretty(&session.records())?;
    write_output(args.out.as_ref(), &records)?;

    report(format!(
        "{} Applied {} of {} mutations, {} widgets",
        "✓".green(),
        applied,
        mutations.len(),
        session.composition().len()
    ));

    Ok(())
}

fn load_mutations(path: &Path) -> Result<Vec<Mutation>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid mutations in {}", path.display()))
}
