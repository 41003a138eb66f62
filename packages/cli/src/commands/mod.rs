pub mod apply;
pub mod inspect;
pub mod preview;
pub mod types;

pub use apply::{apply, ApplyArgs};
pub use inspect::{inspect, InspectArgs};
pub use preview::{preview, PreviewArgs};
pub use types::types;

use anyhow::{Context, Result};
use pagesmith_editor::Composition;
use std::path::{Path, PathBuf};

/// Load a composition from a JSON file of widget records
pub(crate) fn load_composition(path: &Path) -> Result<Composition> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let composition = Composition::from_json(&content)
        .with_context(|| format!("Invalid composition in {}", path.display()))?;
    Ok(composition)
}

/// Write to `out`, or stdout when no path is given
pub(crate) fn write_output(out: Option<&PathBuf>, content: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, content)
                .with_context(|| format!("Cannot write {}", path.display()))?;
        }
        None => println!("{}", content),
    }
    Ok(())
}
