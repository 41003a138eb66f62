//! Error types for the editor

use thiserror::Error;

/// Failures at the editor boundary.
///
/// Editing operations themselves never fail: stale ids are no-ops and indices
/// are clamped. Errors only arise when loading or decoding external input.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid composition: {0}")]
    Model(#[from] pagesmith_model::ModelError),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
