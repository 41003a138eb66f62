use thiserror::Error;

/// Errors raised when untrusted records enter the engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Duplicate widget id: {0}")]
    DuplicateId(String),

    #[error("Widget at index {0} has an empty id")]
    EmptyId(usize),
}
