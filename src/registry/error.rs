/// Errors that can occur during registry operations
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("source already exists: {0}")]
    DuplicateSource(String),

    #[error("source not found: {0}")]
    SourceNotFound(String),

    #[error("invalid source: {0}")]
    InvalidSource(String),
}
