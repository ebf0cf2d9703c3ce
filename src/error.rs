use thiserror::Error;

/// Failures surfaced by the rating engine.
///
/// A legitimately empty result (no history, an offset older than retained data)
/// is never an error: those come back as `Ok` with empty collections.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Snapshot store unavailable: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("Snapshot store unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error)
}

impl Error {
    /// True when the failure came from the external store and a retry may help.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Error::Database(_) | Error::SourceUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
