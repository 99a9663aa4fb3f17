//! Error type for product source operations.

use std::path::PathBuf;

/// Errors a product source can report.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Product source unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Duplicate product id {0} in catalog")]
    DuplicateId(u32),
}
