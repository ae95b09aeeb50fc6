use std::path::PathBuf;
use thiserror::Error;

use crate::dataset::DatasetId;

/// The main error type for navfetch operations.
#[derive(Debug, Error)]
pub enum NavfetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing dataset identifier (valid options: {})", DatasetId::valid_keys())]
    MissingDataset,

    #[error("Unknown dataset '{name}' (valid options: {})", DatasetId::valid_keys())]
    UnknownDataset { name: String },

    #[error("Failed downloading {url}: {message}")]
    Transfer { url: String, message: String },

    #[error("Failed unpacking {}: {message}", .archive.display())]
    Extraction { archive: PathBuf, message: String },
}
