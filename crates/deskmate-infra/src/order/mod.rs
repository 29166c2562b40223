//! Order Directory adapters.
//!
//! Implementations of the [`OrderDirectory`](deskmate_core::order::OrderDirectory)
//! port. Only an in-memory directory exists; it is seeded either with the
//! built-in demo contacts or from a JSON file.

pub mod in_memory;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderDirectoryError {
    #[error("failed to read order directory {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse order directory {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
