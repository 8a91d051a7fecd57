//! Error types for document loading.
//!
//! A missing file is not an error: the loader reports it as `Ok(None)` and
//! the shell renders the all-empty view with a "no data" notice. Only an
//! unreadable or unparseable document reaches the caller as a failure.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BriefError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
