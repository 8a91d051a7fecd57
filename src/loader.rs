//! Document loading for the brief and landing pages.
//!
//! One-shot reads, recomputed per render: no cache, no file watching. The
//! documents are hand-edited JSON, so absence is the normal "no data yet"
//! state rather than a failure.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::BriefError;
use crate::types::{Brief, LandingPage};

/// Load the brief record. `Ok(None)` when the file does not exist.
pub fn load_brief(path: &Path) -> Result<Option<Brief>, BriefError> {
    load_document(path)
}

/// Load the landing document. `Ok(None)` when the file does not exist.
pub fn load_landing(path: &Path) -> Result<Option<LandingPage>, BriefError> {
    load_document(path)
}

fn load_document<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, BriefError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("{} not found, using empty defaults", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(BriefError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let doc = serde_json::from_str(&raw).map_err(|source| BriefError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {}", path.display());
    Ok(Some(doc))
}
