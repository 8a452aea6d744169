//! User dataset offered by the multi-select widget.
//!
//! The dataset is loaded once at startup, either from the file named in
//! `[dataset] path` or from the copy bundled into the binary, and is then
//! shared read-only by every request.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::config::DatasetSettings;

const BUNDLED_USERS: &str = include_str!("../data/users.json");

/// A selectable user. `name` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    pub name: String,
    /// Avatar URL
    #[serde(rename = "image")]
    pub image_url: String,
    pub email: String,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, immutable list of entries.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: Vec<Entry>,
}

impl Dataset {
    /// Dataset compiled in from `data/users.json`.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_USERS)
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Load according to configuration, falling back to the bundled dataset
    /// when no path is configured.
    pub fn load(settings: &DatasetSettings) -> Result<Self, DatasetError> {
        match &settings.path {
            Some(path) => {
                tracing::info!("Loading dataset from {}", path.display());
                Self::from_file(path)
            }
            None => {
                tracing::info!("Using bundled dataset");
                Self::bundled()
            }
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
