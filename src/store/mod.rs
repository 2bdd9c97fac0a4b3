use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::states::{self, DEFAULT_NOT_HAD};

/// Default data file name, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "states_data.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The persisted tracking data: every state, and the ones not yet had.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingRecord {
    pub states: Vec<String>,
    pub not_had: Vec<String>,
}

impl Default for TrackingRecord {
    fn default() -> Self {
        Self {
            states: states::all_codes().map(String::from).collect(),
            not_had: DEFAULT_NOT_HAD.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TrackingRecord {
    /// Codes in `not_had` that are missing from `states`.
    pub fn invalid_codes(&self) -> Vec<&str> {
        self.not_had
            .iter()
            .filter(|code| !self.states.contains(code))
            .map(String::as_str)
            .collect()
    }

    /// True when every `not_had` entry is a known state.
    pub fn validate(&self) -> bool {
        let invalid = self.invalid_codes();
        if invalid.is_empty() {
            return true;
        }
        warn!(?invalid, "invalid states in not_had list");
        false
    }

    pub fn is_known(&self, code: &str) -> bool {
        self.states.iter().any(|s| s == code)
    }

    pub fn has_had(&self, code: &str) -> bool {
        !self.not_had.iter().any(|s| s == code)
    }
}

/// Trait for record persistence, enabling mock storage in tests.
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore {
    fn load(&self) -> Result<TrackingRecord, StoreError>;
    fn save(&self, record: &TrackingRecord) -> Result<(), StoreError>;
    fn location(&self) -> String;
}

/// Record storage backed by a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<TrackingRecord, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound(self.path.clone()));
        }
        let contents =
            std::fs::read_to_string(&self.path).map_err(|source| StoreError::ReadFailed {
                path: self.path.clone(),
                source,
            })?;
        serde_json::from_str(&contents).map_err(|source| StoreError::ParseFailed {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, record: &TrackingRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(record)?;
        let write = |path: &Path| -> std::io::Result<()> {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, format!("{json}\n"))
        };
        write(&self.path).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), "saved tracking record");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Load the record, falling back to the built-in defaults on any error.
///
/// The error (if any) is returned alongside so the caller can tell the user.
/// A missing file is the normal first-run case and is not reported.
pub fn load_or_default(store: &dyn RecordStore) -> (TrackingRecord, Option<StoreError>) {
    match store.load() {
        Ok(record) => (record, None),
        Err(StoreError::NotFound(path)) => {
            info!(path = %path.display(), "no data file, using defaults");
            (TrackingRecord::default(), None)
        }
        Err(e) => {
            warn!(error = %e, "could not load data file, using defaults");
            (TrackingRecord::default(), Some(e))
        }
    }
}
