// ABOUTME: JSON file key-value store persisting form fields across runs
// ABOUTME: Atomic writes via temp file and rename, corrupt documents read as empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! File-backed store
//!
//! The whole store is a single JSON document:
//!
//! ```json
//! {
//!   "entries": { "catType": "kitten", "age": "6" },
//!   "updated_at": "2025-01-01T12:00:00Z"
//! }
//! ```
//!
//! The document is read once when the store is opened and rewritten on every
//! change. A change becomes visible only after it reached the disk. A missing
//! file is an empty store. A file that is not a valid
//! document is logged and treated as empty, and the next write replaces it.

use super::KeyValueStore;
use catfood_core::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// On-disk document layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    entries: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// Key-value store persisted as a JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    document: StoreDocument,
}

impl JsonFileStore {
    /// Open the store at `path`, reading the existing document if present
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let document = read_document(&path)?;
        debug!(
            path = %path.display(),
            entries = document.entries.len(),
            "Opened JSON file store"
        );
        Ok(Self { path, document })
    }

    /// Location of the document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Time of the last successful write, if the document was ever written
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.document.updated_at
    }

    /// Write `document` to disk, leaving the in-memory copy untouched on failure
    fn persist(&self, document: &StoreDocument) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!(
                    "Failed to create store directory {}",
                    parent.display()
                ))
                .with_source(e)
            })?;
        }

        let contents = serde_json::to_string_pretty(document)?;

        let temp_path = temp_path_for(&self.path);
        fs::write(&temp_path, contents).map_err(|e| {
            AppError::storage(format!("Failed to write {}", temp_path.display())).with_source(e)
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| {
            AppError::storage(format!("Failed to replace {}", self.path.display()))
                .with_source(e)
        })?;

        debug!(path = %self.path.display(), "Persisted JSON file store");
        Ok(())
    }

    /// Apply `edit` to a copy of the document and adopt it once it is on disk
    fn update(&mut self, edit: impl FnOnce(&mut BTreeMap<String, String>)) -> AppResult<()> {
        let mut next = self.document.clone();
        edit(&mut next.entries);
        next.updated_at = Some(Utc::now());
        self.persist(&next)?;
        self.document = next;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.document.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.update(|entries| {
            entries.insert(key.to_owned(), value.to_owned());
        })
    }

    fn set_many(&mut self, pairs: &[(&str, &str)]) -> AppResult<()> {
        self.update(|entries| {
            for (key, value) in pairs {
                entries.insert((*key).to_owned(), (*value).to_owned());
            }
        })
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if !self.document.entries.contains_key(key) {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

fn read_document(path: &Path) -> AppResult<StoreDocument> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoreDocument::default()),
        Err(e) => {
            return Err(
                AppError::storage(format!("Failed to read {}", path.display())).with_source(e),
            )
        }
    };

    match serde_json::from_str(&contents) {
        Ok(document) => Ok(document),
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Store file is not a valid document, starting from defaults"
            );
            Ok(StoreDocument::default())
        }
    }
}

/// Sibling path used for atomic replacement (`store.json` -> `store.json.tmp`)
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(ToOwned::to_owned).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
