// ABOUTME: Store factory for configuration-based backend selection
// ABOUTME: Unified store type dispatching to the in-memory or JSON file backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{json_file::JsonFileStore, memory::MemoryStore, KeyValueStore};
use crate::config::{StoreBackend, StoreConfig};
use catfood_core::errors::AppResult;
use tracing::info;

/// Unified store interface
#[derive(Debug, Clone)]
pub enum Store {
    /// Process-local store
    Memory(MemoryStore),
    /// JSON document on disk
    JsonFile(JsonFileStore),
}

impl Store {
    /// Open the store selected by the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the store file exists but cannot be read
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        match &config.backend {
            StoreBackend::Memory => {
                info!("Initializing in-memory store");
                Ok(Self::Memory(MemoryStore::new()))
            }
            StoreBackend::JsonFile(path) => {
                info!(path = %path.display(), "Initializing JSON file store");
                Ok(Self::JsonFile(JsonFileStore::open(path.clone())?))
            }
        }
    }

    /// Backend name for diagnostics
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::JsonFile(_) => "json_file",
        }
    }
}

impl KeyValueStore for Store {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            Self::Memory(store) => store.get(key),
            Self::JsonFile(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.set(key, value),
            Self::JsonFile(store) => store.set(key, value),
        }
    }

    fn set_many(&mut self, pairs: &[(&str, &str)]) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.set_many(pairs),
            Self::JsonFile(store) => store.set_many(pairs),
        }
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.remove(key),
            Self::JsonFile(store) => store.remove(key),
        }
    }
}
