// ABOUTME: Key-value persistence of the calculator form fields
// ABOUTME: Pluggable backends (in-memory, JSON file) behind a single store trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Store factory selecting the backend from configuration
pub mod factory;
/// JSON document store on disk
pub mod json_file;
/// In-memory store implementation
pub mod memory;

pub use factory::Store;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use catfood_core::constants::{defaults, store_keys};
use catfood_core::errors::AppResult;
use catfood_core::models::{CatProfile, CatType, FormField};
use catfood_intelligence::parsing::parse_ratio_percent;
use tracing::{debug, warn};

/// String key-value store holding the form fields
///
/// # Examples
///
/// ```rust
/// use catfood_calculator::storage::{KeyValueStore, MemoryStore};
/// # fn main() -> catfood_core::errors::AppResult<()> {
///
/// let mut store = MemoryStore::new();
/// store.set("weight", "5")?;
/// assert_eq!(store.get("weight")?.as_deref(), Some("5"));
///
/// store.remove("weight")?;
/// assert_eq!(store.get("weight")?, None);
/// # Ok(())
/// # }
/// ```
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Store several pairs; backends that can write them as one unit override this
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn set_many(&mut self, pairs: &[(&str, &str)]) -> AppResult<()> {
        for (key, value) in pairs {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Remove `key`; removing an absent key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// Typed access to the persisted calculator form
pub trait ProfileStore {
    /// Load the profile, substituting defaults for absent, empty, or unreadable keys
    fn load(&self) -> CatProfile;

    /// Persist every field of the profile
    ///
    /// # Errors
    ///
    /// Returns an error if any key cannot be written
    fn save(&mut self, profile: &CatProfile) -> AppResult<()>;

    /// Persist one field's text under its store key
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be written
    fn save_field(&mut self, field: FormField, value: &str) -> AppResult<()>;

    /// Persist several fields' text together
    ///
    /// # Errors
    ///
    /// Returns an error if the keys cannot be written
    fn save_fields(&mut self, fields: &[(FormField, &str)]) -> AppResult<()>;
}

impl<S: KeyValueStore> ProfileStore for S {
    fn load(&self) -> CatProfile {
        let text = |key: &str, default: &str| read_or_default(self, key, default);

        let wet_dry_ratio = read_non_empty(self, store_keys::WET_DRY_RATIO)
            .and_then(|stored| {
                let parsed = parse_ratio_percent(&stored);
                if parsed.is_none() {
                    warn!(key = store_keys::WET_DRY_RATIO, value = %stored, "Stored ratio is not a number, using default");
                }
                parsed
            })
            .unwrap_or(defaults::WET_DRY_RATIO);

        let profile = CatProfile {
            cat_type: CatType::from_key(&text(store_keys::CAT_TYPE, defaults::CAT_TYPE)),
            age: text(store_keys::AGE, defaults::AGE),
            weight: text(store_keys::WEIGHT, defaults::WEIGHT),
            wet_food_calories: text(store_keys::WET_FOOD_CALORIES, defaults::WET_FOOD_CALORIES),
            dry_food_calories: text(store_keys::DRY_FOOD_CALORIES, defaults::DRY_FOOD_CALORIES),
            wet_dry_ratio,
        };
        debug!(cat_type = %profile.cat_type, "Loaded cat profile from store");
        profile
    }

    fn save(&mut self, profile: &CatProfile) -> AppResult<()> {
        let texts: Vec<(FormField, String)> = FormField::ALL
            .into_iter()
            .map(|field| (field, profile.field_text(field)))
            .collect();
        let pairs: Vec<(&str, &str)> = texts
            .iter()
            .map(|(field, text)| (field.store_key(), text.as_str()))
            .collect();
        self.set_many(&pairs)?;
        debug!("Saved cat profile to store");
        Ok(())
    }

    fn save_field(&mut self, field: FormField, value: &str) -> AppResult<()> {
        self.set(field.store_key(), value)
    }

    fn save_fields(&mut self, fields: &[(FormField, &str)]) -> AppResult<()> {
        let pairs: Vec<(&str, &str)> = fields
            .iter()
            .map(|(field, value)| (field.store_key(), *value))
            .collect();
        self.set_many(&pairs)
    }
}

/// Stored value, treating empty strings and read failures as absent
fn read_non_empty<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value.filter(|value| !value.is_empty()),
        Err(e) => {
            warn!(key, error = %e, "Failed to read stored field, using default");
            None
        }
    }
}

fn read_or_default<S: KeyValueStore + ?Sized>(store: &S, key: &str, default: &str) -> String {
    read_non_empty(store, key).unwrap_or_else(|| default.to_owned())
}
