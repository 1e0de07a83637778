//! Key-value persistence for profiles and per-day results.
//!
//! The engine never owns storage; hosts hand in any [`KeyValueStore`].

pub mod cache;
pub mod profile;

pub use cache::DailyCache;
pub use profile::{ProfileStore, UserProfile};

use std::collections::HashMap;
use thiserror::Error;

/// Keys written by the engine
pub mod keys {
    pub const USER_PROFILE: &str = "@urasei_user_profile";
    pub const DAILY_TRANSITS: &str = "@urasei_daily_transits";
    pub const COMPATIBILITY_RESULTS: &str = "@urasei_compatibility_results";
    pub const LAST_TRANSIT_DATE: &str = "@urasei_last_transit_date";

    pub const ALL: [&str; 4] = [
        USER_PROFILE,
        DAILY_TRANSITS,
        COMPATIBILITY_RESULTS,
        LAST_TRANSIT_DATE,
    ];
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to serialize value for {key}: {source}")]
    Serialization {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Storage backend failed on {key}: {message}")]
    Backend { key: String, message: String },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> StoreResult<()>;
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Read a JSON value, treating undecodable data as absent.
pub(crate) fn read_json<S, T>(store: &S, key: &'static str) -> StoreResult<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: serde::de::DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            log::warn!("Discarding unreadable {}: {}", key, e);
            Ok(None)
        }
    }
}

pub(crate) fn write_json<S, T>(store: &mut S, key: &'static str, value: &T) -> StoreResult<()>
where
    S: KeyValueStore + ?Sized,
    T: serde::Serialize,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialization { key, source })?;
    store.set(key, raw)
}

/// Remove every key the engine writes.
pub fn clear_all<S: KeyValueStore + ?Sized>(store: &mut S) -> StoreResult<()> {
    for key in keys::ALL {
        store.remove(key)?;
    }
    log::info!("Cleared stored profile and cached results");
    Ok(())
}
