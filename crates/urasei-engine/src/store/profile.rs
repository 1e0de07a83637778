use crate::ephemeris::types::GeoLocation;
use crate::error::Result;
use crate::store::{keys, read_json, write_json, KeyValueStore, StoreResult};
use crate::western::compatibility::CompatibilityResult;
use crate::western::signs::{sun_sign_for, ZodiacSign};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// What the host remembers about its user between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub birth_month: u32,
    pub birth_day: u32,
    pub zodiac_sign: ZodiacSign,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_location: Option<GeoLocation>,
}

impl UserProfile {
    /// Profile from a birthday, with the sun sign filled in.
    pub fn new(birth_month: u32, birth_day: u32) -> Result<Self> {
        Ok(Self {
            birth_month,
            birth_day,
            zodiac_sign: sun_sign_for(birth_month, birth_day)?,
            name: None,
            birth_date: None,
            birth_time: None,
            birth_location: None,
        })
    }
}

/// Profile and compatibility history over a key-value store
pub struct ProfileStore<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore + ?Sized> ProfileStore<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    pub fn save_profile(&mut self, profile: &UserProfile) -> StoreResult<()> {
        write_json(&mut *self.store, keys::USER_PROFILE, profile)
    }

    pub fn load_profile(&self) -> StoreResult<Option<UserProfile>> {
        read_json(&*self.store, keys::USER_PROFILE)
    }

    pub fn save_compatibility_result(&mut self, result: &CompatibilityResult) -> StoreResult<()> {
        let mut results: Vec<CompatibilityResult> =
            read_json(&*self.store, keys::COMPATIBILITY_RESULTS)?.unwrap_or_default();
        results.push(result.clone());
        write_json(&mut *self.store, keys::COMPATIBILITY_RESULTS, &results)
    }

    /// Most recent results first.
    pub fn compatibility_history(&self, limit: usize) -> StoreResult<Vec<CompatibilityResult>> {
        let results: Vec<CompatibilityResult> =
            read_json(&*self.store, keys::COMPATIBILITY_RESULTS)?.unwrap_or_default();
        Ok(results.into_iter().rev().take(limit).collect())
    }
}
