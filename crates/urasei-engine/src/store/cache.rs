use crate::chart::{AstrologyEngine, BirthChart, DailyTransit};
use crate::store::{keys, read_json, write_json, KeyValueStore, StoreResult};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";
/// Days kept in the transit cache; older days are dropped on write.
pub const MAX_CACHED_DAYS: usize = 7;

pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedTransit {
    day: String,
    /// Birth moment of the chart the transit was computed against
    chart_date: NaiveDateTime,
    transit: DailyTransit,
}

/// One transit per calendar day, recomputed when the day or the natal
/// chart changes.
pub struct DailyCache<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore + ?Sized> DailyCache<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    fn entries(&self) -> StoreResult<Vec<CachedTransit>> {
        Ok(read_json(&*self.store, keys::DAILY_TRANSITS)?.unwrap_or_default())
    }

    pub fn cached(&self, chart: &BirthChart, day: NaiveDate) -> StoreResult<Option<DailyTransit>> {
        let key = day_key(day);
        Ok(self
            .entries()?
            .into_iter()
            .find(|e| e.day == key && e.chart_date == chart.chart_date)
            .map(|e| e.transit))
    }

    /// Store a transit, replacing any entry for the same day and keeping
    /// only the latest `MAX_CACHED_DAYS` days.
    pub fn put(&mut self, chart: &BirthChart, transit: &DailyTransit) -> StoreResult<()> {
        let key = day_key(transit.date.date());
        let mut entries = self.entries()?;
        entries.retain(|e| e.day != key);
        entries.push(CachedTransit {
            day: key.clone(),
            chart_date: chart.chart_date,
            transit: transit.clone(),
        });
        entries.sort_by(|a, b| b.day.cmp(&a.day));
        entries.truncate(MAX_CACHED_DAYS);
        write_json(&mut *self.store, keys::DAILY_TRANSITS, &entries)?;
        self.store.set(keys::LAST_TRANSIT_DATE, key)
    }

    /// Cached transit for the target's calendar day, or a freshly computed
    /// one that is then stored.
    pub fn transit_for_day(
        &mut self,
        engine: &AstrologyEngine,
        chart: &BirthChart,
        target: NaiveDateTime,
    ) -> StoreResult<DailyTransit> {
        if let Some(transit) = self.cached(chart, target.date())? {
            log::debug!("transit cache hit for {}", day_key(target.date()));
            return Ok(transit);
        }
        let transit = engine.calculate_daily_transit(chart, target);
        self.put(chart, &transit)?;
        Ok(transit)
    }

    /// Whether a transit has already been stored for this day.
    pub fn has_entry_for(&self, day: NaiveDate) -> StoreResult<bool> {
        Ok(self.store.get(keys::LAST_TRANSIT_DATE)?.as_deref() == Some(day_key(day).as_str()))
    }

    /// Most recent days first.
    pub fn history(&self, limit: usize) -> StoreResult<Vec<DailyTransit>> {
        let mut entries = self.entries()?;
        entries.sort_by(|a, b| b.day.cmp(&a.day));
        Ok(entries.into_iter().take(limit).map(|e| e.transit).collect())
    }
}
