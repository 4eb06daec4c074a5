use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::DayRecord;

/// Date-keyed record store. Keys are `YYYY-MM-DD`; a missing key reads as an
/// empty `DayRecord` and is only inserted on the first successful write.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Store {
    days: BTreeMap<String, DayRecord>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored record, or a default one. Never inserts.
    pub fn get(&self, key: &str) -> DayRecord {
        self.days.get(key).cloned().unwrap_or_default()
    }

    pub fn record(&self, key: &str) -> Option<&DayRecord> {
        self.days.get(key)
    }

    /// Applies `updater` to a working copy of the day's record and commits it
    /// only if the updater succeeds. Every category write goes through here.
    pub fn with_day_record<T, E, F>(&mut self, key: &str, updater: F) -> Result<T, E>
    where
        F: FnOnce(&mut DayRecord) -> Result<T, E>,
    {
        let mut working = self.get(key);
        let out = updater(&mut working)?;
        self.days.insert(key.to_string(), working);
        Ok(out)
    }

    pub fn day_has_data(&self, key: &str) -> bool {
        self.days.get(key).is_some_and(DayRecord::has_any_data)
    }

    /// Stored keys in ascending date order.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeTrackError;

    #[test]
    fn test_get_on_empty_store() {
        let store = Store::new();
        assert_eq!(store.get("2024-05-01"), DayRecord::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_with_day_record_inserts_on_success() {
        let mut store = Store::new();
        store
            .with_day_record("2024-05-01", |r| {
                r.water_liters = "2".to_string();
                Ok::<_, LifeTrackError>(())
            })
            .unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("2024-05-01").water_liters, "2");
        assert!(store.day_has_data("2024-05-01"));
    }

    #[test]
    fn test_with_day_record_failure_does_not_materialize() {
        let mut store = Store::new();
        let res: Result<(), _> = store.with_day_record("2024-05-01", |r| {
            r.water_liters = "2".to_string();
            Err(LifeTrackError::IndexOutOfRange { index: 0, len: 0 })
        });
        assert!(res.is_err());
        assert!(store.record("2024-05-01").is_none());
    }

    #[test]
    fn test_dates_are_sorted() {
        let mut store = Store::new();
        for key in ["2024-03-01", "2023-12-31", "2024-01-15"] {
            store
                .with_day_record(key, |r| {
                    r.cigarette_count = "1".to_string();
                    Ok::<_, LifeTrackError>(())
                })
                .unwrap();
        }
        let dates: Vec<&str> = store.dates().collect();
        assert_eq!(dates, vec!["2023-12-31", "2024-01-15", "2024-03-01"]);
    }
}
