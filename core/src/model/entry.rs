use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LifeTrackError, Result};
use crate::model::DayRecord;

/// A flat record of free-text fields, editable through a form.
///
/// `KEYS` are the short machine names used by key:value input, `LABELS` are
/// shown next to the input boxes. Both are indexed like `field`.
pub trait FormFields: Default + Clone {
    const CATEGORY: &'static str;
    const KEYS: &'static [&'static str];
    const LABELS: &'static [&'static str];

    fn field(&self, index: usize) -> Option<&str>;
    fn field_mut(&mut self, index: usize) -> Option<&mut String>;

    fn field_count() -> usize {
        Self::KEYS.len()
    }

    fn set_field(&mut self, key: &str, value: impl Into<String>) -> bool {
        match Self::KEYS.iter().position(|k| *k == key) {
            Some(i) => match self.field_mut(i) {
                Some(slot) => {
                    *slot = value.into();
                    true
                }
                None => false,
            },
            None => false,
        }
    }
}

/// An entry that lives in a per-day list and must pass validation before it
/// is stored.
pub trait ListEntry: FormFields {
    /// The list this entry type lives in on a day record.
    fn list(record: &DayRecord) -> &[ListItem<Self>];
    fn list_mut(record: &mut DayRecord) -> &mut Vec<ListItem<Self>>;

    fn required_keys() -> &'static [&'static str] {
        Self::KEYS
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        Self::KEYS
            .iter()
            .enumerate()
            .filter(|(_, key)| Self::required_keys().contains(*key))
            .filter(|(i, _)| self.field(*i).map_or(true, str::is_empty))
            .map(|(_, key)| *key)
            .collect()
    }

    fn validate(&self) -> Result<()> {
        let fields = self.missing_fields();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(LifeTrackError::MissingFields {
                category: Self::CATEGORY,
                fields,
            })
        }
    }
}

/// List slot with a synthetic id assigned on insert. The id survives edits,
/// so pending edits keep pointing at the same entry when earlier ones are
/// removed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListItem<T> {
    pub id: Uuid,
    #[serde(flatten)]
    pub value: T,
}

impl<T> ListItem<T> {
    pub fn new(value: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
        }
    }
}
