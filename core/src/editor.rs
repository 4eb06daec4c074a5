//! CRUD over a day's category lists, plus the form state that drives it.
//!
//! The free functions work on any `Vec<ListItem<T>>` and leave the list
//! untouched when they return an error. `ListEditor` holds the pending form
//! for one list category and tracks the entry being edited by id.

use uuid::Uuid;

use crate::error::{LifeTrackError, Result};
use crate::model::{DayRecord, ListEntry, ListItem, NutritionEntry};

/// Appends `item` after validation. Returns the new entry's id.
pub fn add<T: ListEntry>(list: &mut Vec<ListItem<T>>, item: T) -> Result<Uuid> {
    item.validate()?;
    let entry = ListItem::new(item);
    let id = entry.id;
    list.push(entry);
    Ok(id)
}

/// Value to prefill the form with, or `None` for a stale index.
pub fn start_edit<T: ListEntry>(list: &[ListItem<T>], index: usize) -> Option<T> {
    list.get(index).map(|entry| entry.value.clone())
}

/// Replaces the entry at `index` in place, keeping its id.
pub fn commit_edit<T: ListEntry>(list: &mut [ListItem<T>], index: usize, item: T) -> Result<()> {
    item.validate()?;
    let len = list.len();
    let slot = list
        .get_mut(index)
        .ok_or(LifeTrackError::IndexOutOfRange { index, len })?;
    slot.value = item;
    Ok(())
}

pub fn commit_edit_by_id<T: ListEntry>(list: &mut [ListItem<T>], id: Uuid, item: T) -> Result<()> {
    item.validate()?;
    let slot = list
        .iter_mut()
        .find(|entry| entry.id == id)
        .ok_or(LifeTrackError::EntryNotFound(id))?;
    slot.value = item;
    Ok(())
}

/// Removes the entry at `index`; later entries shift down by one.
pub fn remove<T>(list: &mut Vec<ListItem<T>>, index: usize) -> Result<ListItem<T>> {
    if index >= list.len() {
        return Err(LifeTrackError::IndexOutOfRange {
            index,
            len: list.len(),
        });
    }
    Ok(list.remove(index))
}

pub fn remove_by_id<T>(list: &mut Vec<ListItem<T>>, id: Uuid) -> Result<ListItem<T>> {
    let index = list
        .iter()
        .position(|entry| entry.id == id)
        .ok_or(LifeTrackError::EntryNotFound(id))?;
    Ok(list.remove(index))
}

pub fn save_nutrition(record: &mut DayRecord, nutrition: NutritionEntry) {
    record.nutrition = nutrition;
}

pub fn save_water(record: &mut DayRecord, liters: impl Into<String>) {
    record.water_liters = liters.into();
}

pub fn save_cigarettes(record: &mut DayRecord, count: impl Into<String>) {
    record.cigarette_count = count.into();
}

/// What `ListEditor::submit` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Added(Uuid),
    Updated(Uuid),
}

/// Form state for one list category: the draft being typed and, if any, the
/// id of the entry it will replace.
#[derive(Debug, Clone, Default)]
pub struct ListEditor<T> {
    pub draft: T,
    editing: Option<Uuid>,
}

impl<T: ListEntry> ListEditor<T> {
    pub fn new() -> Self {
        Self {
            draft: T::default(),
            editing: None,
        }
    }

    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Loads the entry at `index` into the draft. A stale index changes
    /// nothing and returns false.
    pub fn start_edit(&mut self, list: &[ListItem<T>], index: usize) -> bool {
        match list.get(index) {
            Some(entry) => {
                self.draft = entry.value.clone();
                self.editing = Some(entry.id);
                true
            }
            None => false,
        }
    }

    /// Adds the draft, or writes it over the entry being edited. On error the
    /// draft is kept so the user can correct it.
    pub fn submit(&mut self, list: &mut Vec<ListItem<T>>) -> Result<Submitted> {
        let outcome = match self.editing {
            Some(id) => {
                commit_edit_by_id(list, id, self.draft.clone())?;
                Submitted::Updated(id)
            }
            None => Submitted::Added(add(list, self.draft.clone())?),
        };
        self.reset();
        Ok(outcome)
    }

    /// Removes the entry at `index`. If it was the one being edited, the edit
    /// is cancelled.
    pub fn remove(&mut self, list: &mut Vec<ListItem<T>>, index: usize) -> Result<ListItem<T>> {
        let removed = remove(list, index)?;
        if self.editing == Some(removed.id) {
            self.reset();
        }
        Ok(removed)
    }

    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.draft = T::default();
        self.editing = None;
    }
}
