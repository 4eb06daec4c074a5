use log::{debug, info};
use uuid::Uuid;

use crate::editor;
use crate::error::Result;
use crate::model::{ExerciseEntry, ListEntry, NutritionEntry, StudySession};
use crate::store::Store;
use crate::time::check_date_key;

/// A single change to the store. Every variant names the day it targets;
/// list edits and deletes address entries by id.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddExercise { date: String, entry: ExerciseEntry },
    EditExercise { date: String, id: Uuid, entry: ExerciseEntry },
    DeleteExercise { date: String, id: Uuid },
    AddStudy { date: String, entry: StudySession },
    EditStudy { date: String, id: Uuid, entry: StudySession },
    DeleteStudy { date: String, id: Uuid },
    SaveNutrition { date: String, nutrition: NutritionEntry },
    SaveWater { date: String, liters: String },
    SaveCigarettes { date: String, count: String },
}

impl Action {
    pub fn date(&self) -> &str {
        match self {
            Action::AddExercise { date, .. }
            | Action::EditExercise { date, .. }
            | Action::DeleteExercise { date, .. }
            | Action::AddStudy { date, .. }
            | Action::EditStudy { date, .. }
            | Action::DeleteStudy { date, .. }
            | Action::SaveNutrition { date, .. }
            | Action::SaveWater { date, .. }
            | Action::SaveCigarettes { date, .. } => date,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::AddExercise { .. } => "add_exercise",
            Action::EditExercise { .. } => "edit_exercise",
            Action::DeleteExercise { .. } => "delete_exercise",
            Action::AddStudy { .. } => "add_study",
            Action::EditStudy { .. } => "edit_study",
            Action::DeleteStudy { .. } => "delete_study",
            Action::SaveNutrition { .. } => "save_nutrition",
            Action::SaveWater { .. } => "save_water",
            Action::SaveCigarettes { .. } => "save_cigarettes",
        }
    }
}

/// Builds the list actions for an entry type, so callers can stay generic
/// over exercise and study.
pub trait ListActions: ListEntry {
    fn add_action(date: &str, entry: Self) -> Action;
    fn edit_action(date: &str, id: Uuid, entry: Self) -> Action;
    fn delete_action(date: &str, id: Uuid) -> Action;
}

impl ListActions for ExerciseEntry {
    fn add_action(date: &str, entry: Self) -> Action {
        Action::AddExercise { date: date.to_string(), entry }
    }

    fn edit_action(date: &str, id: Uuid, entry: Self) -> Action {
        Action::EditExercise { date: date.to_string(), id, entry }
    }

    fn delete_action(date: &str, id: Uuid) -> Action {
        Action::DeleteExercise { date: date.to_string(), id }
    }
}

impl ListActions for StudySession {
    fn add_action(date: &str, entry: Self) -> Action {
        Action::AddStudy { date: date.to_string(), entry }
    }

    fn edit_action(date: &str, id: Uuid, entry: Self) -> Action {
        Action::EditStudy { date: date.to_string(), id, entry }
    }

    fn delete_action(date: &str, id: Uuid) -> Action {
        Action::DeleteStudy { date: date.to_string(), id }
    }
}

/// Result of a successful `reduce`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Added(Uuid),
    Updated(Uuid),
    Removed(Uuid),
    Saved,
}

/// Applies `action` to `store`. On error the store is left exactly as it
/// was. The action's date must be a canonical `YYYY-MM-DD` key.
pub fn reduce(store: &mut Store, action: Action) -> Result<Applied> {
    let name = action.name();
    if let Err(err) = check_date_key(action.date()) {
        info!("event=reduce action={} status=rejected reason={:?}", name, err.to_string());
        return Err(err);
    }
    let outcome = match action {
        Action::AddExercise { date, entry } => add_entry(store, &date, entry),
        Action::EditExercise { date, id, entry } => edit_entry(store, &date, id, entry),
        Action::DeleteExercise { date, id } => delete_entry::<ExerciseEntry>(store, &date, id),
        Action::AddStudy { date, entry } => add_entry(store, &date, entry),
        Action::EditStudy { date, id, entry } => edit_entry(store, &date, id, entry),
        Action::DeleteStudy { date, id } => delete_entry::<StudySession>(store, &date, id),
        Action::SaveNutrition { date, nutrition } => store.with_day_record(&date, |record| {
            editor::save_nutrition(record, nutrition);
            Ok(Applied::Saved)
        }),
        Action::SaveWater { date, liters } => store.with_day_record(&date, |record| {
            editor::save_water(record, liters);
            Ok(Applied::Saved)
        }),
        Action::SaveCigarettes { date, count } => store.with_day_record(&date, |record| {
            editor::save_cigarettes(record, count);
            Ok(Applied::Saved)
        }),
    };

    match &outcome {
        Ok(applied) => debug!("event=reduce action={} status=ok result={:?}", name, applied),
        Err(err) => info!("event=reduce action={} status=rejected reason={:?}", name, err.to_string()),
    }
    outcome
}

fn add_entry<T: ListEntry>(store: &mut Store, date: &str, entry: T) -> Result<Applied> {
    store.with_day_record(date, |record| {
        editor::add(T::list_mut(record), entry).map(Applied::Added)
    })
}

fn edit_entry<T: ListEntry>(store: &mut Store, date: &str, id: Uuid, entry: T) -> Result<Applied> {
    store.with_day_record(date, |record| {
        editor::commit_edit_by_id(T::list_mut(record), id, entry)?;
        Ok(Applied::Updated(id))
    })
}

fn delete_entry<T: ListEntry>(store: &mut Store, date: &str, id: Uuid) -> Result<Applied> {
    store.with_day_record(date, |record| {
        editor::remove_by_id(T::list_mut(record), id)?;
        Ok(Applied::Removed(id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeTrackError;

    const DAY: &str = "2024-06-10";

    fn squat() -> ExerciseEntry {
        ExerciseEntry::new("Squat", "90", "5", "5", "Legs")
    }

    #[test]
    fn test_add_edit_delete_exercise() {
        let mut store = Store::new();
        let id = match reduce(&mut store, Action::AddExercise { date: DAY.into(), entry: squat() }) {
            Ok(Applied::Added(id)) => id,
            other => panic!("unexpected {:?}", other),
        };

        let lighter = ExerciseEntry::new("Squat", "80", "5", "5", "Legs");
        reduce(&mut store, Action::EditExercise { date: DAY.into(), id, entry: lighter.clone() }).unwrap();
        let values: Vec<_> = store.get(DAY).exercise_values().cloned().collect();
        assert_eq!(values, vec![lighter]);

        reduce(&mut store, Action::DeleteExercise { date: DAY.into(), id }).unwrap();
        assert!(store.get(DAY).exercises.is_empty());
    }

    #[test]
    fn test_rejected_add_leaves_store_untouched() {
        let mut store = Store::new();
        let mut entry = squat();
        entry.muscle_group.clear();
        let err = reduce(&mut store, Action::AddExercise { date: DAY.into(), entry }).unwrap_err();
        assert!(matches!(err, LifeTrackError::MissingFields { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let mut store = Store::new();
        let id = Uuid::new_v4();
        assert_eq!(
            reduce(&mut store, Action::DeleteStudy { date: DAY.into(), id }),
            Err(LifeTrackError::EntryNotFound(id))
        );
        assert!(store.record(DAY).is_none());
    }

    #[test]
    fn test_singleton_saves() {
        let mut store = Store::new();
        let nutrition = NutritionEntry::new("1800", "200", "60", "120");
        reduce(&mut store, Action::SaveNutrition { date: DAY.into(), nutrition: nutrition.clone() }).unwrap();
        let once = store.clone();
        reduce(&mut store, Action::SaveNutrition { date: DAY.into(), nutrition: nutrition.clone() }).unwrap();
        assert_eq!(store, once);
        assert_eq!(store.get(DAY).nutrition, nutrition);
        assert!(!store.day_has_data(DAY));

        reduce(&mut store, Action::SaveWater { date: DAY.into(), liters: "3".into() }).unwrap();
        reduce(&mut store, Action::SaveCigarettes { date: DAY.into(), count: "2".into() }).unwrap();
        let record = store.get(DAY);
        assert_eq!(record.water_liters, "3");
        assert_eq!(record.cigarette_count, "2");
        assert!(store.day_has_data(DAY));
    }

    #[test]
    fn test_non_canonical_date_is_rejected() {
        let mut store = Store::new();
        assert_eq!(
            reduce(&mut store, Action::SaveWater { date: "2024-1-5".into(), liters: "2".into() }),
            Err(LifeTrackError::InvalidDateKey("2024-1-5".into()))
        );
        assert!(reduce(&mut store, Action::AddExercise { date: "someday".into(), entry: squat() }).is_err());
        assert!(store.is_empty());

        reduce(&mut store, Action::SaveWater { date: "2024-01-05".into(), liters: "2".into() }).unwrap();
        assert_eq!(store.dates().collect::<Vec<_>>(), vec!["2024-01-05"]);
        assert!(store.day_has_data("2024-01-05"));
    }

    #[test]
    fn test_study_actions_touch_only_study_list() {
        let mut store = Store::new();
        reduce(&mut store, Action::AddExercise { date: DAY.into(), entry: squat() }).unwrap();
        reduce(
            &mut store,
            Action::AddStudy { date: DAY.into(), entry: StudySession::new("History", "30", "1.5") },
        )
        .unwrap();
        let record = store.get(DAY);
        assert_eq!(record.exercises.len(), 1);
        assert_eq!(record.study.len(), 1);
        assert_eq!(record.study[0].value.subject, "History");
    }
}
