use serde::{Deserialize, Serialize};

use crate::model::entry::ListItem;
use crate::model::exercise::ExerciseEntry;
use crate::model::nutrition::{Hydration, NutritionEntry};
use crate::model::study::StudySession;

/// Everything tracked for one calendar day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DayRecord {
    pub exercises: Vec<ListItem<ExerciseEntry>>,
    pub nutrition: NutritionEntry,
    pub water_liters: String,
    pub cigarette_count: String,
    pub study: Vec<ListItem<StudySession>>,
}

impl DayRecord {
    /// Whether the calendar should mark this day. Nutrition alone does not
    /// count.
    pub fn has_any_data(&self) -> bool {
        !self.exercises.is_empty()
            || !self.study.is_empty()
            || !self.water_liters.is_empty()
            || !self.cigarette_count.is_empty()
    }

    pub fn hydration(&self) -> Hydration {
        Hydration {
            water_liters: self.water_liters.clone(),
            cigarette_count: self.cigarette_count.clone(),
        }
    }

    pub fn exercise_values(&self) -> impl Iterator<Item = &ExerciseEntry> {
        self.exercises.iter().map(|item| &item.value)
    }

    pub fn study_values(&self) -> impl Iterator<Item = &StudySession> {
        self.study.iter().map(|item| &item.value)
    }
}
