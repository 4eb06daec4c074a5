use serde::{Deserialize, Serialize};

use crate::model::entry::{FormFields, ListEntry, ListItem};
use crate::model::DayRecord;

/// One exercise line. Every field is free text; nothing is parsed as a
/// number.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ExerciseEntry {
    pub name: String,
    pub weight_kg: String,
    pub sets: String,
    pub reps: String,
    pub muscle_group: String,
}

impl ExerciseEntry {
    pub fn new(
        name: impl Into<String>,
        weight_kg: impl Into<String>,
        sets: impl Into<String>,
        reps: impl Into<String>,
        muscle_group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            weight_kg: weight_kg.into(),
            sets: sets.into(),
            reps: reps.into(),
            muscle_group: muscle_group.into(),
        }
    }

    pub fn summary(&self) -> String {
        format!("{} kg • {} sets • {} reps", self.weight_kg, self.sets, self.reps)
    }
}

impl FormFields for ExerciseEntry {
    const CATEGORY: &'static str = "exercise";
    const KEYS: &'static [&'static str] = &["name", "kg", "sets", "reps", "region"];
    const LABELS: &'static [&'static str] =
        &["Exercise", "Weight (kg)", "Sets", "Reps", "Muscle group"];

    fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.weight_kg),
            2 => Some(&self.sets),
            3 => Some(&self.reps),
            4 => Some(&self.muscle_group),
            _ => None,
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.weight_kg),
            2 => Some(&mut self.sets),
            3 => Some(&mut self.reps),
            4 => Some(&mut self.muscle_group),
            _ => None,
        }
    }
}

impl ListEntry for ExerciseEntry {
    fn list(record: &DayRecord) -> &[ListItem<Self>] {
        &record.exercises
    }

    fn list_mut(record: &mut DayRecord) -> &mut Vec<ListItem<Self>> {
        &mut record.exercises
    }
}
