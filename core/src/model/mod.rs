pub mod day_record;
pub mod entry;
pub mod exercise;
pub mod nutrition;
pub mod study;

pub use day_record::DayRecord;
pub use entry::{FormFields, ListEntry, ListItem};
pub use exercise::ExerciseEntry;
pub use nutrition::{Hydration, NutritionEntry};
pub use study::StudySession;
