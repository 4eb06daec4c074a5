pub mod action;
pub mod calendar;
pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod repository;
pub mod service;
pub mod store;
pub mod time;
pub mod usecase;

pub use action::{reduce, Action, Applied, ListActions};
pub use calendar::{days_in_month, first_weekday_offset, CalendarPicker};
pub use config::Config;
pub use editor::{ListEditor, Submitted};
pub use error::LifeTrackError;
pub use input::{expand_key, overlay_form, parse_args, parse_form, ParsedInput};
pub use model::{
    DayRecord, ExerciseEntry, FormFields, Hydration, ListEntry, ListItem, NutritionEntry,
    StudySession,
};
pub use repository::{FileStoreRepository, MemoryStoreRepository, StoreRepository};
pub use service::day_service::DayService;
pub use store::Store;
pub use time::{add_days, display_format, display_format_in, month_name, today, Locale};
pub use usecase::month_view::{DayCell, MonthView};
