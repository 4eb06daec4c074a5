use thiserror::Error;
use uuid::Uuid;

/// Recoverable domain errors. None of these should end the session; the
/// caller keeps its form state and shows the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeTrackError {
    #[error("{category}: required field(s) empty: {}", .fields.join(", "))]
    MissingFields {
        category: &'static str,
        fields: Vec<&'static str>,
    },
    #[error("Index {index} is out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Entry {0} not found for this day")]
    EntryNotFound(Uuid),
    #[error("Month index {0} is out of range (expected 0-11)")]
    MonthOutOfRange(usize),
    #[error("Invalid date key '{0}' (expected YYYY-MM-DD)")]
    InvalidDateKey(String),
}

pub type Result<T> = std::result::Result<T, LifeTrackError>;
