use serde::{Deserialize, Serialize};

use crate::model::entry::{FormFields, ListEntry, ListItem};
use crate::model::DayRecord;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct StudySession {
    pub subject: String,
    pub slides_studied: String,
    pub hours_spent: String,
}

impl StudySession {
    pub fn new(
        subject: impl Into<String>,
        slides_studied: impl Into<String>,
        hours_spent: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            slides_studied: slides_studied.into(),
            hours_spent: hours_spent.into(),
        }
    }

    pub fn summary(&self) -> String {
        format!("{} slides • {} hours", self.slides_studied, self.hours_spent)
    }
}

impl FormFields for StudySession {
    const CATEGORY: &'static str = "study";
    const KEYS: &'static [&'static str] = &["subject", "slides", "hours"];
    const LABELS: &'static [&'static str] = &["Subject", "Slides studied", "Hours spent"];

    fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.subject),
            1 => Some(&self.slides_studied),
            2 => Some(&self.hours_spent),
            _ => None,
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.subject),
            1 => Some(&mut self.slides_studied),
            2 => Some(&mut self.hours_spent),
            _ => None,
        }
    }
}

impl ListEntry for StudySession {
    fn list(record: &DayRecord) -> &[ListItem<Self>] {
        &record.study
    }

    fn list_mut(record: &mut DayRecord) -> &mut Vec<ListItem<Self>> {
        &mut record.study
    }
}
