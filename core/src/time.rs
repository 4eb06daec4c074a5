use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{LifeTrackError, Result};

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

const TURKISH_MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran",
    "Temmuz", "Ağustos", "Eylül", "Ekim", "Kasım", "Aralık",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Month-name table used by `display_format_in` and the calendar title.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Turkish,
    English,
}

impl Locale {
    pub fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Locale::Turkish => &TURKISH_MONTHS,
            Locale::English => &ENGLISH_MONTHS,
        }
    }

    pub fn month_name(self, month_index: usize) -> Result<&'static str> {
        self.month_names()
            .get(month_index)
            .copied()
            .ok_or(LifeTrackError::MonthOutOfRange(month_index))
    }
}

/// Current local date as `YYYY-MM-DD`.
pub fn today() -> String {
    format_date_key(Local::now().date_naive())
}

pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Builds a zero-padded key from a 0-based month. Returns `None` for dates
/// that do not exist.
pub fn date_key(year: i32, month0: u32, day: u32) -> Option<String> {
    if month0 > 11 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month0 + 1, day).map(format_date_key)
}

/// Strict parse. Only the exact zero-padded form is accepted.
pub fn parse_date_key(key: &str) -> Result<NaiveDate> {
    let trimmed = key.trim();
    // chrono accepts "2024-1-5" for %m/%d; keys must be fixed width.
    if trimmed.len() != 10 {
        return Err(LifeTrackError::InvalidDateKey(key.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_KEY_FORMAT)
        .map_err(|_| LifeTrackError::InvalidDateKey(key.to_string()))
}

/// Parse for keys that are about to be stored: the input must already be in
/// canonical form.
pub fn check_date_key(key: &str) -> Result<NaiveDate> {
    let date = parse_date_key(key)?;
    if format_date_key(date) != key {
        return Err(LifeTrackError::InvalidDateKey(key.to_string()));
    }
    Ok(date)
}

/// Lenient parse: an unparseable key falls back to today's date.
pub fn parse_or_today(key: &str) -> NaiveDate {
    match parse_date_key(key) {
        Ok(date) => date,
        Err(_) => {
            warn!("event=date_parse_fallback module=time input={:?} fallback=today", key);
            Local::now().date_naive()
        }
    }
}

/// Shifts a key by `delta` days. A shift past chrono's date range leaves the
/// date where it was.
pub fn add_days(key: &str, delta: i64) -> String {
    let date = parse_or_today(key);
    match TimeDelta::try_days(delta).and_then(|d| date.checked_add_signed(d)) {
        Some(shifted) => format_date_key(shifted),
        None => {
            warn!("event=add_days_overflow module=time input={:?} delta={}", key, delta);
            format_date_key(date)
        }
    }
}

/// `DD <MonthName> YYYY` using the default (Turkish) month table.
pub fn display_format(key: &str) -> String {
    display_format_in(Locale::default(), key)
}

pub fn display_format_in(locale: Locale, key: &str) -> String {
    let date = parse_or_today(key);
    let month = locale.month_names()[date.month0() as usize];
    format!("{:02} {} {}", date.day(), month, date.year())
}

pub fn month_name(month_index: usize) -> Result<&'static str> {
    Locale::default().month_name(month_index)
}
