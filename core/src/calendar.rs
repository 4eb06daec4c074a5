use chrono::{Datelike, NaiveDate};

use crate::store::Store;
use crate::time::{date_key, parse_or_today};

/// Days in a 0-based month. Out-of-range months report 0.
pub fn days_in_month(month0: u32, year: i32) -> u32 {
    if month0 > 11 {
        return 0;
    }
    let Some(first) = NaiveDate::from_ymd_opt(year, month0 + 1, 1) else {
        return 0;
    };
    let next = if month0 == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month0 + 2, 1)
    };
    next.map(|n| (n - first).num_days() as u32).unwrap_or(31)
}

/// Weekday of the 1st (0 = Sunday).
pub fn first_weekday_offset(month0: u32, year: i32) -> u32 {
    if month0 > 11 {
        return 0;
    }
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Month navigation state of the date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarPicker {
    pub visible_month: u32,
    pub visible_year: i32,
}

impl CalendarPicker {
    /// Opens on the month of `selected`. An unparseable key opens on the
    /// current month.
    pub fn for_date(selected: &str) -> Self {
        let date = parse_or_today(selected);
        Self {
            visible_month: date.month0(),
            visible_year: date.year(),
        }
    }

    pub fn previous_month(&mut self) {
        if self.visible_month == 0 {
            self.visible_month = 11;
            self.visible_year -= 1;
        } else {
            self.visible_month -= 1;
        }
    }

    pub fn next_month(&mut self) {
        if self.visible_month == 11 {
            self.visible_month = 0;
            self.visible_year += 1;
        } else {
            self.visible_month += 1;
        }
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.visible_month, self.visible_year)
    }

    pub fn first_weekday_offset(&self) -> u32 {
        first_weekday_offset(self.visible_month, self.visible_year)
    }

    /// Key for `day` of the visible month, if that day exists.
    pub fn key_for(&self, day: u32) -> Option<String> {
        date_key(self.visible_year, self.visible_month, day)
    }

    pub fn day_has_data(&self, store: &Store, day: u32) -> bool {
        self.key_for(day).is_some_and(|key| store.day_has_data(&key))
    }

    /// The key that becomes the active date. Closing the picker is up to
    /// the caller.
    pub fn select(&self, day: u32) -> Option<String> {
        self.key_for(day)
    }

    /// Grid rows, Sunday first. Leading cells before the 1st are `None`, as
    /// are the trailing cells of the last row.
    pub fn weeks(&self) -> Vec<[Option<u32>; 7]> {
        let offset = self.first_weekday_offset() as usize;
        let days = self.days_in_month();
        let mut rows = Vec::new();
        let mut row = [None; 7];
        let mut col = offset;
        for day in 1..=days {
            row[col] = Some(day);
            col += 1;
            if col == 7 {
                rows.push(row);
                row = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            rows.push(row);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeTrackError;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1, 2024), 29);
        assert_eq!(days_in_month(1, 2023), 28);
        assert_eq!(days_in_month(1, 1900), 28);
        assert_eq!(days_in_month(1, 2000), 29);
        assert_eq!(days_in_month(0, 2023), 31);
        assert_eq!(days_in_month(3, 2023), 30);
        assert_eq!(days_in_month(11, 2023), 31);
        assert_eq!(days_in_month(12, 2023), 0);
        assert_eq!(days_in_month(u32::MAX, 2023), 0);
    }

    #[test]
    fn test_first_weekday_offset() {
        // 2024-09-01 was a Sunday, 2024-02-01 a Thursday.
        assert_eq!(first_weekday_offset(8, 2024), 0);
        assert_eq!(first_weekday_offset(1, 2024), 4);
        // 2025-11-01 is a Saturday.
        assert_eq!(first_weekday_offset(10, 2025), 6);
        assert_eq!(first_weekday_offset(u32::MAX, 2025), 0);
    }

    #[test]
    fn test_month_wraparound() {
        let mut picker = CalendarPicker::for_date("2024-01-15");
        assert_eq!((picker.visible_month, picker.visible_year), (0, 2024));
        picker.previous_month();
        assert_eq!((picker.visible_month, picker.visible_year), (11, 2023));
        picker.next_month();
        picker.next_month();
        assert_eq!((picker.visible_month, picker.visible_year), (1, 2024));

        let mut december = CalendarPicker::for_date("2024-12-02");
        december.next_month();
        assert_eq!((december.visible_month, december.visible_year), (0, 2025));
    }

    #[test]
    fn test_weeks_layout() {
        let picker = CalendarPicker::for_date("2024-02-10");
        let weeks = picker.weeks();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0], [None, None, None, None, Some(1), Some(2), Some(3)]);
        assert_eq!(weeks[4][4], Some(29));
        assert_eq!(weeks[4][5], None);
        let count = weeks.iter().flatten().flatten().count();
        assert_eq!(count, 29);
    }

    #[test]
    fn test_day_has_data_uses_padded_key() {
        let mut store = Store::new();
        store
            .with_day_record("2024-03-05", |r| {
                r.water_liters = "2".to_string();
                Ok::<_, LifeTrackError>(())
            })
            .unwrap();
        let picker = CalendarPicker::for_date("2024-03-20");
        assert!(picker.day_has_data(&store, 5));
        assert!(!picker.day_has_data(&store, 6));
        assert_eq!(picker.select(5).as_deref(), Some("2024-03-05"));
        assert_eq!(picker.select(32), None);
    }
}
