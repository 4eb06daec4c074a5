use crate::calendar::CalendarPicker;
use crate::store::Store;
use crate::time::{today, Locale};

pub const WEEKDAY_HEADERS_TR: [&str; 7] = ["Paz", "Pzt", "Sal", "Çar", "Per", "Cum", "Cmt"];
pub const WEEKDAY_HEADERS_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub key: String,
    pub has_data: bool,
    pub is_selected: bool,
    pub is_today: bool,
}

/// Renderable month grid: picker position joined with store contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub title: String,
    pub weekday_headers: [&'static str; 7],
    pub weeks: Vec<[Option<DayCell>; 7]>,
}

impl MonthView {
    pub fn build(picker: &CalendarPicker, store: &Store, selected: &str, locale: Locale) -> Self {
        let month = locale.month_names()[picker.visible_month as usize % 12];
        let today = today();
        let weeks = picker
            .weeks()
            .into_iter()
            .map(|row| {
                row.map(|slot| {
                    slot.and_then(|day| {
                        picker.key_for(day).map(|key| DayCell {
                            day,
                            has_data: store.day_has_data(&key),
                            is_selected: key == selected,
                            is_today: key == today,
                            key,
                        })
                    })
                })
            })
            .collect();

        Self {
            title: format!("{} {}", month, picker.visible_year),
            weekday_headers: match locale {
                Locale::Turkish => WEEKDAY_HEADERS_TR,
                Locale::English => WEEKDAY_HEADERS_EN,
            },
            weeks,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{reduce, Action};
    use crate::model::StudySession;

    #[test]
    fn test_build_marks_data_and_selection() {
        let mut store = Store::new();
        reduce(
            &mut store,
            Action::AddStudy {
                date: "2024-05-17".into(),
                entry: StudySession::new("Statistics", "20", "1"),
            },
        )
        .unwrap();

        let picker = CalendarPicker::for_date("2024-05-03");
        let view = MonthView::build(&picker, &store, "2024-05-03", Locale::Turkish);

        assert_eq!(view.title, "Mayıs 2024");
        assert_eq!(view.weekday_headers[0], "Paz");
        assert_eq!(view.cells().count(), 31);
        // 2024-05-01 was a Wednesday.
        assert_eq!(view.weeks[0][3].as_ref().map(|c| c.day), Some(1));

        let marked: Vec<u32> = view.cells().filter(|c| c.has_data).map(|c| c.day).collect();
        assert_eq!(marked, vec![17]);
        let selected: Vec<&str> = view.cells().filter(|c| c.is_selected).map(|c| c.key.as_str()).collect();
        assert_eq!(selected, vec!["2024-05-03"]);
    }

    #[test]
    fn test_english_title() {
        let picker = CalendarPicker::for_date("2023-10-09");
        let view = MonthView::build(&picker, &Store::new(), "2023-10-09", Locale::English);
        assert_eq!(view.title, "October 2023");
        assert!(view.cells().all(|c| !c.has_data));
    }
}
