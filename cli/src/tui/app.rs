use chrono::Datelike;
use lifetrack_core::time::parse_or_today;
use lifetrack_core::{
    add_days, today, Action, CalendarPicker, DayRecord, DayService, ExerciseEntry, FormFields,
    Hydration, ListEditor, ListEntry, Locale, MonthView, NutritionEntry,
    StoreRepository, StudySession, Submitted,
};
use log::debug;
use ratatui::widgets::TableState;

type Service = DayService<Box<dyn StoreRepository>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Exercise,
    Nutrition,
    Hydration,
    Study,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Exercise, Tab::Nutrition, Tab::Hydration, Tab::Study];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Exercise => "Exercise",
            Tab::Nutrition => "Nutrition",
            Tab::Hydration => "Water & Smoking",
            Tab::Study => "Study",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    pub fn has_list(self) -> bool {
        matches!(self, Tab::Exercise | Tab::Study)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
    Calendar,
}

pub struct App {
    pub service: Service,
    pub locale: Locale,
    pub selected_date: String,
    pub tab: Tab,
    pub input_mode: InputMode,
    pub exercise_editor: ListEditor<ExerciseEntry>,
    pub study_editor: ListEditor<StudySession>,
    pub nutrition_form: NutritionEntry,
    pub hydration_form: Hydration,
    pub focused_field: usize,
    pub cursor_position: usize,
    pub list_state: TableState,
    pub picker: CalendarPicker,
    pub calendar_day: u32,
    pub status: Option<String>,
}

impl App {
    pub fn new(service: Service, date: String, locale: Locale) -> App {
        let picker = CalendarPicker::for_date(&date);
        let mut app = App {
            service,
            locale,
            selected_date: date,
            tab: Tab::Exercise,
            input_mode: InputMode::Normal,
            exercise_editor: ListEditor::new(),
            study_editor: ListEditor::new(),
            nutrition_form: NutritionEntry::default(),
            hydration_form: Hydration::default(),
            focused_field: 0,
            cursor_position: 0,
            list_state: TableState::default(),
            picker,
            calendar_day: 1,
            status: None,
        };
        app.load_day_forms();
        app
    }

    pub fn record(&self) -> DayRecord {
        self.service.day(&self.selected_date)
    }

    pub fn list_len(&self) -> usize {
        let record = self.record();
        match self.tab {
            Tab::Exercise => record.exercises.len(),
            Tab::Study => record.study.len(),
            Tab::Nutrition | Tab::Hydration => 0,
        }
    }

    pub fn month_view(&self) -> MonthView {
        MonthView::build(&self.picker, self.service.store(), &self.selected_date, self.locale)
    }

    // --- Date navigation ---

    pub fn previous_day(&mut self) {
        self.set_date(add_days(&self.selected_date, -1));
    }

    pub fn next_day(&mut self) {
        self.set_date(add_days(&self.selected_date, 1));
    }

    pub fn go_today(&mut self) {
        self.set_date(today());
    }

    /// Switching days drops pending list edits and reloads the singleton
    /// forms from the new day's record.
    fn set_date(&mut self, date: String) {
        if date == self.selected_date {
            return;
        }
        debug!("event=date_change from={} to={}", self.selected_date, date);
        self.selected_date = date;
        self.exercise_editor.cancel_edit();
        self.study_editor.cancel_edit();
        self.load_day_forms();
        self.clamp_selection();
    }

    fn load_day_forms(&mut self) {
        let record = self.record();
        self.nutrition_form = record.nutrition.clone();
        self.hydration_form = record.hydration();
    }

    // --- Tabs & list selection ---

    pub fn next_tab(&mut self) {
        self.switch_tab(self.tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.switch_tab(self.tab.previous());
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.focused_field = 0;
        self.cursor_position = 0;
        self.list_state.select(None);
        self.clamp_selection();
    }

    pub fn next(&mut self) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn clamp_selection(&mut self) {
        let len = self.list_len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    // --- Form editing ---

    pub fn field_count(&self) -> usize {
        match self.tab {
            Tab::Exercise => ExerciseEntry::field_count(),
            Tab::Nutrition => NutritionEntry::field_count(),
            Tab::Hydration => Hydration::field_count(),
            Tab::Study => StudySession::field_count(),
        }
    }

    pub fn field_labels(&self) -> &'static [&'static str] {
        match self.tab {
            Tab::Exercise => ExerciseEntry::LABELS,
            Tab::Nutrition => NutritionEntry::LABELS,
            Tab::Hydration => Hydration::LABELS,
            Tab::Study => StudySession::LABELS,
        }
    }

    pub fn field_value(&self, index: usize) -> &str {
        let value = match self.tab {
            Tab::Exercise => self.exercise_editor.draft.field(index),
            Tab::Nutrition => self.nutrition_form.field(index),
            Tab::Hydration => self.hydration_form.field(index),
            Tab::Study => self.study_editor.draft.field(index),
        };
        value.unwrap_or("")
    }

    fn focused_field_mut(&mut self) -> Option<&mut String> {
        let i = self.focused_field;
        match self.tab {
            Tab::Exercise => self.exercise_editor.draft.field_mut(i),
            Tab::Nutrition => self.nutrition_form.field_mut(i),
            Tab::Hydration => self.hydration_form.field_mut(i),
            Tab::Study => self.study_editor.draft.field_mut(i),
        }
    }

    pub fn is_editing_entry(&self) -> bool {
        match self.tab {
            Tab::Exercise => self.exercise_editor.is_editing(),
            Tab::Study => self.study_editor.is_editing(),
            Tab::Nutrition | Tab::Hydration => false,
        }
    }

    pub fn enter_edit_mode(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.field_value(self.focused_field).chars().count();
    }

    /// Loads the selected list entry into the form.
    pub fn start_edit_selected(&mut self) {
        let Some(i) = self.list_state.selected() else {
            return;
        };
        let record = self.record();
        let started = match self.tab {
            Tab::Exercise => self.exercise_editor.start_edit(ExerciseEntry::list(&record), i),
            Tab::Study => self.study_editor.start_edit(StudySession::list(&record), i),
            Tab::Nutrition | Tab::Hydration => false,
        };
        if started {
            self.focused_field = 0;
            self.enter_edit_mode();
        }
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Leaves the form. A pending list edit is cancelled and its draft
    /// cleared.
    pub fn cancel_input(&mut self) {
        match self.tab {
            Tab::Exercise => self.exercise_editor.cancel_edit(),
            Tab::Study => self.study_editor.cancel_edit(),
            Tab::Nutrition | Tab::Hydration => self.load_day_forms(),
        }
        self.focused_field = 0;
        self.exit_input_mode();
    }

    pub fn next_field(&mut self) {
        self.focused_field = (self.focused_field + 1) % self.field_count();
        self.cursor_position = self.field_value(self.focused_field).chars().count();
    }

    pub fn previous_field(&mut self) {
        let count = self.field_count();
        self.focused_field = (self.focused_field + count - 1) % count;
        self.cursor_position = self.field_value(self.focused_field).chars().count();
    }

    pub fn input_char(&mut self, c: char) {
        let cursor = self.cursor_position;
        if let Some(field) = self.focused_field_mut() {
            let byte_index = field.chars().take(cursor).map(|c| c.len_utf8()).sum();
            field.insert(byte_index, c);
            self.cursor_position += 1;
        }
    }

    pub fn delete_char(&mut self) {
        let cursor = self.cursor_position;
        if cursor == 0 {
            return;
        }
        if let Some(field) = self.focused_field_mut() {
            let byte_index: usize = field.chars().take(cursor - 1).map(|c| c.len_utf8()).sum();
            field.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.field_value(self.focused_field).chars().count() {
            self.cursor_position += 1;
        }
    }

    // --- Mutations ---

    pub fn submit(&mut self) {
        let date = self.selected_date.clone();
        let result = match self.tab {
            Tab::Exercise => submit_list(&mut self.service, &date, &mut self.exercise_editor),
            Tab::Study => submit_list(&mut self.service, &date, &mut self.study_editor),
            Tab::Nutrition => self
                .service
                .dispatch(Action::SaveNutrition { date, nutrition: self.nutrition_form.clone() })
                .map(|_| "Nutrition saved".to_string()),
            // Water and cigarettes have separate save actions; Enter saves
            // the focused one.
            Tab::Hydration => {
                let action = if self.focused_field == 0 {
                    Action::SaveWater { date, liters: self.hydration_form.water_liters.clone() }
                } else {
                    Action::SaveCigarettes { date, count: self.hydration_form.cigarette_count.clone() }
                };
                self.service.dispatch(action).map(|_| "Saved".to_string())
            }
        };

        match result {
            Ok(message) => {
                self.status = Some(message);
                if self.tab.has_list() {
                    self.focused_field = 0;
                    self.cursor_position = 0;
                    self.exit_input_mode();
                    self.clamp_selection();
                }
            }
            // Form keeps its values for correction.
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(i) = self.list_state.selected() else {
            return;
        };
        let date = self.selected_date.clone();
        let result = match self.tab {
            Tab::Exercise => remove_from_list(&mut self.service, &date, &mut self.exercise_editor, i),
            Tab::Study => remove_from_list(&mut self.service, &date, &mut self.study_editor, i),
            Tab::Nutrition | Tab::Hydration => return,
        };
        self.status = Some(match result {
            Ok(()) => "Deleted".to_string(),
            Err(err) => err.to_string(),
        });
        self.clamp_selection();
    }

    // --- Calendar ---

    pub fn open_calendar(&mut self) {
        self.picker = CalendarPicker::for_date(&self.selected_date);
        self.calendar_day = parse_or_today(&self.selected_date).day();
        self.input_mode = InputMode::Calendar;
    }

    pub fn calendar_move(&mut self, delta: i64) {
        let days = self.picker.days_in_month() as i64;
        let target = self.calendar_day as i64 + delta;
        if target < 1 {
            self.picker.previous_month();
            self.calendar_day = (self.picker.days_in_month() as i64 + target).max(1) as u32;
        } else if target > days {
            self.picker.next_month();
            self.calendar_day = ((target - days) as u32).min(self.picker.days_in_month());
        } else {
            self.calendar_day = target as u32;
        }
    }

    pub fn calendar_previous_month(&mut self) {
        self.picker.previous_month();
        self.calendar_day = self.calendar_day.min(self.picker.days_in_month());
    }

    pub fn calendar_next_month(&mut self) {
        self.picker.next_month();
        self.calendar_day = self.calendar_day.min(self.picker.days_in_month());
    }

    pub fn calendar_select(&mut self) {
        if let Some(key) = self.picker.select(self.calendar_day) {
            self.set_date(key);
        }
        self.input_mode = InputMode::Normal;
    }

    pub fn close_calendar(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}

/// Submits the editor's draft. If the day cannot be written the editor is
/// put back as it was, so the form still shows what was typed.
fn submit_list<T: ListEntry>(
    service: &mut Service,
    date: &str,
    editor: &mut ListEditor<T>,
) -> anyhow::Result<String> {
    let before = editor.clone();
    match service.update_day(date, |r| editor.submit(T::list_mut(r))) {
        Ok(Submitted::Added(_)) => Ok("Added".to_string()),
        Ok(Submitted::Updated(_)) => Ok("Updated".to_string()),
        Err(err) => {
            *editor = before;
            Err(err)
        }
    }
}

fn remove_from_list<T: ListEntry>(
    service: &mut Service,
    date: &str,
    editor: &mut ListEditor<T>,
    index: usize,
) -> anyhow::Result<()> {
    let before = editor.clone();
    service
        .update_day(date, |r| editor.remove(T::list_mut(r), index))
        .map(|_| ())
        .map_err(|err| {
            *editor = before;
            err
        })
}
