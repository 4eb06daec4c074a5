use lifetrack_core::{display_format_in, DayCell, DayRecord};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Row, Table, Tabs},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, InputMode, Tab};

const LABEL_WIDTH: usize = 18;

fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Date
            Constraint::Length(3), // Tabs
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let marker = if app.service.has_data(&app.selected_date) { " *" } else { "" };
    let header = Paragraph::new(format!(
        "{}{}",
        display_format_in(app.locale, &app.selected_date),
        marker
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(rounded(" LifeTrack "));
    f.render_widget(header, main_chunks[0]);

    let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
        .select(app.tab.index())
        .block(rounded(""))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, main_chunks[1]);

    let record = app.record();
    if app.tab.has_list() {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[2]);
        draw_form(f, app, content_chunks[0]);
        draw_list(f, app, &record, content_chunks[1]);
    } else {
        draw_form(f, app, main_chunks[2]);
    }

    let footer_text = match &app.status {
        Some(status) => status.clone(),
        None => help_text(app).to_string(),
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);

    if app.input_mode == InputMode::Calendar {
        draw_calendar(f, app, size);
    }
}

fn help_text(app: &App) -> &'static str {
    match app.input_mode {
        InputMode::Normal if app.tab.has_list() => {
            "h/l: Day | t: Today | c: Calendar | Tab: Section | a: Add | e: Edit | d: Delete | q: Quit"
        }
        InputMode::Normal => "h/l: Day | t: Today | c: Calendar | Tab: Section | a: Edit | q: Quit",
        InputMode::Editing => "Tab/Up/Down: Field | Enter: Save | Esc: Cancel",
        InputMode::Calendar => "Arrows: Move | [/]: Month | Enter: Select | Esc: Close",
    }
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.is_editing_entry() {
        format!(" Edit {} ", app.tab.title())
    } else if app.tab.has_list() {
        format!(" New {} ", app.tab.title())
    } else {
        format!(" {} ", app.tab.title())
    };
    let editing = app.input_mode == InputMode::Editing;

    let lines: Vec<Line> = app
        .field_labels()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let focused = editing && i == app.focused_field;
            let value_style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", label, width = LABEL_WIDTH),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(app.field_value(i).to_string(), value_style),
            ])
        })
        .collect();

    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let form = Paragraph::new(lines).block(rounded(&title).border_style(border_style));
    f.render_widget(form, area);

    if editing {
        let value = app.field_value(app.focused_field);
        let before: String = value.chars().take(app.cursor_position).collect();
        let label_width = LABEL_WIDTH.max(app.field_labels()[app.focused_field].width());
        let x = area.x + 1 + (label_width + before.width()) as u16;
        let y = area.y + 1 + app.focused_field as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), y));
    }
}

fn draw_list(f: &mut Frame, app: &mut App, record: &DayRecord, area: Rect) {
    let (header, widths, rows): (Vec<&str>, Vec<Constraint>, Vec<Row>) = match app.tab {
        Tab::Exercise => (
            vec!["Exercise", "Kg", "Sets", "Reps", "Muscle group"],
            vec![
                Constraint::Min(12),
                Constraint::Length(6),
                Constraint::Length(5),
                Constraint::Length(5),
                Constraint::Length(14),
            ],
            record
                .exercise_values()
                .map(|e| {
                    Row::new(vec![
                        e.name.clone(),
                        e.weight_kg.clone(),
                        e.sets.clone(),
                        e.reps.clone(),
                        e.muscle_group.clone(),
                    ])
                })
                .collect(),
        ),
        Tab::Study => (
            vec!["Subject", "Slides", "Hours"],
            vec![Constraint::Min(12), Constraint::Length(7), Constraint::Length(6)],
            record
                .study_values()
                .map(|s| {
                    Row::new(vec![
                        s.subject.clone(),
                        s.slides_studied.clone(),
                        s.hours_spent.clone(),
                    ])
                })
                .collect(),
        ),
        Tab::Nutrition | Tab::Hydration => return,
    };

    let title = format!(" {} ({}) ", app.tab.title(), rows.len());
    let table = Table::new(rows, widths)
        .header(Row::new(header).style(Style::default().fg(Color::Yellow)))
        .block(rounded(&title))
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.list_state);
}

fn draw_calendar(f: &mut Frame, app: &App, area: Rect) {
    let view = app.month_view();
    let popup = centered_rect(32, (view.weeks.len() + 4) as u16, area);

    let mut lines = vec![Line::from(Span::styled(
        view.weekday_headers.iter().map(|h| format!("{:>4}", h)).collect::<String>(),
        Style::default().fg(Color::Blue),
    ))];
    for week in &view.weeks {
        let spans: Vec<Span> = week
            .iter()
            .map(|cell| match cell {
                Some(cell) => day_span(cell, cell.day == app.calendar_day),
                None => Span::raw("    "),
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let title = format!(" {} ", view.title);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(rounded(&title).border_style(Style::default().fg(Color::Cyan))),
        popup,
    );
}

fn day_span(cell: &DayCell, under_cursor: bool) -> Span<'static> {
    let mark = if cell.has_data { "•" } else { " " };
    let mut style = Style::default();
    if cell.has_data {
        style = style.fg(Color::Green);
    }
    if cell.is_today {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if cell.is_selected {
        style = style.add_modifier(Modifier::BOLD);
    }
    if under_cursor {
        style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }
    Span::styled(format!(" {:>2}{}", cell.day, mark), style)
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
