pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lifetrack_core::{DayService, Locale, StoreRepository};
use log::{error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::tui::app::{App, InputMode, Tab};

pub fn run(service: DayService<Box<dyn StoreRepository>>, date: String, locale: Locale) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("event=tui_start date={}", date);
    let mut app = App::new(service, date, locale);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("event=tui_exit status=error error={}", err);
        println!("{:?}", err);
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(app, key) {
                return Ok(());
            }
        }
    }
}

/// Returns true when the app should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    app.status = None;
    match app.input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Tab => app.next_tab(),
            KeyCode::BackTab => app.previous_tab(),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                app.switch_tab(Tab::ALL[index]);
            }
            KeyCode::Left | KeyCode::Char('h') => app.previous_day(),
            KeyCode::Right | KeyCode::Char('l') => app.next_day(),
            KeyCode::Char('t') => app.go_today(),
            KeyCode::Char('c') => app.open_calendar(),
            KeyCode::Down | KeyCode::Char('j') => app.next(),
            KeyCode::Up | KeyCode::Char('k') => app.previous(),
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Enter => app.enter_edit_mode(),
            KeyCode::Char('e') => app.start_edit_selected(),
            KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
            KeyCode::Esc => app.cancel_input(),
            _ => {}
        },
        InputMode::Editing => match key.code {
            KeyCode::Enter => app.submit(),
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Tab | KeyCode::Down => app.next_field(),
            KeyCode::BackTab | KeyCode::Up => app.previous_field(),
            KeyCode::Char(c) => app.input_char(c),
            KeyCode::Backspace => app.delete_char(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            _ => {}
        },
        InputMode::Calendar => match key.code {
            KeyCode::Left | KeyCode::Char('h') => app.calendar_move(-1),
            KeyCode::Right | KeyCode::Char('l') => app.calendar_move(1),
            KeyCode::Up | KeyCode::Char('k') => app.calendar_move(-7),
            KeyCode::Down | KeyCode::Char('j') => app.calendar_move(7),
            KeyCode::Char('[') | KeyCode::Char('p') => app.calendar_previous_month(),
            KeyCode::Char(']') | KeyCode::Char('n') => app.calendar_next_month(),
            KeyCode::Enter => app.calendar_select(),
            KeyCode::Esc | KeyCode::Char('q') => app.close_calendar(),
            _ => {}
        },
    }
    false
}
