mod show;
mod tui;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use lifetrack_core::config::{get_config_path, load_config};
use lifetrack_core::editor::start_edit;
use lifetrack_core::logging::init_logging;
use lifetrack_core::time::{format_date_key, parse_date_key};
use lifetrack_core::{
    overlay_form, parse_form, today, Action, CalendarPicker, Config, DayService, ExerciseEntry,
    FileStoreRepository, ListActions, ListEntry, ListItem, MemoryStoreRepository, MonthView,
    NutritionEntry, StoreRepository, StudySession,
};
use log::warn;

#[derive(Parser)]
#[command(name = "lifetrack")]
#[command(about = "Track exercise, nutrition, water, smoking and study by day", long_about = None)]
struct Cli {
    /// Day to work on (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true)]
    date: Option<String>,
    /// Keep data in the data directory even if the config says not to.
    #[arg(long, global = true)]
    persist: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the Terminal User Interface
    Tui,
    /// Print everything logged for a day
    Show,
    /// Print a month grid with marked days
    Calendar {
        /// Month number, 1-12
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Exercise entries (fields: name kg sets reps region)
    Exercise {
        #[command(subcommand)]
        command: ListCommand,
    },
    /// Study sessions (fields: subject slides hours)
    Study {
        #[command(subcommand)]
        command: ListCommand,
    },
    /// Overwrite the day's nutrition (usage: nutrition cal:2000 carbs:250 fat:70 protein:140)
    Nutrition {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Set the day's water intake in liters
    Water { liters: String },
    /// Set the day's cigarette count
    Cigarettes { count: String },
}

impl Commands {
    /// Commands that write to the store.
    fn mutates(&self) -> bool {
        matches!(
            self,
            Commands::Exercise { .. }
                | Commands::Study { .. }
                | Commands::Nutrition { .. }
                | Commands::Water { .. }
                | Commands::Cigarettes { .. }
        )
    }
}

#[derive(Subcommand)]
enum ListCommand {
    /// Add an entry (usage: add Bench press kg:60 sets:4 reps:8 region:Chest)
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Replace fields of the entry at a 1-based position
    Edit {
        index: usize,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Remove the entry at a 1-based position
    Rm { index: usize },
}

fn load_app_config() -> Config {
    match get_config_path().and_then(|path| load_config(&path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}. Using default settings.", e);
            Config::default()
        }
    }
}

fn open_repository(config: &Config, persist: bool) -> Result<Box<dyn StoreRepository>> {
    if persist {
        let dir = config.resolved_data_dir()?;
        Ok(Box::new(FileStoreRepository::new(Some(dir))?))
    } else {
        Ok(Box::new(MemoryStoreRepository::new()))
    }
}

/// A one-shot write to the in-memory store would be lost on exit, so writes
/// need the file repository.
fn check_persistence(command: Option<&Commands>, persist: bool) -> Result<()> {
    match command {
        Some(command) if command.mutates() && !persist => {
            warn!("event=cli_mutation_rejected reason=not_persistent");
            bail!("This command changes data, which is only kept with --persist or `persist = true` in the config")
        }
        _ => Ok(()),
    }
}

fn resolve_date(date: Option<&str>) -> Result<String> {
    match date {
        Some(d) => Ok(format_date_key(parse_date_key(d)?)),
        None => Ok(today()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_app_config();
    let persist = cli.persist || config.persist;

    match config.log_dir() {
        Ok(dir) => {
            if let Err(e) = init_logging(&config.log_level, &dir) {
                eprintln!("Warning: logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    check_persistence(cli.command.as_ref(), persist)?;
    let date = resolve_date(cli.date.as_deref())?;
    let mut service = DayService::new(open_repository(&config, persist)?)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            tui::run(service, date, config.locale)?;
        }
        Some(Commands::Show) => {
            show::show_day(&date, &service.day(&date), config.locale);
        }
        Some(Commands::Calendar { month, year }) => {
            let mut picker = CalendarPicker::for_date(&date);
            if let Some(m) = month {
                if !(1..=12).contains(&m) {
                    bail!("Month must be between 1 and 12, got {}", m);
                }
                picker.visible_month = m - 1;
            }
            if let Some(y) = year {
                picker.visible_year = y;
            }
            let view = MonthView::build(&picker, service.store(), &date, config.locale);
            show::show_month(&view);
        }
        Some(Commands::Exercise { command }) => {
            run_list_command::<ExerciseEntry>(&mut service, &date, command)?;
        }
        Some(Commands::Study { command }) => {
            run_list_command::<StudySession>(&mut service, &date, command)?;
        }
        Some(Commands::Nutrition { args }) => {
            let nutrition: NutritionEntry = parse_form(&args)?;
            service.dispatch(Action::SaveNutrition { date: date.clone(), nutrition })?;
            println!("Nutrition saved for {}.", date);
        }
        Some(Commands::Water { liters }) => {
            service.dispatch(Action::SaveWater { date: date.clone(), liters })?;
            println!("Water saved for {}.", date);
        }
        Some(Commands::Cigarettes { count }) => {
            service.dispatch(Action::SaveCigarettes { date: date.clone(), count })?;
            println!("Cigarette count saved for {}.", date);
        }
    }
    Ok(())
}

/// Shared add/edit/rm handling for the two list categories.
fn run_list_command<T>(
    service: &mut DayService<Box<dyn StoreRepository>>,
    date: &str,
    command: ListCommand,
) -> Result<()>
where
    T: ListActions,
{
    let record = service.day(date);
    let list = T::list(&record);

    match command {
        ListCommand::Add { args } => {
            let entry: T = parse_form(&args)?;
            service.dispatch(T::add_action(date, entry))?;
            println!("Added {} for {}.", T::CATEGORY, date);
        }
        ListCommand::Edit { index, args } => {
            let (position, entry) = edited_entry(list, index, &args)?;
            let id = list[position].id;
            service.dispatch(T::edit_action(date, id, entry))?;
            println!("Updated {} #{} for {}.", T::CATEGORY, index, date);
        }
        ListCommand::Rm { index } => {
            let position = to_position(index, list.len())?;
            let id = list[position].id;
            service.dispatch(T::delete_action(date, id))?;
            println!("Removed {} #{} for {}.", T::CATEGORY, index, date);
        }
    }
    Ok(())
}

/// The entry at 1-based `index` with the fields given in `args` replaced.
fn edited_entry<T: ListEntry>(list: &[ListItem<T>], index: usize, args: &[String]) -> Result<(usize, T)> {
    let position = to_position(index, list.len())?;
    let mut entry = start_edit(list, position)
        .ok_or_else(|| anyhow!("No {} at position {}", T::CATEGORY, index))?;
    let changes: T = parse_form(args)?;
    overlay_form(&mut entry, &changes);
    Ok((position, entry))
}

fn to_position(index: usize, len: usize) -> Result<usize> {
    if index == 0 || index > len {
        bail!("Position {} is out of range (1-{})", index, len);
    }
    Ok(index - 1)
}
