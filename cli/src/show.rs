use lifetrack_core::{display_format_in, DayRecord, Locale, MonthView};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ExerciseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Exercise")]
    name: String,
    #[tabled(rename = "Kg")]
    kg: String,
    #[tabled(rename = "Sets")]
    sets: String,
    #[tabled(rename = "Reps")]
    reps: String,
    #[tabled(rename = "Muscle group")]
    region: String,
}

#[derive(Tabled)]
struct StudyRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Slides")]
    slides: String,
    #[tabled(rename = "Hours")]
    hours: String,
}

fn styled(mut table: Table) -> Table {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

pub fn show_day(date: &str, record: &DayRecord, locale: Locale) {
    println!("\x1b[1;36m{}\x1b[0m ({})", display_format_in(locale, date), date);

    println!("\nExercise");
    if record.exercises.is_empty() {
        println!("  No exercises logged.");
    } else {
        let rows: Vec<ExerciseRow> = record
            .exercise_values()
            .enumerate()
            .map(|(i, e)| ExerciseRow {
                index: i + 1,
                name: e.name.clone(),
                kg: e.weight_kg.clone(),
                sets: e.sets.clone(),
                reps: e.reps.clone(),
                region: e.muscle_group.clone(),
            })
            .collect();
        println!("{}", styled(Table::new(rows)));
    }

    let n = &record.nutrition;
    println!("\nNutrition");
    println!(
        "  Calories: {}  Carbs: {} g  Fat: {} g  Protein: {} g",
        or_dash(&n.calories),
        or_dash(&n.carbs_grams),
        or_dash(&n.fat_grams),
        or_dash(&n.protein_grams)
    );

    println!("\nWater & Smoking");
    println!(
        "  Water: {} L  Cigarettes: {}",
        or_dash(&record.water_liters),
        or_dash(&record.cigarette_count)
    );

    println!("\nStudy");
    if record.study.is_empty() {
        println!("  No study sessions logged.");
    } else {
        let rows: Vec<StudyRow> = record
            .study_values()
            .enumerate()
            .map(|(i, s)| StudyRow {
                index: i + 1,
                subject: s.subject.clone(),
                slides: s.slides_studied.clone(),
                hours: s.hours_spent.clone(),
            })
            .collect();
        println!("{}", styled(Table::new(rows)));
    }
}

/// Plain-text month grid. `*` marks days with data, brackets the selected
/// day.
pub fn show_month(view: &MonthView) {
    println!("\x1b[1;36m{:^28}\x1b[0m", view.title);
    let header: Vec<String> = view.weekday_headers.iter().map(|h| format!("{:>4}", h)).collect();
    println!("{}", header.join(""));

    for week in &view.weeks {
        let mut line = String::new();
        for cell in week {
            match cell {
                Some(cell) => {
                    let mark = if cell.has_data { "*" } else { " " };
                    if cell.is_selected {
                        line.push_str(&format!("[{:>2}]", cell.day));
                    } else {
                        line.push_str(&format!(" {:>2}{}", cell.day, mark));
                    }
                }
                None => line.push_str("    "),
            }
        }
        println!("{}", line.trim_end());
    }
    println!("\n  * = day has entries");
}
