//! `habitgrid` command-line front end.
//!
//! # Responsibility
//! - Resolve configuration, logging and the database for one invocation.
//! - Map subcommands onto `TrackerService` calls and print plain-text results.

mod render;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use habitgrid_core::db::open_db;
use habitgrid_core::{
    init_logging, local_now, Config, DateKey, MonthCursor, SqliteHabitStore, TrackerService,
};
use log::info;

#[derive(Debug, Parser)]
#[command(name = "habitgrid", version, about = "Track daily habits, streaks and notes")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/habitgrid/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database file, overriding the configured path
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List configured habits
    Habits,
    /// Show streaks and completion rates for a month
    Status {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(long, value_parser = parse_month)]
        month: Option<MonthCursor>,
        /// Reference day for current streaks (defaults to today)
        #[arg(long)]
        as_of: Option<DateKey>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the completion grid for a month
    Grid {
        #[arg(long, value_parser = parse_month)]
        month: Option<MonthCursor>,
    },
    /// Toggle completion of a habit on a day
    Toggle {
        /// Habit id as listed by `habits`
        habit: String,
        /// Day as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<DateKey>,
    },
    /// Manage day notes
    Note {
        #[command(subcommand)]
        action: NoteCommand,
    },
}

#[derive(Debug, Subcommand)]
enum NoteCommand {
    /// Save the note for a day; empty text deletes it
    Set {
        date: DateKey,
        #[arg(num_args = 0.., trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Delete the note for a day
    Delete { date: DateKey },
    /// List notes in a month
    List {
        #[arg(long, value_parser = parse_month)]
        month: Option<MonthCursor>,
    },
}

fn parse_month(raw: &str) -> Result<MonthCursor, String> {
    let (year, month) = raw
        .split_once('-')
        .ok_or_else(|| format!("expected YYYY-MM, got `{raw}`"))?;
    let year: i32 = year
        .parse()
        .map_err(|_| format!("invalid year in `{raw}`"))?;
    let month: u32 = month
        .parse()
        .map_err(|_| format!("invalid month in `{raw}`"))?;
    MonthCursor::new(year, month).map_err(|err| err.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    // Logging failures must not block tracking.
    if let Err(err) = init_logging(&config.log_level(), config.log_dir()) {
        eprintln!("warning: logging disabled: {err}");
    }

    let db_path = cli.db.clone().unwrap_or_else(|| config.database_path());
    info!(
        "event=cli_start module=cli status=ok db_path={}",
        db_path.display()
    );
    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open database `{}`", db_path.display()))?;
    let mut service = TrackerService::open(SqliteHabitStore::new(&conn));

    let now = local_now();
    let today = now.date();

    match cli.command {
        Command::Habits => print!("{}", render::habit_list(service.habits())),
        Command::Status { month, as_of, json } => {
            let month = month.unwrap_or_else(|| MonthCursor::containing(today));
            let reference = as_of.map_or(today, |key| key.date());
            let summary = service.monthly_summary(month, reference);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary).context("failed to encode summary")?
                );
            } else {
                print!("{}", render::summary(month, &summary));
            }
        }
        Command::Grid { month } => {
            let month = month.unwrap_or_else(|| MonthCursor::containing(today));
            print!("{}", render::grid(month, service.data(), now));
        }
        Command::Toggle { habit, date } => {
            let date = date.unwrap_or_else(|| DateKey::new(today));
            let completed = service.toggle_completion(&habit, date, now)?;
            let name = service
                .habit(&habit)
                .map_or(habit.as_str(), |h| h.name.as_str());
            let state = if completed { "done" } else { "not done" };
            println!("{name} on {date}: {state}");
        }
        Command::Note { action } => match action {
            NoteCommand::Set { date, text } => {
                let text = text.join(" ");
                service.save_note(date, &text);
                match service.note_for(date) {
                    Some(_) => println!("saved note for {date}"),
                    None => println!("deleted note for {date}"),
                }
            }
            NoteCommand::Delete { date } => {
                if service.note_for(date).is_none() {
                    bail!("no note for {date}");
                }
                service.delete_note(date);
                println!("deleted note for {date}");
            }
            NoteCommand::List { month } => {
                let month = month.unwrap_or_else(|| MonthCursor::containing(today));
                print!("{}", render::notes(month, &service.notes_in_month(month)));
            }
        },
    }

    Ok(())
}
