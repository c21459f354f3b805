use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use lectio_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lectio")]
#[command(about = "Deterministic Bible reading plan scheduler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a plan and save it (replaces any existing plan with --force)
    Create {
        /// Plan name
        #[arg(long)]
        name: String,

        /// Scope: full, old, new, or custom
        #[arg(long, default_value = "full")]
        scope: String,

        /// Books for a custom scope (comma-separated names or abbreviations)
        #[arg(long, value_delimiter = ',')]
        books: Vec<String>,

        /// Chapters per reading day
        #[arg(long)]
        chapters_per_day: Option<u32>,

        /// Reading weekdays as 0-6 indices, 0 = Sunday (e.g. 1,2,3,4,5)
        #[arg(long, value_delimiter = ',')]
        days: Option<Vec<u8>>,

        /// Start date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Overwrite an existing plan
        #[arg(long)]
        force: bool,
    },

    /// Print the schedule
    Show {
        /// Print every entry instead of the two weeks around today
        #[arg(long)]
        all: bool,
    },

    /// Show today's reading, progress and streak (default)
    Today,

    /// Mark a reading day complete (defaults to today's day number)
    Check { day: Option<u32> },

    /// Remove a completion mark
    Uncheck { day: Option<u32> },

    /// Show progress and streak
    Progress,

    /// Export the schedule to CSV
    Export {
        /// Output file path
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    lectio_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());

    match cli.command {
        Some(Commands::Create {
            name,
            scope,
            books,
            chapters_per_day,
            days,
            start,
            force,
        }) => cmd_create(
            data_dir,
            name,
            scope,
            books,
            chapters_per_day,
            days,
            start,
            force,
            &config,
        ),
        Some(Commands::Show { all }) => cmd_show(data_dir, all),
        Some(Commands::Today) | None => cmd_today(data_dir),
        Some(Commands::Check { day }) => cmd_check(data_dir, day, true),
        Some(Commands::Uncheck { day }) => cmd_check(data_dir, day, false),
        Some(Commands::Progress) => cmd_progress(data_dir),
        Some(Commands::Export { output }) => cmd_export(data_dir, output),
    }
}

fn plan_path(data_dir: &Path) -> PathBuf {
    data_dir.join("plan.json")
}

fn completions_path(data_dir: &Path) -> PathBuf {
    data_dir.join("completions.json")
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[allow(clippy::too_many_arguments)]
fn cmd_create(
    data_dir: PathBuf,
    name: String,
    scope: String,
    books: Vec<String>,
    chapters_per_day: Option<u32>,
    days: Option<Vec<u8>>,
    start: Option<NaiveDate>,
    force: bool,
    config: &Config,
) -> Result<()> {
    let catalog = get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let scope = match scope.to_lowercase().as_str() {
        "full" => PlanScope::Full,
        "old" => PlanScope::OldTestament,
        "new" => PlanScope::NewTestament,
        "custom" => PlanScope::Custom { books },
        other => {
            return Err(Error::InvalidScope(format!(
                "unknown scope '{}' (expected full, old, new or custom)",
                other
            )))
        }
    };

    let reading_days = match days {
        Some(indices) => WeekdaySet::from_indices(&indices)?,
        None => config.plan.reading_days,
    };

    let plan_config = PlanConfig {
        scope,
        chapters_per_day: chapters_per_day.unwrap_or(config.plan.chapters_per_day),
        reading_days,
        start_date: start.unwrap_or_else(today),
    };
    plan_config.validate()?;

    let path = plan_path(&data_dir);
    if path.exists() && !force {
        return Err(Error::Plan(format!(
            "a plan already exists at {:?}; pass --force to replace it",
            path
        )));
    }

    let plan = ReadingPlan::new(name, plan_config);

    // Generating up front both sanity-checks the config and gives us the
    // numbers for the summary.
    let schedule = plan.schedule(catalog)?;
    let end = plan.end_date(catalog)?;

    plan.save(&path)?;

    println!("\n✓ Plan '{}' created", plan.name);
    println!("  {}", format::plan_summary(&plan.config, catalog)?);
    println!(
        "  {} → {} ({} reading days)",
        plan.config.start_date,
        end,
        schedule.len()
    );
    Ok(())
}

fn cmd_show(data_dir: PathBuf, all: bool) -> Result<()> {
    let catalog = get_default_catalog();
    let plan = ReadingPlan::load(&plan_path(&data_dir))?;
    let log = CompletionLog::load(&completions_path(&data_dir), plan.id)?;
    let schedule = plan.schedule(catalog)?;

    let current = plan.day_number_on(today());

    // Default view: one reading week behind and one ahead of today
    let (from, to) = if all {
        (1, schedule.len() as u32)
    } else {
        let cursor = current.clamp(1, schedule.len() as u32);
        let window = plan.config.reading_days.len().max(1);
        (
            cursor.saturating_sub(window).max(1),
            (cursor + window).min(schedule.len() as u32),
        )
    };

    println!("\n{} — {}", plan.name, format::plan_summary(&plan.config, catalog)?);
    println!();
    for entry in &schedule[(from as usize - 1)..(to as usize)] {
        let marker = if log.is_complete(entry.day_number) {
            "✓"
        } else if entry.day_number == current {
            "→"
        } else {
            " "
        };
        println!(
            "  {} Day {:>3}  {}  {}",
            marker,
            entry.day_number,
            entry.date,
            format::reading_range(entry)
        );
    }
    if !all && (to as usize) < schedule.len() {
        println!("  … {} more days (use --all)", schedule.len() - to as usize);
    }
    Ok(())
}

fn cmd_today(data_dir: PathBuf) -> Result<()> {
    let catalog = get_default_catalog();
    let plan = ReadingPlan::load(&plan_path(&data_dir))?;
    let log = CompletionLog::load(&completions_path(&data_dir), plan.id)?;
    let schedule = plan.schedule(catalog)?;
    let total = schedule.len() as u32;

    let date = today();
    let current = plan.day_number_on(date);

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", plan.name);
    println!("╰─────────────────────────────────────────╯");

    if current == 0 {
        println!("\n  Plan starts on {}", plan.config.start_date);
        return Ok(());
    }

    if current > total {
        println!(
            "\n  The schedule ended on {} ({} reading days)",
            plan.end_date(catalog)?,
            total
        );
    } else if plan.config.reading_days.contains(date.weekday()) {
        let entry = &schedule[current as usize - 1];
        let status = if log.is_complete(current) { "✓ done" } else { "not yet read" };
        println!("\n  Day {} of {}: {}  ({})", current, total, format::reading_range(entry), status);
    } else {
        let next = (current + 1).min(total);
        println!("\n  Rest day — next reading is day {} of {}", next, total);
    }

    print_progress_lines(total, current, &log);
    Ok(())
}

fn cmd_check(data_dir: PathBuf, day: Option<u32>, mark: bool) -> Result<()> {
    let catalog = get_default_catalog();
    let plan = ReadingPlan::load(&plan_path(&data_dir))?;
    let total = plan.total_reading_days(catalog)?;

    let current = plan.day_number_on(today());
    let day = match day {
        Some(d) => d,
        None => {
            if current == 0 {
                return Err(Error::Plan(format!(
                    "plan hasn't started yet (starts {})",
                    plan.config.start_date
                )));
            }
            current.min(total)
        }
    };

    if day < 1 || day > total {
        return Err(Error::DayOutOfRange(day));
    }

    let log = CompletionLog::update(&completions_path(&data_dir), plan.id, |log| {
        if mark {
            if !log.mark(day) {
                println!("Day {} was already marked complete.", day);
            }
        } else if !log.unmark(day) {
            println!("Day {} wasn't marked complete.", day);
        }
        Ok(())
    })?;

    if mark {
        println!("\n✓ Day {} marked complete", day);
    } else {
        println!("\n✓ Completion mark removed for day {}", day);
    }

    print_progress_lines(total, current.min(total).max(1), &log);
    Ok(())
}

fn cmd_progress(data_dir: PathBuf) -> Result<()> {
    let catalog = get_default_catalog();
    let plan = ReadingPlan::load(&plan_path(&data_dir))?;
    let log = CompletionLog::load(&completions_path(&data_dir), plan.id)?;
    let total = plan.total_reading_days(catalog)?;

    let current = plan.day_number_on(today()).min(total).max(1);

    println!("\n{}", plan.name);
    print_progress_lines(total, current, &log);
    println!("  Longest streak: {} days", longest_streak(&log.days));
    Ok(())
}

fn cmd_export(data_dir: PathBuf, output: PathBuf) -> Result<()> {
    let catalog = get_default_catalog();
    let plan = ReadingPlan::load(&plan_path(&data_dir))?;
    let schedule = plan.schedule(catalog)?;

    let written = write_schedule_csv(&output, &schedule)?;
    println!("✓ Exported {} days to {}", written, output.display());
    Ok(())
}

fn print_progress_lines(total: u32, current: u32, log: &CompletionLog) {
    let snapshot = progress(total, current, &log.days);
    let streak = current_streak(current, &log.days);

    println!();
    println!(
        "  Progress: {}/{} days ({}%)  {}",
        snapshot.completed,
        snapshot.total,
        snapshot.percentage,
        progress_bar(snapshot.percentage)
    );

    let level = streak_level(streak.current_streak);
    if level.level > 0 {
        println!(
            "  Streak: {} days 🔥 ({})",
            streak.current_streak, level.label
        );
    } else {
        println!("  Streak: {} days", streak.current_streak);
    }
}

fn progress_bar(percentage: u8) -> String {
    const WIDTH: usize = 20;
    let filled = (percentage as usize * WIDTH) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled))
}
