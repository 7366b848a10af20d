mod render;

use clap::{Parser, Subcommand, ValueEnum};
use chrono::Local;
use nova_core::{
    parse_args, parse_date, parse_time, parse_weekday, Activity, CalendarService, Config,
    FileCalendarRepository, ParsedInput, Task,
};
use anyhow::{bail, Result};
use std::path::Path;

#[derive(Parser)]
#[command(name = "nova")]
#[command(about = "A semester calendar for lessons, meetings and deadlines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Meeting,
    Lesson,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an activity (usage: add meeting "Sync" venue:Office date:19/04/2020 start:10:00 end:11:00)
    Add {
        kind: Kind,
        /// Description, then fields (key:value). Words after a field extend its value.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Delete the meeting starting at the given date and time
    Delete { date: String, start: String },
    /// Add a task (usage: task "Report" date:tomorrow time:23:59 notes:draft)
    Task {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Mark the task due at the given date and time as completed
    Complete { date: String, time: String },
    /// Delete the task due at the given date and time
    DeleteTask { date: String, time: String },
    /// Show the activities on a date
    View { date: String },
    /// Show the next upcoming activity
    Next,
    /// Show this week's tasks
    Tasks,
    /// Start a new semester on the given date (discards all data)
    Reset { date: String },
    /// Show the week overview (default)
    Dashboard,
}

const ACTIVITY_KEYS: [&str; 6] = ["venue", "date", "day", "start", "end", "notes"];
const TASK_KEYS: [&str; 3] = ["date", "time", "notes"];

fn description(parsed: &ParsedInput) -> Result<String> {
    if parsed.text.is_empty() {
        bail!("Description is required.");
    }
    Ok(parsed.text.clone())
}

fn build_activity(kind: Kind, args: &[String]) -> Result<Activity> {
    let parsed = parse_args(args).normalize(&ACTIVITY_KEYS)?;
    let description = description(&parsed)?;
    let venue = parsed.required("venue")?;
    let start = parse_time(parsed.required("start")?)?;
    let end = parse_time(parsed.required("end")?)?;
    let notes = parsed.field("notes").unwrap_or_default();

    let activity = match kind {
        Kind::Meeting => {
            let date = parse_date(parsed.required("date")?)?;
            Activity::meeting(description, venue, date, start, end, notes)
        }
        Kind::Lesson => {
            let day = parse_weekday(parsed.required("day")?)?;
            Activity::lesson(description, venue, day, start, end, notes)
        }
    };
    Ok(activity)
}

fn build_task(args: &[String]) -> Result<Task> {
    let parsed = parse_args(args).normalize(&TASK_KEYS)?;
    let description = description(&parsed)?;
    let date = parse_date(parsed.required("date")?)?;
    let time = parse_time(parsed.required("time")?)?;
    let notes = parsed.field("notes").unwrap_or_default();
    Ok(Task::new(description, date, time, notes))
}

fn config_source(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("Loaded config from: {}", path.display()),
        None => "No config file found, using defaults".to_string(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, source) = Config::load()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level)).init();
    log::info!("{}", config_source(source.as_deref()));

    let repo = FileCalendarRepository::new(config.data_dir.clone())?;
    log::debug!("Using calendar file {}", repo.file_path().display());
    let mut service = CalendarService::open(repo, config.semester.clone())?;

    match cli.command {
        Some(Commands::Add { kind, args }) => {
            let activity = build_activity(kind, &args)?;
            service.add_activity(activity)?;
            println!("New activity added");
        }
        Some(Commands::Delete { date, start }) => {
            match service.delete_activity(parse_date(&date)?, parse_time(&start)?)? {
                Some(activity) => print!("Deleted activity:\n{}", activity),
                None => println!("The activity does not exist"),
            }
        }
        Some(Commands::Task { args }) => {
            let task = build_task(&args)?;
            service.add_task(task)?;
            println!("New task added");
        }
        Some(Commands::Complete { date, time }) => {
            match service.complete_task(parse_date(&date)?, parse_time(&time)?)? {
                Some(task) => print!("Completed task:\n{}", task),
                None => println!("The task does not exist"),
            }
        }
        Some(Commands::DeleteTask { date, time }) => {
            match service.delete_task(parse_date(&date)?, parse_time(&time)?)? {
                Some(task) => print!("Deleted task:\n{}", task),
                None => println!("The task does not exist"),
            }
        }
        Some(Commands::View { date }) => {
            let date = parse_date(&date)?;
            let activities = service.view(date)?;
            if activities.is_empty() {
                println!("No activities on {}.", date.format("%d/%m/%Y"));
            } else {
                println!("{}", render::activity_table(&activities));
            }
        }
        Some(Commands::Next) => match service.next_activity(Local::now().naive_local()) {
            Some(activity) => println!("Next up: {}", render::activity_summary(&activity)),
            None => println!("No upcoming activities."),
        },
        Some(Commands::Tasks) => {
            let tasks = service.week_tasks(Local::now().date_naive());
            if tasks.is_empty() {
                println!("No tasks due this week.");
            } else {
                println!("{}", render::task_table(&tasks));
            }
        }
        Some(Commands::Reset { date }) => {
            let start = parse_date(&date)?;
            service.reset(start)?;
            println!(
                "Calendar reset: {} to {}",
                service.calendar().start_date().format("%d/%m/%Y"),
                service.calendar().end_date().format("%d/%m/%Y")
            );
        }
        Some(Commands::Dashboard) | None => {
            render::show_dashboard(&service.dashboard(Local::now().naive_local()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Weekday};

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_meeting() {
        let activity = build_activity(
            Kind::Meeting,
            &args(&["Project", "sync", "v:Office", "date:19/04/2020", "s:10:00", "e:11:00"]),
        )
        .unwrap();
        assert_eq!(activity.description(), "Project sync");
        assert_eq!(activity.venue(), "Office");
        assert_eq!(activity.date(), NaiveDate::from_ymd_opt(2020, 4, 19));
        assert_eq!(activity.end_time(), NaiveTime::from_hms_opt(11, 0, 0).unwrap());
    }

    #[test]
    fn test_build_lesson() {
        let activity = build_activity(
            Kind::Lesson,
            &args(&["CS2103", "venue:COM1", "day:wed", "start:10:00", "end:12:00", "notes:bring laptop"]),
        )
        .unwrap();
        assert!(activity.is_recurring());
        assert_eq!(activity.weekday(), Weekday::Wed);
        assert_eq!(activity.notes(), "bring laptop");
    }

    #[test]
    fn test_multi_word_notes() {
        let task = build_task(&args(&["Report", "date:2020-02-03", "time:23:59", "notes:bring", "my", "laptop"])).unwrap();
        assert_eq!(task.description, "Report");
        assert_eq!(task.note, "bring my laptop");
    }

    #[test]
    fn test_build_activity_missing_fields() {
        assert!(build_activity(Kind::Meeting, &args(&["Sync", "venue:Office", "start:10:00", "end:11:00"])).is_err());
        assert!(build_activity(Kind::Lesson, &args(&["venue:COM1", "day:wed", "start:10:00", "end:12:00"])).is_err());
    }

    #[test]
    fn test_config_source() {
        assert_eq!(
            config_source(Some(Path::new("config.json"))),
            "Loaded config from: config.json"
        );
        assert_eq!(config_source(None), "No config file found, using defaults");
    }

    #[test]
    fn test_build_task() {
        let task = build_task(&args(&["Report", "date:2020-02-03", "time:23:59"])).unwrap();
        assert_eq!(task.description, "Report");
        assert_eq!(task.due_time, NaiveTime::from_hms_opt(23, 59, 0).unwrap());
        assert!(task.note.is_empty());
    }
}
