use nova_core::{ActivityDto, ActivityKind, Dashboard, TaskDto};
use tabled::{Table, Tabled};
use tabled::settings::{Style, Color, Modify};
use tabled::settings::object::Rows;

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Description")]
    desc: String,
    #[tabled(rename = "Venue")]
    venue: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Description")]
    desc: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

fn or_dash(s: &str) -> String {
    if s.is_empty() { "-".to_string() } else { s.to_string() }
}

fn styled(rows: Table) -> Table {
    let mut table = rows;
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    table
}

pub fn activity_table(activities: &[ActivityDto]) -> String {
    let rows: Vec<ActivityRow> = activities
        .iter()
        .map(|a| ActivityRow {
            time: format!("{} - {}", a.start_time.format("%H:%M"), a.end_time.format("%H:%M")),
            kind: match a.kind {
                ActivityKind::Meeting => "Meeting".to_string(),
                ActivityKind::Lesson => "Lesson".to_string(),
            },
            desc: a.description.clone(),
            venue: a.venue.clone(),
            notes: or_dash(&a.notes),
        })
        .collect();

    styled(Table::new(rows)).to_string()
}

pub fn task_table(tasks: &[TaskDto]) -> String {
    let rows: Vec<TaskRow> = tasks
        .iter()
        .map(|t| TaskRow {
            due: format!("{} {}", t.due_date.format("%d/%m/%Y (%a)"), t.due_time.format("%H:%M")),
            desc: t.description.clone(),
            status: t.status.clone(),
            notes: or_dash(&t.note),
        })
        .collect();

    styled(Table::new(rows)).to_string()
}

pub fn activity_summary(activity: &ActivityDto) -> String {
    let when = match activity.date {
        Some(date) => date.format("%a %d/%m/%Y").to_string(),
        None => format!("every {}", activity.day_of_week),
    };
    format!(
        "{} @ {} ({}, {} - {})",
        activity.description,
        activity.venue,
        when,
        activity.start_time.format("%H:%M"),
        activity.end_time.format("%H:%M")
    )
}

pub fn show_dashboard(dashboard: &Dashboard) {
    println!(
        "\n\x1b[1;36m{}\x1b[0m  Week: {}",
        dashboard.today.format("%A, %d %B %Y"),
        dashboard.week
    );

    match &dashboard.next_activity {
        Some(activity) => println!("Next up: {}", activity_summary(activity)),
        None => println!("No upcoming activities."),
    }

    if dashboard.tasks.is_empty() {
        println!("No tasks due this week.");
    } else {
        println!("{}", task_table(&dashboard.tasks));
    }
    println!(
        "Completed: {} ({})",
        dashboard.completion_fraction, dashboard.completion_percentage
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Weekday};

    fn lesson() -> ActivityDto {
        ActivityDto {
            kind: ActivityKind::Lesson,
            description: "CS2103".to_string(),
            venue: "COM1".to_string(),
            date: None,
            day_of_week: Weekday::Wed,
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_activity_summary() {
        let mut activity = lesson();
        assert_eq!(activity_summary(&activity), "CS2103 @ COM1 (every Wed, 10:00 - 12:00)");

        activity.date = NaiveDate::from_ymd_opt(2020, 1, 15);
        assert_eq!(activity_summary(&activity), "CS2103 @ COM1 (Wed 15/01/2020, 10:00 - 12:00)");
    }

    #[test]
    fn test_activity_table_contains_rows() {
        let table = activity_table(&[lesson()]);
        assert!(table.contains("CS2103"));
        assert!(table.contains("10:00 - 12:00"));
        assert!(table.contains("Lesson"));
    }
}
