use serde::{Serialize, Deserialize};
use chrono::{NaiveDate, NaiveTime, Weekday};
use crate::model::activity::{Activity, ActivityKind};
use crate::model::semester::WeekLabel;
use crate::model::task::Task;

/// Owned snapshot of an activity for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActivityDto {
    pub kind: ActivityKind,
    pub description: String,
    pub venue: String,
    pub date: Option<NaiveDate>,
    pub day_of_week: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: String,
}

impl ActivityDto {
    pub fn from_entity(activity: &Activity) -> Self {
        Self {
            kind: activity.kind(),
            description: activity.description().to_string(),
            venue: activity.venue().to_string(),
            date: activity.date(),
            day_of_week: activity.weekday(),
            start_time: activity.start_time(),
            end_time: activity.end_time(),
            notes: activity.notes().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskDto {
    pub description: String,
    pub due_date: NaiveDate,
    pub due_time: NaiveTime,
    pub note: String,
    pub status: String, // "Pending" or "Completed"
}

impl TaskDto {
    pub fn from_entity(task: &Task) -> Self {
        let status = if task.is_complete { "Completed" } else { "Pending" };
        Self {
            description: task.description.clone(),
            due_date: task.due_date,
            due_time: task.due_time,
            note: task.note.clone(),
            status: status.to_string(),
        }
    }
}

/// What the front end shows at a glance: where we are in the semester, what
/// comes next, and how this week's tasks are going.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub week: WeekLabel,
    pub next_activity: Option<ActivityDto>,
    pub tasks: Vec<TaskDto>,
    pub completion_fraction: String,
    pub completion_percentage: String,
}
