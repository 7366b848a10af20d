use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::model::activity::{Activity, ActivityKind};
use crate::model::calendar::Calendar;
use crate::model::semester::SemesterLayout;
use crate::model::task::Task;

/// The persisted form of a calendar.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDocument {
    pub start_date: NaiveDate,
    #[serde(default)]
    pub activities: Vec<ActivityRecord>,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub description: String,
    pub venue: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub notes: String,
    pub activity_type: ActivityKind,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub description: String,
    pub due_date: NaiveDate,
    pub due_time: NaiveTime,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl ActivityRecord {
    /// Stored activities always have a date; a template lesson is skipped.
    pub fn from_entity(activity: &Activity) -> Option<Self> {
        Some(Self {
            description: activity.description().to_string(),
            venue: activity.venue().to_string(),
            date: activity.date()?,
            start_time: activity.start_time(),
            end_time: activity.end_time(),
            notes: activity.notes().to_string(),
            activity_type: activity.kind(),
        })
    }

    /// Lessons come back as templates recurring on the stored date's weekday.
    pub fn into_entity(self) -> Activity {
        match self.activity_type {
            ActivityKind::Meeting => Activity::meeting(
                self.description,
                self.venue,
                self.date,
                self.start_time,
                self.end_time,
                self.notes,
            ),
            ActivityKind::Lesson => Activity::lesson(
                self.description,
                self.venue,
                self.date.weekday(),
                self.start_time,
                self.end_time,
                self.notes,
            ),
        }
    }
}

impl TaskRecord {
    pub fn from_entity(task: &Task) -> Self {
        Self {
            description: task.description.clone(),
            due_date: task.due_date,
            due_time: task.due_time,
            note: task.note.clone(),
            is_completed: task.is_complete,
        }
    }

    pub fn into_entity(self) -> Task {
        let mut task = Task::new(self.description, self.due_date, self.due_time, self.note);
        if self.is_completed {
            task.complete();
        }
        task
    }
}

impl CalendarDocument {
    pub fn from_calendar(calendar: &Calendar) -> Self {
        Self {
            start_date: calendar.start_date(),
            activities: calendar
                .activities()
                .filter_map(ActivityRecord::from_entity)
                .collect(),
            tasks: calendar.tasks().map(TaskRecord::from_entity).collect(),
        }
    }

    /// Rebuilds the calendar in document order. A repeated meeting or task
    /// aborts the load; repeated lesson occurrences are expected and skipped.
    pub fn into_calendar(self, layout: SemesterLayout) -> Result<Calendar, DocumentError> {
        let mut calendar = Calendar::new(layout, self.start_date)?;

        for record in self.activities {
            let activity = record.into_entity();
            if calendar.has_activity(&activity) {
                if activity.is_recurring() {
                    continue;
                }
                return Err(DocumentError::DuplicateActivity(activity.description().to_string()));
            }
            calendar.add_activity(activity)?;
        }

        for record in self.tasks {
            let task = record.into_entity();
            if calendar.has_task(&task) {
                return Err(DocumentError::DuplicateTask(task.description));
            }
            calendar.add_task(task)?;
        }

        log::debug!(
            "Rebuilt calendar from {} with {} activities and {} tasks",
            calendar.start_date(),
            calendar.activities().count(),
            calendar.tasks().count()
        );
        Ok(calendar)
    }
}
