use chrono::{NaiveDate, Weekday};
use thiserror::Error;

/// Domain failures raised by the calendar engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("The date {date} is outside of the range of the calendar")]
    OutOfRange { date: NaiveDate },

    #[error("The activity already exists in the calendar")]
    DuplicateActivity,

    #[error("The task already exists in the calendar")]
    DuplicateTask,

    #[error("This activity overlaps with another activity")]
    ActivityConflict,

    #[error("This activity is not valid: it must start before it ends")]
    InvalidActivity,

    #[error("The task has already been completed")]
    RepeatedComplete,

    #[error("The start day has to be a {expected:?}, got {day:?}")]
    InvalidStartDay { day: Weekday, expected: Weekday },

    #[error("Invalid semester layout: {0}")]
    InvalidSemester(String),
}

/// Failures while rebuilding a calendar from its persisted document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Activity list contains duplicate activity: {0}")]
    DuplicateActivity(String),

    #[error("Task list contains duplicate task: {0}")]
    DuplicateTask(String),

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
