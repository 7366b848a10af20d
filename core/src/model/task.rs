use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Task {
    pub description: String,
    pub due_date: NaiveDate,
    pub due_time: NaiveTime,
    pub note: String,
    pub is_complete: bool,
}

impl Task {
    pub fn new(
        description: impl Into<String>,
        due_date: NaiveDate,
        due_time: NaiveTime,
        note: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            due_date,
            due_time,
            note: note.into(),
            is_complete: false,
        }
    }

    pub fn due(&self) -> NaiveDateTime {
        self.due_date.and_time(self.due_time)
    }

    pub fn complete(&mut self) {
        self.is_complete = true;
    }
}

/// Full value equality: same description due at the same instant. The note and
/// the completion flag are not part of a task's identity.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
            && self.due_date == other.due_date
            && self.due_time == other.due_time
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Description: {}", self.description)?;
        writeln!(
            f,
            "Deadline: {} {}",
            self.due_date.format("%d/%m/%Y"),
            self.due_time.format("%I:%M %p")
        )?;
        if !self.note.is_empty() {
            writeln!(f, "Notes: {}", self.note)?;
        }
        Ok(())
    }
}

/// Lookup key for a task: the instant it is due, nothing else.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskReference {
    pub due_date: NaiveDate,
    pub due_time: NaiveTime,
}

impl TaskReference {
    pub fn new(due_date: NaiveDate, due_time: NaiveTime) -> Self {
        Self { due_date, due_time }
    }

    /// True when the task is due neither before nor after this reference.
    pub fn matches(&self, task: &Task) -> bool {
        let due = self.due_date.and_time(self.due_time);
        !(task.due() < due || task.due() > due)
    }
}
