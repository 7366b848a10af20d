use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Meeting,
    Lesson,
}

/// A one-off activity on a concrete date.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Meeting {
    pub description: String,
    pub venue: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: String,
}

/// A weekly lesson. The template form has no date; every occurrence stored in
/// the calendar carries the date of the day it was materialised on.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Lesson {
    pub description: String,
    pub venue: String,
    pub day: Weekday,
    pub date: Option<NaiveDate>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum Activity {
    Meeting(Meeting),
    Lesson(Lesson),
}

impl Activity {
    pub fn meeting(
        description: impl Into<String>,
        venue: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        notes: impl Into<String>,
    ) -> Self {
        Activity::Meeting(Meeting {
            description: description.into(),
            venue: venue.into(),
            date,
            start_time,
            end_time,
            notes: notes.into(),
        })
    }

    pub fn lesson(
        description: impl Into<String>,
        venue: impl Into<String>,
        day: Weekday,
        start_time: NaiveTime,
        end_time: NaiveTime,
        notes: impl Into<String>,
    ) -> Self {
        Activity::Lesson(Lesson {
            description: description.into(),
            venue: venue.into(),
            day,
            date: None,
            start_time,
            end_time,
            notes: notes.into(),
        })
    }

    pub fn kind(&self) -> ActivityKind {
        match self {
            Activity::Meeting(_) => ActivityKind::Meeting,
            Activity::Lesson(_) => ActivityKind::Lesson,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Activity::Meeting(m) => &m.description,
            Activity::Lesson(l) => &l.description,
        }
    }

    pub fn venue(&self) -> &str {
        match self {
            Activity::Meeting(m) => &m.venue,
            Activity::Lesson(l) => &l.venue,
        }
    }

    pub fn notes(&self) -> &str {
        match self {
            Activity::Meeting(m) => &m.notes,
            Activity::Lesson(l) => &l.notes,
        }
    }

    pub fn start_time(&self) -> NaiveTime {
        match self {
            Activity::Meeting(m) => m.start_time,
            Activity::Lesson(l) => l.start_time,
        }
    }

    pub fn end_time(&self) -> NaiveTime {
        match self {
            Activity::Meeting(m) => m.end_time,
            Activity::Lesson(l) => l.end_time,
        }
    }

    /// The concrete date, absent only for a lesson template.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Activity::Meeting(m) => Some(m.date),
            Activity::Lesson(l) => l.date,
        }
    }

    /// The day of week this activity is routed to inside a week.
    pub fn weekday(&self) -> Weekday {
        match self {
            Activity::Meeting(m) => m.date.weekday(),
            Activity::Lesson(l) => l.day,
        }
    }

    pub fn is_recurring(&self) -> bool {
        matches!(self, Activity::Lesson(_))
    }

    pub fn is_valid(&self) -> bool {
        self.start_time() < self.end_time()
    }

    /// Half-open interval test: `[start, end)` ranges that only touch do not
    /// conflict.
    pub fn conflicts_with(&self, other: &Activity) -> bool {
        self.start_time() < other.end_time() && other.start_time() < self.end_time()
    }

    /// Produces the instance stored on `date`. Lessons gain that date; meetings
    /// are copied as they are.
    pub fn materialize_on(&self, date: NaiveDate) -> Activity {
        match self {
            Activity::Meeting(m) => Activity::Meeting(m.clone()),
            Activity::Lesson(l) => Activity::Lesson(Lesson {
                date: Some(date),
                ..l.clone()
            }),
        }
    }
}

/// Full value equality, used for duplicate detection. Notes are not part of an
/// activity's identity, and lesson occurrences compare equal to their template.
impl PartialEq for Activity {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Activity::Meeting(a), Activity::Meeting(b)) => {
                a.description == b.description
                    && a.venue == b.venue
                    && a.date == b.date
                    && a.start_time == b.start_time
                    && a.end_time == b.end_time
            }
            (Activity::Lesson(a), Activity::Lesson(b)) => {
                a.description == b.description
                    && a.venue == b.venue
                    && a.day == b.day
                    && a.start_time == b.start_time
                    && a.end_time == b.end_time
            }
            _ => false,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Description: {}", self.description())?;
        writeln!(
            f,
            "Time: {} - {}",
            self.start_time().format("%H:%M"),
            self.end_time().format("%H:%M")
        )?;
        writeln!(f, "Venue: {}", self.venue())?;
        match self.date() {
            Some(date) => writeln!(f, "Date: {}", date.format("%d/%m/%Y"))?,
            None => writeln!(f, "Day: {}", self.weekday())?,
        }
        if !self.notes().is_empty() {
            writeln!(f, "Notes: {}", self.notes())?;
        }
        Ok(())
    }
}

/// Lookup key for an activity: its date and start time only.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityReference {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
}

impl ActivityReference {
    pub fn new(date: NaiveDate, start_time: NaiveTime) -> Self {
        Self { date, start_time }
    }

    pub fn matches(&self, activity: &Activity) -> bool {
        activity.date() == Some(self.date) && activity.start_time() == self.start_time
    }
}
