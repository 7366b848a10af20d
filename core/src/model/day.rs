use chrono::{NaiveDate, NaiveTime};

use crate::error::CalendarError;
use crate::model::activity::{Activity, ActivityReference};

/// The activities of one concrete date, sorted by start time and never
/// overlapping.
#[derive(Debug, Clone)]
pub struct Day {
    date: NaiveDate,
    activities: Vec<Activity>,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            activities: Vec::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Stores a copy of `activity` dated to this day.
    pub fn add_activity(&mut self, activity: &Activity) -> Result<(), CalendarError> {
        if self.has_activity(activity) {
            return Err(CalendarError::DuplicateActivity);
        }
        if !self.is_addable(activity) {
            return Err(CalendarError::ActivityConflict);
        }

        let instance = activity.materialize_on(self.date);
        let index = self
            .activities
            .partition_point(|a| a.start_time() < instance.start_time());
        self.activities.insert(index, instance);
        Ok(())
    }

    pub fn is_addable(&self, candidate: &Activity) -> bool {
        !self.activities.iter().any(|a| a.conflicts_with(candidate))
    }

    pub fn has_activity(&self, activity: &Activity) -> bool {
        self.activities.iter().any(|a| a == activity)
    }

    /// Removes the meeting the reference points at. Lesson occurrences are
    /// never removed individually.
    pub fn delete_activity(&mut self, reference: &ActivityReference) -> Option<Activity> {
        let index = self
            .activities
            .iter()
            .position(|a| !a.is_recurring() && reference.matches(a))?;
        Some(self.activities.remove(index))
    }

    pub fn first_activity(&self) -> Option<&Activity> {
        self.activities.first()
    }

    /// The first activity starting strictly after `time_now`.
    pub fn next_activity(&self, time_now: NaiveTime) -> Option<&Activity> {
        self.activities.iter().find(|a| a.start_time() > time_now)
    }
}
