use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};

use crate::error::CalendarError;
use crate::model::activity::{Activity, ActivityReference};
use crate::model::semester::{SemesterLayout, WeekLabel, DAYS_PER_WEEK};
use crate::model::stats::TaskCompletionStatistics;
use crate::model::task::{Task, TaskReference};
use crate::model::week::Week;

/// A semester-long calendar split into weeks of seven days.
///
/// Every operation is routed to the week owning the relevant date. Recurring
/// lessons are the exception: they are checked against every week that hosts
/// lessons before any of those weeks is touched.
#[derive(Debug, Clone)]
pub struct Calendar {
    layout: SemesterLayout,
    start_date: NaiveDate,
    end_date: NaiveDate,
    weeks: Vec<Week>,
}

impl Calendar {
    pub fn new(layout: SemesterLayout, start_date: NaiveDate) -> Result<Self, CalendarError> {
        if start_date.weekday() != layout.first_day_of_week {
            return Err(CalendarError::InvalidStartDay {
                day: start_date.weekday(),
                expected: layout.first_day_of_week,
            });
        }

        // Every week and day date lies between the two ends, so once the last
        // day is representable the plain additions below cannot overflow.
        let end_date = start_date
            .checked_add_signed(Duration::days(layout.total_days() - 1))
            .ok_or(CalendarError::OutOfRange { date: start_date })?;
        let weeks = Self::build_weeks(&layout, start_date);

        Ok(Self {
            layout,
            start_date,
            end_date,
            weeks,
        })
    }

    /// A calendar starting on the layout's default start date.
    pub fn with_layout(layout: SemesterLayout) -> Result<Self, CalendarError> {
        let start_date = layout.default_start_date;
        Self::new(layout, start_date)
    }

    fn build_weeks(layout: &SemesterLayout, start_date: NaiveDate) -> Vec<Week> {
        (0..layout.weeks_per_semester)
            .map(|index| Week::new(index + 1, start_date + Duration::weeks(index as i64)))
            .collect()
    }

    /// Discards every activity and task and starts over from `start_date`.
    pub fn reset(&mut self, start_date: NaiveDate) -> Result<(), CalendarError> {
        let fresh = Calendar::new(self.layout.clone(), start_date)?;
        log::info!(
            "Calendar reset to {} - {}",
            fresh.start_date,
            fresh.end_date
        );
        *self = fresh;
        Ok(())
    }

    pub fn layout(&self) -> &SemesterLayout {
        &self.layout
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of the final week, inclusive.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    //============================= Activities ==============================

    pub fn add_activity(&mut self, activity: Activity) -> Result<(), CalendarError> {
        if !activity.is_valid() {
            return Err(CalendarError::InvalidActivity);
        }
        if activity.is_recurring() {
            return self.add_lesson(&activity);
        }

        let week = self.owning_week_mut_checked(activity.date())?;
        week.add_activity(&activity)
    }

    /// Checks every lesson-hosting week first and only then inserts an
    /// occurrence into each of them.
    fn add_lesson(&mut self, lesson: &Activity) -> Result<(), CalendarError> {
        if self.has_activity(lesson) {
            return Err(CalendarError::DuplicateActivity);
        }
        if self.lesson_weeks().next().is_none() {
            return Err(CalendarError::InvalidSemester(
                "no week of the semester hosts lessons".to_string(),
            ));
        }
        if !self.is_addable(lesson) {
            return Err(CalendarError::ActivityConflict);
        }

        let layout = &self.layout;
        let mut count = 0;
        for week in self.weeks.iter_mut().filter(|w| layout.hosts_lessons(w.week_num())) {
            week.add_activity(lesson)?;
            count += 1;
        }
        log::debug!(
            "Lesson '{}' materialised in {} weeks on {}",
            lesson.description(),
            count,
            lesson.weekday()
        );
        Ok(())
    }

    pub fn delete_activity(&mut self, reference: &ActivityReference) -> Option<Activity> {
        let index = self.week_index(reference.date)?;
        self.weeks[index].delete_activity(reference)
    }

    pub fn has_activity(&self, activity: &Activity) -> bool {
        if activity.is_recurring() {
            return self.lesson_weeks().any(|w| w.has_activity(activity));
        }
        activity
            .date()
            .and_then(|date| self.week_index(date))
            .map_or(false, |index| self.weeks[index].has_activity(activity))
    }

    pub fn is_addable(&self, activity: &Activity) -> bool {
        if activity.is_recurring() {
            return self.lesson_weeks().all(|w| w.is_addable(activity));
        }
        activity
            .date()
            .and_then(|date| self.week_index(date))
            .map_or(false, |index| self.weeks[index].is_addable(activity))
    }

    fn lesson_weeks(&self) -> impl Iterator<Item = &Week> {
        self.weeks
            .iter()
            .filter(move |w| self.layout.hosts_lessons(w.week_num()))
    }

    /// Every stored activity, ordered by date then start time.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.weeks
            .iter()
            .flat_map(|w| w.days())
            .flat_map(|day| day.activities())
    }

    pub fn view_activities_on_date(&self, date: NaiveDate) -> &[Activity] {
        match self.week_index(date) {
            Some(index) => self.weeks[index].day(date.weekday()).activities(),
            None => &[],
        }
    }

    /// The earliest activity starting after `time_now` on `today`, or failing
    /// that the first activity of any later day in the calendar.
    pub fn next_activity(&self, today: NaiveDate, time_now: NaiveTime) -> Option<&Activity> {
        if today < self.start_date {
            return self.weeks.iter().find_map(|w| w.first_activity());
        }

        let index = self.week_index(today)?;
        let week = &self.weeks[index];
        week.next_activity(week.day_index(today.weekday()), time_now)
            .or_else(|| {
                self.weeks[index + 1..]
                    .iter()
                    .find_map(|w| w.first_activity())
            })
    }

    //============================= Tasks ==============================

    pub fn add_task(&mut self, task: Task) -> Result<(), CalendarError> {
        let week = self.owning_week_mut_checked(Some(task.due_date))?;
        week.add_task(task)
    }

    pub fn delete_task(&mut self, reference: &TaskReference) -> Option<Task> {
        let index = self.week_index(reference.due_date)?;
        self.weeks[index].delete_task(reference)
    }

    pub fn complete_task(&mut self, reference: &TaskReference) -> Result<Option<Task>, CalendarError> {
        match self.week_index(reference.due_date) {
            Some(index) => self.weeks[index].complete_task(reference),
            None => Ok(None),
        }
    }

    pub fn has_task(&self, task: &Task) -> bool {
        self.week_index(task.due_date)
            .map_or(false, |index| self.weeks[index].has_task(task))
    }

    /// Every stored task, ordered by due date and time.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.weeks.iter().flat_map(|w| w.tasks())
    }

    /// Tasks due in the week containing `today`; empty outside the calendar.
    pub fn week_task_list(&self, today: NaiveDate) -> &[Task] {
        match self.week_index(today) {
            Some(index) => self.weeks[index].tasks(),
            None => &[],
        }
    }

    /// Statistics of the week containing `today`; zeroed outside the calendar.
    pub fn task_completion_stats(&self, today: NaiveDate) -> TaskCompletionStatistics {
        self.week_index(today)
            .map(|index| *self.weeks[index].task_completion_stats())
            .unwrap_or_default()
    }

    //============================= Dates ==============================

    /// Zero-based week of `date`, negative before the start and possibly past
    /// the last week.
    pub fn calculate_week(&self, date: NaiveDate) -> i64 {
        let days = (date - self.start_date).num_days();
        days.div_euclid(DAYS_PER_WEEK as i64)
    }

    pub fn week_label(&self, date: NaiveDate) -> WeekLabel {
        self.layout.label_week(self.calculate_week(date) + 1)
    }

    pub fn is_within_calendar_range(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Template lessons have no date and fit any calendar.
    pub fn is_activity_within_calendar_range(&self, activity: &Activity) -> bool {
        activity
            .date()
            .map_or(true, |date| self.is_within_calendar_range(date))
    }

    pub fn is_valid_start_day(&self, day: Weekday) -> bool {
        day == self.layout.first_day_of_week
    }

    fn week_index(&self, date: NaiveDate) -> Option<usize> {
        let week = self.calculate_week(date);
        if week < 0 || week >= self.weeks.len() as i64 {
            return None;
        }
        Some(week as usize)
    }

    fn owning_week_mut_checked(&mut self, date: Option<NaiveDate>) -> Result<&mut Week, CalendarError> {
        let date = date.ok_or(CalendarError::InvalidActivity)?;
        let index = self
            .week_index(date)
            .ok_or(CalendarError::OutOfRange { date })?;
        log::debug!("Routing {} to week {}", date, index + 1);
        Ok(&mut self.weeks[index])
    }
}
