use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};

use crate::error::CalendarError;
use crate::model::activity::{Activity, ActivityReference};
use crate::model::semester::DAYS_PER_WEEK;
use crate::model::stats::TaskCompletionStatistics;
use crate::model::task::{Task, TaskReference};
use crate::model::task_list::TaskList;
use crate::model::day::Day;

#[derive(Debug, Clone)]
pub struct Week {
    week_num: u32,
    start_of_week: NaiveDate,
    days: Vec<Day>,
    tasks: TaskList,
}

impl Week {
    pub fn new(week_num: u32, start_of_week: NaiveDate) -> Self {
        let days = (0..DAYS_PER_WEEK as i64)
            .map(|offset| Day::new(start_of_week + Duration::days(offset)))
            .collect();

        Self {
            week_num,
            start_of_week,
            days,
            tasks: TaskList::new(),
        }
    }

    pub fn week_num(&self) -> u32 {
        self.week_num
    }

    pub fn start_of_week(&self) -> NaiveDate {
        self.start_of_week
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Zero-based position of `weekday` counted from this week's first day.
    pub fn day_index(&self, weekday: Weekday) -> usize {
        let first = self.start_of_week.weekday().num_days_from_monday();
        ((weekday.num_days_from_monday() + 7 - first) % 7) as usize
    }

    pub fn day(&self, weekday: Weekday) -> &Day {
        &self.days[self.day_index(weekday)]
    }

    pub fn add_activity(&mut self, activity: &Activity) -> Result<(), CalendarError> {
        let index = self.day_index(activity.weekday());
        self.days[index].add_activity(activity)
    }

    pub fn delete_activity(&mut self, reference: &ActivityReference) -> Option<Activity> {
        let index = self.day_index(reference.date.weekday());
        self.days[index].delete_activity(reference)
    }

    pub fn is_addable(&self, activity: &Activity) -> bool {
        self.day(activity.weekday()).is_addable(activity)
    }

    pub fn has_activity(&self, activity: &Activity) -> bool {
        self.day(activity.weekday()).has_activity(activity)
    }

    pub fn add_task(&mut self, task: Task) -> Result<(), CalendarError> {
        self.tasks.add(task)
    }

    pub fn delete_task(&mut self, reference: &TaskReference) -> Option<Task> {
        self.tasks.delete(reference)
    }

    pub fn complete_task(&mut self, reference: &TaskReference) -> Result<Option<Task>, CalendarError> {
        self.tasks.complete(reference)
    }

    pub fn has_task(&self, task: &Task) -> bool {
        self.tasks.contains(task)
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    pub fn task_completion_stats(&self) -> &TaskCompletionStatistics {
        self.tasks.stats()
    }

    pub fn first_activity(&self) -> Option<&Activity> {
        self.days.iter().find_map(|day| day.first_activity())
    }

    /// Looks for the next activity on `from_day_index` after `time_now`, then
    /// for the first activity on any later day of this week.
    pub fn next_activity(&self, from_day_index: usize, time_now: NaiveTime) -> Option<&Activity> {
        let today = self.days.get(from_day_index)?;
        today.next_activity(time_now).or_else(|| {
            self.days
                .iter()
                .skip(from_day_index + 1)
                .find_map(|day| day.first_activity())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_days_follow_start_of_week() {
        let week = Week::new(1, d(2020, 1, 13));
        let dates: Vec<NaiveDate> = week.days().iter().map(|day| day.date()).collect();
        assert_eq!(dates.first(), Some(&d(2020, 1, 13)));
        assert_eq!(dates.last(), Some(&d(2020, 1, 19)));
        assert_eq!(week.day_index(Weekday::Mon), 0);
        assert_eq!(week.day_index(Weekday::Sun), 6);
    }

    #[test]
    fn test_routes_by_weekday() {
        let mut week = Week::new(1, d(2020, 1, 13));
        let wednesday = Activity::meeting("Sync", "Office", d(2020, 1, 15), t(9, 0), t(10, 0), "");
        let lesson = Activity::lesson("CS2103", "COM1", Weekday::Fri, t(14, 0), t(16, 0), "");

        week.add_activity(&wednesday).unwrap();
        week.add_activity(&lesson).unwrap();

        assert_eq!(week.days()[2].activities().len(), 1);
        assert_eq!(week.days()[4].activities()[0].date(), Some(d(2020, 1, 17)));
        assert!(week.has_activity(&lesson));
    }

    #[test]
    fn test_next_activity_spills_into_later_days() {
        let mut week = Week::new(1, d(2020, 1, 13));
        week.add_activity(&Activity::meeting("Mon", "x", d(2020, 1, 13), t(9, 0), t(10, 0), "")).unwrap();
        week.add_activity(&Activity::meeting("Thu", "x", d(2020, 1, 16), t(8, 0), t(9, 0), "")).unwrap();

        assert_eq!(week.next_activity(0, t(8, 0)).map(|a| a.description()), Some("Mon"));
        assert_eq!(week.next_activity(0, t(9, 30)).map(|a| a.description()), Some("Thu"));
        assert!(week.next_activity(3, t(8, 30)).is_none());
        assert_eq!(week.first_activity().map(|a| a.description()), Some("Mon"));
    }

    #[test]
    fn test_task_stats_follow_bucket() {
        let mut week = Week::new(1, d(2020, 1, 13));
        week.add_task(Task::new("Report", d(2020, 1, 13), t(10, 0), "")).unwrap();
        week.complete_task(&TaskReference::new(d(2020, 1, 13), t(10, 0))).unwrap();

        assert_eq!(week.task_completion_stats().as_fraction(), "1/1");
        assert_eq!(week.tasks().len(), 1);
    }
}
