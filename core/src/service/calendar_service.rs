use crate::error::CalendarError;
use crate::model::activity::{Activity, ActivityReference};
use crate::model::calendar::Calendar;
use crate::model::semester::SemesterLayout;
use crate::model::task::{Task, TaskReference};
use crate::repository::{CalendarDocument, CalendarRepository};
use crate::service::dto::{ActivityDto, Dashboard, TaskDto};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use anyhow::Result;

/// Owns the calendar for the lifetime of the application and writes it back to
/// the repository after every successful change.
pub struct CalendarService<R: CalendarRepository> {
    repo: R,
    calendar: Calendar,
}

impl<R: CalendarRepository> CalendarService<R> {
    /// Restores the saved calendar. Anything that cannot be restored is
    /// replaced by a fresh calendar starting on the layout's default date.
    pub fn open(repo: R, layout: SemesterLayout) -> Result<Self> {
        let restored = match repo.load() {
            Ok(Some(document)) => match document.into_calendar(layout.clone()) {
                Ok(calendar) => Some(calendar),
                Err(e) => {
                    log::warn!("Calendar data is invalid, starting with a fresh calendar: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("Could not read calendar data, starting with a fresh calendar: {:#}", e);
                None
            }
        };

        let calendar = match restored {
            Some(calendar) => calendar,
            None => Calendar::with_layout(layout)?,
        };
        Ok(Self { repo, calendar })
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    fn save(&self) -> Result<()> {
        self.repo.save(&CalendarDocument::from_calendar(&self.calendar))
    }

    fn ensure_in_range(&self, date: NaiveDate) -> Result<()> {
        if !self.calendar.is_within_calendar_range(date) {
            return Err(CalendarError::OutOfRange { date }.into());
        }
        Ok(())
    }

    // Activities

    pub fn add_activity(&mut self, activity: Activity) -> Result<()> {
        self.calendar.add_activity(activity)?;
        self.save()
    }

    pub fn delete_activity(&mut self, date: NaiveDate, start_time: NaiveTime) -> Result<Option<Activity>> {
        self.ensure_in_range(date)?;
        let deleted = self
            .calendar
            .delete_activity(&ActivityReference::new(date, start_time));
        if deleted.is_some() {
            self.save()?;
        }
        Ok(deleted)
    }

    pub fn view(&self, date: NaiveDate) -> Result<Vec<ActivityDto>> {
        self.ensure_in_range(date)?;
        Ok(self
            .calendar
            .view_activities_on_date(date)
            .iter()
            .map(ActivityDto::from_entity)
            .collect())
    }

    pub fn next_activity(&self, now: NaiveDateTime) -> Option<ActivityDto> {
        self.calendar
            .next_activity(now.date(), now.time())
            .map(ActivityDto::from_entity)
    }

    // Tasks

    pub fn add_task(&mut self, task: Task) -> Result<()> {
        self.calendar.add_task(task)?;
        self.save()
    }

    pub fn delete_task(&mut self, due_date: NaiveDate, due_time: NaiveTime) -> Result<Option<Task>> {
        self.ensure_in_range(due_date)?;
        let deleted = self
            .calendar
            .delete_task(&TaskReference::new(due_date, due_time));
        if deleted.is_some() {
            self.save()?;
        }
        Ok(deleted)
    }

    pub fn complete_task(&mut self, due_date: NaiveDate, due_time: NaiveTime) -> Result<Option<Task>> {
        self.ensure_in_range(due_date)?;
        let completed = self
            .calendar
            .complete_task(&TaskReference::new(due_date, due_time))?;
        if completed.is_some() {
            self.save()?;
        }
        Ok(completed)
    }

    pub fn week_tasks(&self, today: NaiveDate) -> Vec<TaskDto> {
        self.calendar
            .week_task_list(today)
            .iter()
            .map(TaskDto::from_entity)
            .collect()
    }

    // Calendar

    pub fn reset(&mut self, start_date: NaiveDate) -> Result<()> {
        self.calendar.reset(start_date)?;
        self.save()
    }

    pub fn dashboard(&self, now: NaiveDateTime) -> Dashboard {
        let today = now.date();
        let stats = self.calendar.task_completion_stats(today);

        Dashboard {
            today,
            week: self.calendar.week_label(today),
            next_activity: self.next_activity(now),
            tasks: self.week_tasks(today),
            completion_fraction: stats.as_fraction(),
            completion_percentage: stats.as_percentage(),
        }
    }
}
