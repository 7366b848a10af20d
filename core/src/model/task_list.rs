use crate::error::CalendarError;
use crate::model::stats::TaskCompletionStatistics;
use crate::model::task::{Task, TaskReference};

/// The tasks due within one week, kept sorted by due instant, together with
/// their completion statistics.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    stats: TaskCompletionStatistics,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, task: &Task) -> bool {
        self.tasks.iter().any(|t| t == task)
    }

    pub fn add(&mut self, task: Task) -> Result<(), CalendarError> {
        if self.contains(&task) {
            return Err(CalendarError::DuplicateTask);
        }

        self.stats.increment_total();
        if task.is_complete {
            self.stats.increment_completed();
        }

        let due = task.due();
        let index = self.tasks.partition_point(|t| t.due() <= due);
        self.tasks.insert(index, task);
        Ok(())
    }

    pub fn delete(&mut self, reference: &TaskReference) -> Option<Task> {
        let index = self.tasks.iter().position(|t| reference.matches(t))?;
        let removed = self.tasks.remove(index);

        if removed.is_complete {
            self.stats.decrement_completed();
        }
        self.stats.decrement_total();
        Some(removed)
    }

    /// Marks the first task due at the referenced instant as complete and
    /// returns a copy of it.
    pub fn complete(&mut self, reference: &TaskReference) -> Result<Option<Task>, CalendarError> {
        let task = match self.tasks.iter_mut().find(|t| reference.matches(t)) {
            Some(task) => task,
            None => return Ok(None),
        };

        if task.is_complete {
            return Err(CalendarError::RepeatedComplete);
        }

        task.complete();
        self.stats.increment_completed();
        Ok(Some(task.clone()))
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn stats(&self) -> &TaskCompletionStatistics {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_add_keeps_due_order() {
        let mut list = TaskList::new();
        list.add(Task::new("Wed", d(2020, 1, 15), t(9, 0), "")).unwrap();
        list.add(Task::new("Mon late", d(2020, 1, 13), t(18, 0), "")).unwrap();
        list.add(Task::new("Tue", d(2020, 1, 14), t(8, 0), "")).unwrap();
        list.add(Task::new("Mon early", d(2020, 1, 13), t(8, 0), "")).unwrap();

        let order: Vec<&str> = list.tasks().iter().map(|t| t.description.as_str()).collect();
        assert_eq!(order, vec!["Mon early", "Mon late", "Tue", "Wed"]);
        assert_eq!(list.stats().as_fraction(), "0/4");
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut list = TaskList::new();
        list.add(Task::new("Report", d(2020, 1, 13), t(10, 0), "")).unwrap();

        let result = list.add(Task::new("Report", d(2020, 1, 13), t(10, 0), "other note"));
        assert_eq!(result, Err(CalendarError::DuplicateTask));
        assert_eq!(list.tasks().len(), 1);
        assert_eq!(list.stats().total_tasks(), 1);
    }

    #[test]
    fn test_completed_task_counted_on_insert() {
        let mut list = TaskList::new();
        let mut done = Task::new("Report", d(2020, 1, 13), t(10, 0), "");
        done.complete();
        list.add(done).unwrap();
        list.add(Task::new("Slides", d(2020, 1, 14), t(10, 0), "")).unwrap();

        assert_eq!(list.stats().as_fraction(), "1/2");
    }

    #[test]
    fn test_complete_twice() {
        let mut list = TaskList::new();
        list.add(Task::new("Report", d(2020, 1, 13), t(10, 0), "")).unwrap();
        let reference = TaskReference::new(d(2020, 1, 13), t(10, 0));

        let completed = list.complete(&reference).unwrap().unwrap();
        assert!(completed.is_complete);
        assert_eq!(list.stats().as_fraction(), "1/1");

        assert_eq!(list.complete(&reference), Err(CalendarError::RepeatedComplete));
        assert_eq!(list.stats().as_fraction(), "1/1");
    }

    #[test]
    fn test_complete_missing_task() {
        let mut list = TaskList::new();
        let reference = TaskReference::new(d(2020, 1, 13), t(10, 0));
        assert_eq!(list.complete(&reference), Ok(None));
    }

    #[test]
    fn test_delete_updates_stats() {
        let mut list = TaskList::new();
        list.add(Task::new("Report", d(2020, 1, 13), t(10, 0), "")).unwrap();
        list.add(Task::new("Slides", d(2020, 1, 14), t(10, 0), "")).unwrap();
        list.complete(&TaskReference::new(d(2020, 1, 13), t(10, 0))).unwrap();
        assert_eq!(list.stats().as_fraction(), "1/2");

        let removed = list.delete(&TaskReference::new(d(2020, 1, 13), t(10, 0))).unwrap();
        assert_eq!(removed.description, "Report");
        assert_eq!(list.stats().as_fraction(), "0/1");

        assert!(list.delete(&TaskReference::new(d(2020, 1, 15), t(9, 0))).is_none());
        assert_eq!(list.stats().as_fraction(), "0/1");
    }
}
