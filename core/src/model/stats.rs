use serde::{Deserialize, Serialize};

/// Completed/total counters for one week's tasks. Out-of-bound updates are
/// clamped and logged instead of failing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCompletionStatistics {
    total_tasks: u32,
    completed_tasks: u32,
}

impl TaskCompletionStatistics {
    pub fn total_tasks(&self) -> u32 {
        self.total_tasks
    }

    pub fn completed_tasks(&self) -> u32 {
        self.completed_tasks
    }

    pub fn increment_total(&mut self) {
        self.total_tasks += 1;
    }

    pub fn increment_completed(&mut self) {
        if self.completed_tasks >= self.total_tasks {
            log::warn!(
                "Attempting to increment completed task count over total task count ({})",
                self.total_tasks
            );
            self.completed_tasks = self.total_tasks;
        } else {
            self.completed_tasks += 1;
        }
    }

    pub fn decrement_total(&mut self) {
        if self.total_tasks == 0 {
            log::warn!("Attempting to decrement total task count under zero");
            return;
        }
        self.total_tasks -= 1;
        if self.completed_tasks > self.total_tasks {
            self.completed_tasks = self.total_tasks;
        }
    }

    pub fn decrement_completed(&mut self) {
        if self.completed_tasks == 0 {
            log::warn!("Attempting to decrement completed task count under zero");
            return;
        }
        self.completed_tasks -= 1;
    }

    pub fn as_fraction(&self) -> String {
        format!("{}/{}", self.completed_tasks, self.total_tasks)
    }

    /// Rounded half up. A week without tasks counts as fully done.
    pub fn as_percentage(&self) -> String {
        if self.total_tasks == 0 {
            return "100%".to_string();
        }
        let percentage = (self.completed_tasks * 200 + self.total_tasks) / (self.total_tasks * 2);
        format!("{}%", percentage)
    }
}
