pub mod activity;
pub mod calendar;
pub mod day;
pub mod semester;
pub mod stats;
pub mod task;
pub mod task_list;
pub mod week;
