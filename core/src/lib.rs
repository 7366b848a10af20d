//! Semester calendar engine: weeks and days over a fixed date range, meetings
//! and weekly lessons that never overlap, and deadline tasks with completion
//! statistics.

pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod input;
pub mod time;
pub mod service;

pub use config::Config;
pub use error::{CalendarError, DocumentError};
pub use model::activity::{Activity, ActivityKind, ActivityReference, Lesson, Meeting};
pub use model::calendar::Calendar;
pub use model::semester::{SemesterLayout, WeekLabel};
pub use model::stats::TaskCompletionStatistics;
pub use model::task::{Task, TaskReference};
pub use repository::{CalendarDocument, CalendarRepository, FileCalendarRepository};
pub use input::{parse_args, expand_key, ParsedInput};
pub use time::{parse_date, parse_time, parse_weekday};
pub use service::calendar_service::CalendarService;
pub use service::dto::{ActivityDto, Dashboard, TaskDto};
