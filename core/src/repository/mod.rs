pub mod document;
pub mod file;
pub mod traits;

// Re-export
pub use document::{ActivityRecord, CalendarDocument, TaskRecord};
pub use file::FileCalendarRepository;
pub use traits::CalendarRepository;
