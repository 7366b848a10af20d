use crate::repository::document::CalendarDocument;
use anyhow::Result;

pub trait CalendarRepository {
    /// `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<CalendarDocument>>;
    fn save(&self, document: &CalendarDocument) -> Result<()>;
}
