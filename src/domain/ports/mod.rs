use crate::domain::models::event::EventRecord;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Records scheduled in `month` (1-12) of any year that carry an event name,
    /// ordered by `schedule`.
    async fn list_by_month(&self, month: u32) -> Result<Vec<EventRecord>, AppError>;
    async fn find_by_schedule(&self, schedule: NaiveDate) -> Result<Option<EventRecord>, AppError>;
    /// Creates the record for `schedule` or replaces its event name.
    async fn upsert(&self, schedule: NaiveDate, event: &str) -> Result<EventRecord, AppError>;
    /// Returns the number of rows removed; zero when nothing was scheduled.
    async fn delete_by_schedule(&self, schedule: NaiveDate) -> Result<u64, AppError>;
}
