use crate::domain::{models::event::EventRecord, ports::EventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepo {
    async fn list_by_month(&self, month: u32) -> Result<Vec<EventRecord>, AppError> {
        let records = sqlx::query_as::<_, EventRecord>(
            r#"SELECT * FROM events
               WHERE EXTRACT(MONTH FROM schedule)::INT = $1
               AND event IS NOT NULL
               ORDER BY schedule"#,
        )
            .bind(month as i32)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    async fn find_by_schedule(&self, schedule: NaiveDate) -> Result<Option<EventRecord>, AppError> {
        let record = sqlx::query_as::<_, EventRecord>(
            "SELECT * FROM events WHERE schedule = $1",
        )
            .bind(schedule)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    async fn upsert(&self, schedule: NaiveDate, event: &str) -> Result<EventRecord, AppError> {
        let now = Utc::now();
        let changed = sqlx::query_as::<_, EventRecord>(
            r#"INSERT INTO events (id, schedule, event, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5)
               ON CONFLICT(schedule) DO UPDATE SET
               event=excluded.event,
               updated_at=excluded.updated_at
               WHERE events.event IS DISTINCT FROM excluded.event
               RETURNING *"#
        )
            .bind(Uuid::new_v4().to_string())
            .bind(schedule)
            .bind(event)
            .bind(now)
            .bind(now)
            .fetch_optional(&self.pool)
            .await?;

        match changed {
            Some(record) => Ok(record),
            None => self.find_by_schedule(schedule).await?
                .ok_or_else(|| AppError::internal(format!("Event on {} vanished during upsert", schedule))),
        }
    }

    async fn delete_by_schedule(&self, schedule: NaiveDate) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM events WHERE schedule = $1")
            .bind(schedule)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
