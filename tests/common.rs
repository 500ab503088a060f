use event_calendar::{
    api::router::create_router,
    state::AppState,
    config::Config,
    domain::{models::event::EventRecord, ports::EventRepository},
    infra::{
        factory::{connect_sqlite, run_sqlite_migrations},
        repositories::sqlite_event_repo::SqliteEventRepo,
    },
    error::AppError,
};
use sqlx::{Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, header},
    response::Response,
    Router,
};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tower::ServiceExt;
use serde_json::Value;

/// Repository whose every call fails like a dropped database connection.
#[allow(dead_code)]
pub struct FailingEventRepo;

#[async_trait]
impl EventRepository for FailingEventRepo {
    async fn list_by_month(&self, _month: u32) -> Result<Vec<EventRecord>, AppError> {
        Err(AppError::from(sqlx::Error::PoolClosed))
    }

    async fn find_by_schedule(&self, _schedule: NaiveDate) -> Result<Option<EventRecord>, AppError> {
        Err(AppError::from(sqlx::Error::PoolClosed))
    }

    async fn upsert(&self, _schedule: NaiveDate, _event: &str) -> Result<EventRecord, AppError> {
        Err(AppError::from(sqlx::Error::PoolClosed))
    }

    async fn delete_by_schedule(&self, _schedule: NaiveDate) -> Result<u64, AppError> {
        Err(AppError::from(sqlx::Error::PoolClosed))
    }
}

pub fn test_config(database_url: &str, expose_diagnostics: bool) -> Config {
    Config {
        database_url: database_url.to_string(),
        port: 0,
        app_env: "test".to_string(),
        expose_diagnostics,
        log_dir: "./logs".to_string(),
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let pool = connect_sqlite(&db_url)
            .await
            .expect("Failed to connect to test db");

        run_sqlite_migrations(&pool)
            .await
            .expect("Failed to migrate test db");

        let state = Arc::new(AppState {
            config: test_config(&db_url, true),
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }

    pub async fn post_json(&self, uri: &str, payload: &Value) -> Response {
        self.post_raw(uri, payload.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap()
        ).await.unwrap()
    }

    /// Inserts a row directly, bypassing the API. `event = None` stores a
    /// date without an event name.
    pub async fn seed(&self, schedule: &str, event: Option<&str>) {
        sqlx::query("INSERT INTO events (id, schedule, event, created_at, updated_at) VALUES (?, ?, ?, ?, ?)")
            .bind(Uuid::new_v4().to_string())
            .bind(NaiveDate::parse_from_str(schedule, "%Y-%m-%d").unwrap())
            .bind(event)
            .bind(Utc::now())
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .expect("Failed to seed event");
    }

    pub async fn find(&self, schedule: &str) -> Option<EventRecord> {
        let date = NaiveDate::parse_from_str(schedule, "%Y-%m-%d").unwrap();
        self.state.event_repo.find_by_schedule(date).await.unwrap()
    }

    pub async fn count(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

/// Router backed by [`FailingEventRepo`].
#[allow(dead_code)]
pub fn failing_router(expose_diagnostics: bool) -> Router {
    let state = Arc::new(AppState {
        config: test_config("sqlite::memory:", expose_diagnostics),
        event_repo: Arc::new(FailingEventRepo),
    });
    create_router(state)
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
