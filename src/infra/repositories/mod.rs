pub mod sqlite_event_repo;
pub mod postgres_event_repo;
