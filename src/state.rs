use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::EventRepository;
use crate::error::{ApiError, AppError};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub event_repo: Arc<dyn EventRepository>,
}

impl AppState {
    /// Binds `error` to this deployment's diagnostics setting.
    pub fn reject(&self, error: AppError) -> ApiError {
        ApiError::new(error, &self.config)
    }
}
