use crate::domain::models::event::DateSelection;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

/// Body of `POST /api/event/create`. `event`, `from` and `to` stay raw so
/// that missing or malformed values surface as validation messages.
#[derive(Deserialize)]
pub struct CreateEventsRequest {
    pub event: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(default)]
    pub dates: Vec<DateSelection>,
}
