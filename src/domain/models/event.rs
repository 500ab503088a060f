use serde::{Deserialize, Deserializer, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::services::validation::parse_calendar_date;

/// A single date-to-event-name association. `schedule` is unique.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct EventRecord {
    pub id: String,
    pub schedule: NaiveDate,
    pub event: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EventRecord {
    pub fn new(schedule: NaiveDate, event: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            schedule,
            event: Some(event),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct DateSelection {
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    #[serde(rename = "isSelected")]
    pub is_selected: bool,
}

/// Entry dates accept the same forms as the batch bounds.
fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date '{}'", raw)))
}
