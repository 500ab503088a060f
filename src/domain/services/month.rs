use chrono::{Datelike, Month, NaiveDate};
use std::str::FromStr;

use crate::error::AppError;

pub const MONTH_NAMES: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

pub const INVALID_MONTH_MESSAGE: &str = "Invalid 'month'!";

/// Resolves the `month` filter to 1-12. A missing or blank token means the
/// month of `today`; anything else must be exactly a full English month name,
/// in any case.
pub fn resolve_month(token: Option<&str>, today: NaiveDate) -> Result<u32, AppError> {
    let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
        return Ok(today.month());
    };

    let name = token.to_lowercase();
    // chrono also accepts "jan", "sept", ...; only full names are allowed here.
    if !MONTH_NAMES.contains(&name.as_str()) {
        return Err(AppError::validation(INVALID_MONTH_MESSAGE));
    }

    Month::from_str(&name)
        .map(|m| m.number_from_month())
        .map_err(|_| AppError::validation(INVALID_MONTH_MESSAGE))
}
