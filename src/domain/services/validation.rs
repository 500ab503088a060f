use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// The header of a batch submission once every rule has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBatch {
    pub event: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Parses `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or an RFC 3339 timestamp,
/// keeping only the calendar date.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok().map(|dt| dt.date()))
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn required_text<'a>(field: &str, value: Option<&'a str>, violations: &mut Vec<String>) -> Option<&'a str> {
    match value {
        None => {
            violations.push(format!("'{}' is required.", field));
            None
        }
        Some(v) if v.trim().is_empty() => {
            violations.push(format!("'{}' must not be empty.", field));
            None
        }
        Some(v) => Some(v),
    }
}

fn required_date(field: &str, value: Option<&str>, violations: &mut Vec<String>) -> Option<NaiveDate> {
    let raw = required_text(field, value, violations)?;
    let date = parse_calendar_date(raw);
    if date.is_none() {
        violations.push(format!("'{}' is not a valid date.", field));
    }
    date
}

/// Checks the event name and the `from`/`to` range of a batch submission.
/// Returns every violated rule, one message each, or the parsed header.
pub fn validate_batch(
    event: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<ValidBatch, Vec<String>> {
    let mut violations = Vec::new();

    let event = required_text("event", event, &mut violations);
    let from = required_date("from", from, &mut violations);
    let to = required_date("to", to, &mut violations);

    // The range rule is attached to both bounds.
    if let (Some(from), Some(to)) = (from, to) {
        if !(to > from && from < to) {
            violations.push("'from' Invalid date range.".to_string());
            violations.push("'to' Invalid date range.".to_string());
        }
    }

    match (event, from, to) {
        (Some(event), Some(from), Some(to)) if violations.is_empty() => Ok(ValidBatch {
            event: event.to_string(),
            from,
            to,
        }),
        _ => Err(violations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_accepts_strict_range() {
        let batch = validate_batch(Some("Retreat"), Some("2024-03-01"), Some("2024-03-05")).unwrap();
        assert_eq!(batch, ValidBatch { event: "Retreat".into(), from: date(2024, 3, 1), to: date(2024, 3, 5) });
    }

    #[test]
    fn test_equal_bounds_rejected_on_both_fields() {
        let violations = validate_batch(Some("Retreat"), Some("2024-03-01"), Some("2024-03-01")).unwrap_err();
        assert_eq!(violations, vec!["'from' Invalid date range.", "'to' Invalid date range."]);
    }

    #[test]
    fn test_reversed_range_rejected() {
        let violations = validate_batch(Some("Retreat"), Some("2024-03-09"), Some("2024-03-01")).unwrap_err();
        assert!(violations.iter().all(|v| v.ends_with("Invalid date range.")));
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_missing_fields_reported_individually() {
        let violations = validate_batch(None, None, None).unwrap_err();
        assert_eq!(violations, vec!["'event' is required.", "'from' is required.", "'to' is required."]);
    }

    #[test]
    fn test_blank_and_unparseable_values() {
        let violations = validate_batch(Some("  "), Some(""), Some("next tuesday")).unwrap_err();
        assert_eq!(
            violations,
            vec!["'event' must not be empty.", "'from' must not be empty.", "'to' is not a valid date."]
        );
    }

    #[test]
    fn test_range_skipped_when_a_bound_is_invalid() {
        let violations = validate_batch(Some("Retreat"), Some("2024-13-01"), Some("2024-03-01")).unwrap_err();
        assert_eq!(violations, vec!["'from' is not a valid date."]);
    }

    #[test]
    fn test_parse_calendar_date_formats() {
        assert_eq!(parse_calendar_date("2024-02-29"), Some(date(2024, 2, 29)));
        assert_eq!(parse_calendar_date("2024-02-29 18:30:00"), Some(date(2024, 2, 29)));
        assert_eq!(parse_calendar_date("2024-02-29T23:00:00+02:00"), Some(date(2024, 2, 29)));
        assert_eq!(parse_calendar_date("2023-02-29"), None);
        assert_eq!(parse_calendar_date("29/02/2024"), None);
    }
}
