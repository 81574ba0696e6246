use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

const DELIMITER: &str = " - ";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A pair of calendar dates in the order the user entered them.
///
/// No ordering is enforced: `start` may fall after `end`.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn is_chronological(&self) -> bool {
        self.start <= self.end
    }
}

/// Parses a `YYYY-MM-DD - YYYY-MM-DD` filter value.
///
/// An empty or absent value means no filter and yields `Ok(None)`.
pub fn parse(raw: Option<&str>) -> Result<Option<DateRange>, ValidationError> {
    let raw = match raw {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    let parts: Vec<&str> = raw.split(DELIMITER).collect();
    let &[start, end] = parts.as_slice() else {
        debug!(raw, parts = parts.len(), "date range is not a pair");
        return Err(ValidationError::IncompleteDateRange);
    };

    let range = DateRange {
        start: parse_date(start)?,
        end: parse_date(end)?,
    };
    Ok(Some(range))
}

/// Same as [`parse`], for values that arrive as untyped JSON.
///
/// `null` counts as absent; anything that is not a string is rejected.
pub fn parse_value(raw: &Value) -> Result<Option<DateRange>, ValidationError> {
    match raw {
        Value::Null => Ok(None),
        Value::String(text) => parse(Some(text.as_str())),
        other => {
            debug!(%other, "date range is not a string");
            Err(ValidationError::InvalidDateRange)
        }
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|err| {
        debug!(text, %err, "invalid date");
        ValidationError::InvalidDateRange
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_means_no_filter() {
        assert_eq!(parse(Some("")), Ok(None));
        assert_eq!(parse(None), Ok(None));
    }

    #[test]
    fn test_valid_range() {
        let range = parse(Some("2024-01-01 - 2024-01-31")).unwrap().unwrap();
        assert_eq!(range.start, date(2024, 1, 1));
        assert_eq!(range.end, date(2024, 1, 31));
        assert!(range.is_chronological());
    }

    #[test]
    fn test_reversed_range_is_kept_in_input_order() {
        let range = parse(Some("2024-01-31 - 2024-01-01")).unwrap().unwrap();
        assert_eq!(range.start, date(2024, 1, 31));
        assert_eq!(range.end, date(2024, 1, 1));
        assert!(!range.is_chronological());
    }

    #[rstest]
    #[case("2024-01-01")]
    #[case("2024-01-01-2024-01-31")]
    #[case("2024-01-01 - 2024-01-15 - 2024-01-31")]
    fn test_not_a_pair(#[case] raw: &str) {
        assert_eq!(parse(Some(raw)), Err(ValidationError::IncompleteDateRange));
    }

    #[rstest]
    #[case("2024-13-40 - 2024-01-31")]
    #[case("2024-01-01 - 2024-02-30")]
    #[case("yesterday - today")]
    #[case("01/01/2024 - 01/31/2024")]
    fn test_invalid_dates(#[case] raw: &str) {
        assert_eq!(parse(Some(raw)), Err(ValidationError::InvalidDateRange));
    }

    #[test]
    fn test_untyped_values() {
        assert_eq!(parse_value(&Value::Null), Ok(None));
        assert!(parse_value(&json!("2024-01-01 - 2024-01-31"))
            .unwrap()
            .is_some());
        assert_eq!(
            parse_value(&json!(20240101)),
            Err(ValidationError::InvalidDateRange)
        );
        assert_eq!(
            parse_value(&json!(["2024-01-01", "2024-01-31"])),
            Err(ValidationError::InvalidDateRange)
        );
        assert_eq!(
            parse_value(&json!("2024-01-01")),
            Err(ValidationError::IncompleteDateRange)
        );
    }
}
