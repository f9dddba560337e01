//! Validation of raw (start, end) pairs into `VacationInterval` values.

use crate::errors::{AppError, AppResult};
use crate::models::VacationInterval;
use chrono::NaiveDate;

fn parse_endpoint(label: &str, raw: &str) -> AppResult<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(AppError::InvalidDateRange(format!("missing {label} date")));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDateRange(format!("unparseable {label} date '{s}'")))
}

/// Parse both endpoints as `YYYY-MM-DD` and check `end >= start`.
///
/// The returned interval renders both ends canonically (`start_str()` /
/// `end_str()`), so `" 2026-6-1"` style inputs come back as `2026-06-01`.
pub fn validate_interval(start: &str, end: &str) -> AppResult<VacationInterval> {
    let s = parse_endpoint("start", start)?;
    let e = parse_endpoint("end", end)?;
    VacationInterval::new(s, e)
}

/// Same as `validate_interval`, for records whose endpoints may be absent.
pub fn validate_optional(start: Option<&str>, end: Option<&str>) -> AppResult<VacationInterval> {
    validate_interval(start.unwrap_or_default(), end.unwrap_or_default())
}

/// Parse a `START:END` argument as given on the command line.
pub fn parse_span(span: &str) -> AppResult<VacationInterval> {
    let (start, end) = span.split_once(':').ok_or_else(|| {
        AppError::InvalidDateRange(format!("'{span}' is not in the form START:END"))
    })?;
    validate_interval(start, end)
}
