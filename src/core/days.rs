//! Inclusive day counting over calendar dates.

use crate::models::Employee;
use chrono::{Datelike, NaiveDate};

/// Days since 0001-01-01 (proleptic Gregorian). Only differences matter.
pub fn epoch_days(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64
}

/// Number of calendar days spanned by `start..=end`, counting both ends.
///
/// `inclusive_days(d, d) == 1`. Callers must not pass `end < start`;
/// such ranges are rejected by interval validation before reaching here.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    epoch_days(end) - epoch_days(start) + 1
}

/// Sum of the employee's interval day counts. Overlapping intervals are
/// counted twice and the total is not clamped against the allotment.
pub fn used_days(employee: &Employee) -> i64 {
    employee.vacations.iter().map(|v| v.days()).sum()
}

/// Allotment minus used days. Negative when the employee is over budget.
pub fn remaining_days(employee: &Employee) -> i64 {
    employee.total_days as i64 - used_days(employee)
}
