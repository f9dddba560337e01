//! Per-year holiday overlay.
//!
//! Holidays are plain data: one set of dates per supported year. A date is
//! classified as `Holiday` when present in its year's set, otherwise as
//! `Weekend` on Saturday/Sunday and `Workday` for the rest. Years without a
//! configured set only distinguish weekends from workdays.

use crate::errors::{AppError, AppResult};
use crate::models::DayClass;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::{BTreeMap, BTreeSet};

/// Federal non-working days (holidays and transferred days off), 2025.
const HOLIDAYS_2025: &[&str] = &[
    "2025-01-01",
    "2025-01-02",
    "2025-01-03",
    "2025-01-04",
    "2025-01-05",
    "2025-01-06",
    "2025-01-07",
    "2025-01-08",
    "2025-02-23",
    "2025-03-08",
    "2025-05-01",
    "2025-05-02",
    "2025-05-08",
    "2025-05-09",
    "2025-06-12",
    "2025-06-13",
    "2025-11-03",
    "2025-11-04",
    "2025-12-31",
];

/// Federal non-working days (holidays and transferred days off), 2026.
const HOLIDAYS_2026: &[&str] = &[
    "2026-01-01",
    "2026-01-02",
    "2026-01-03",
    "2026-01-04",
    "2026-01-05",
    "2026-01-06",
    "2026-01-07",
    "2026-01-08",
    "2026-01-09",
    "2026-02-23",
    "2026-03-08",
    "2026-03-09",
    "2026-05-01",
    "2026-05-09",
    "2026-05-11",
    "2026-06-12",
    "2026-11-04",
    "2026-12-31",
];

const BUILTIN_SETS: &[(i32, &[&str])] = &[(2025, HOLIDAYS_2025), (2026, HOLIDAYS_2026)];

#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    sets: BTreeMap<i32, BTreeSet<NaiveDate>>,
}

impl HolidayCalendar {
    /// Calendar without any holiday: weekends and workdays only.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Calendar loaded with the sets shipped in the binary.
    pub fn builtin() -> Self {
        let mut cal = Self::empty();
        for (year, dates) in BUILTIN_SETS {
            let parsed = dates
                .iter()
                .filter_map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
            cal = cal.with_year(*year, parsed);
        }
        cal
    }

    /// Built-in sets, with any year configured in `overrides` replacing
    /// the built-in one.
    pub fn with_overrides(overrides: &BTreeMap<i32, Vec<String>>) -> AppResult<Self> {
        let mut cal = Self::builtin();

        for (year, raw_dates) in overrides {
            let mut dates = Vec::with_capacity(raw_dates.len());
            for raw in raw_dates {
                let d = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| AppError::Config(format!("invalid holiday date '{raw}'")))?;
                if d.year() != *year {
                    return Err(AppError::Config(format!(
                        "holiday '{raw}' is listed under year {year}"
                    )));
                }
                dates.push(d);
            }
            cal = cal.with_year(*year, dates);
        }

        Ok(cal)
    }

    /// Replace (or add) the holiday set for `year`.
    pub fn with_year<I>(mut self, year: i32, dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        self.sets.insert(year, dates.into_iter().collect());
        self
    }

    pub fn has_year(&self, year: i32) -> bool {
        self.sets.contains_key(&year)
    }

    pub fn holidays_in(&self, year: i32) -> Vec<NaiveDate> {
        self.sets
            .get(&year)
            .map(|s| s.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.sets
            .get(&date.year())
            .is_some_and(|set| set.contains(&date))
    }

    pub fn classify(&self, date: NaiveDate) -> DayClass {
        if self.is_holiday(date) {
            DayClass::Holiday
        } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            DayClass::Weekend
        } else {
            DayClass::Workday
        }
    }
}
