use crate::core::days::inclusive_days;
use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// One continuous absence. Can only be built through validation,
/// so `start <= end` holds for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VacationInterval {
    start: NaiveDate, // ⇔ vacations.start_date (TEXT "YYYY-MM-DD")
    end: NaiveDate,   // ⇔ vacations.end_date   (TEXT "YYYY-MM-DD")
    days: i64,        // ⇔ vacations.days  (cached inclusive span)
}

impl VacationInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidDateRange(format!(
                "end {} is before start {}",
                end.format("%Y-%m-%d"),
                start.format("%Y-%m-%d")
            )));
        }

        Ok(Self {
            start,
            end,
            days: inclusive_days(start, end),
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> i64 {
        self.days
    }

    /// Both bounds inclusive.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,                          // ⇔ employees.id (0 = not stored yet)
    pub name: String,                     // ⇔ employees.name
    pub position: String,                 // ⇔ employees.position
    pub total_days: u32,                  // ⇔ employees.total_days
    pub vacations: Vec<VacationInterval>, // ⇔ vacations rows ordered by seq
    pub color: String,                    // ⇔ employees.color (assigned once)
    pub created_at: String,               // ⇔ employees.created_at (ISO8601)
}

impl Employee {
    /// Builds an employee that has not been stored yet (`id = 0`).
    pub fn new(name: &str, position: &str, total_days: u32, color: &str) -> Self {
        Self {
            id: 0,
            name: name.trim().to_string(),
            position: position.trim().to_string(),
            total_days,
            vacations: Vec::new(),
            color: color.to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn with_vacations(mut self, vacations: Vec<VacationInterval>) -> Self {
        self.vacations = vacations;
        self
    }

    pub fn is_absent_on(&self, date: NaiveDate) -> bool {
        self.vacations.iter().any(|v| v.covers(date))
    }

    /// First letter of each word of the name, as used for compact calendar labels.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}
