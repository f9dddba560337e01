//! Week-aligned calendar grids with absences and holidays overlaid.
//!
//! A month is laid out Monday-first:
//!
//! ```text
//!  Mo Tu We Th Fr Sa Su     <- 7 headers
//!  .  .  .  .  .  .  1      <- leading blanks (Monday = 0 ... Sunday = 6)
//!  2  3  4  5  6  7  8
//!  ...
//!  23 24 25 26 27 28 .      <- trailing blanks up to a full week
//! ```
//!
//! `leading + days + trailing` is always a multiple of 7 and `trailing < 7`.

use crate::core::holidays::HolidayCalendar;
use crate::errors::{AppError, AppResult};
use crate::models::{DayClass, Employee};
use crate::utils::date::days_in_month;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Fixed header order.
pub const WEEK_HEADERS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occupant {
    pub employee_id: i64,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day_number: u32,
    pub classification: DayClass,
    pub occupants: Vec<Occupant>,
}

#[derive(Debug, Clone)]
pub enum GridCell<'a> {
    Header(Weekday),
    Blank,
    Day(&'a DayCell),
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub leading: usize,
    pub days: Vec<DayCell>,
    pub trailing: usize,
}

impl MonthGrid {
    /// Flat sequence: 7 headers, leading blanks, day cells, trailing blanks.
    pub fn cells(&self) -> Vec<GridCell<'_>> {
        let mut out = Vec::with_capacity(7 + self.leading + self.days.len() + self.trailing);
        out.extend(WEEK_HEADERS.iter().map(|w| GridCell::Header(*w)));
        out.extend((0..self.leading).map(|_| GridCell::Blank));
        out.extend(self.days.iter().map(GridCell::Day));
        out.extend((0..self.trailing).map(|_| GridCell::Blank));
        out
    }

    /// Rows of seven slots, `None` for padding.
    pub fn weeks(&self) -> Vec<[Option<&DayCell>; 7]> {
        let slots: Vec<Option<&DayCell>> = (0..self.leading)
            .map(|_| None)
            .chain(self.days.iter().map(Some))
            .chain((0..self.trailing).map(|_| None))
            .collect();

        slots
            .chunks(7)
            .map(|chunk| {
                let mut row = [None; 7];
                for (i, slot) in chunk.iter().enumerate() {
                    row[i] = *slot;
                }
                row
            })
            .collect()
    }

    /// Padded cell count without headers (multiple of 7).
    pub fn padded_len(&self) -> usize {
        self.leading + self.days.len() + self.trailing
    }

    pub fn day(&self, day_number: u32) -> Option<&DayCell> {
        self.days.iter().find(|d| d.day_number == day_number)
    }
}

/// Employees covering `date`, once per covering interval.
fn occupants_on(date: NaiveDate, employees: &[Employee]) -> Vec<Occupant> {
    let mut out = Vec::new();
    for emp in employees {
        for v in &emp.vacations {
            if v.covers(date) {
                out.push(Occupant {
                    employee_id: emp.id,
                    name: emp.name.clone(),
                    color: emp.color.clone(),
                });
            }
        }
    }
    out
}

pub fn build_month(
    year: i32,
    month: u32,
    employees: &[Employee],
    holidays: &HolidayCalendar,
) -> AppResult<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(AppError::InvalidMonth(month))?;
    let n_days = days_in_month(year, month).ok_or(AppError::InvalidMonth(month))?;

    let leading = first.weekday().num_days_from_monday() as usize;

    let mut days = Vec::with_capacity(n_days as usize);
    for date in first.iter_days().take(n_days as usize) {
        days.push(DayCell {
            date,
            day_number: date.day(),
            classification: holidays.classify(date),
            occupants: occupants_on(date, employees),
        });
    }

    let used = leading + days.len();
    let trailing = (7 - used % 7) % 7;

    Ok(MonthGrid {
        year,
        month,
        leading,
        days,
        trailing,
    })
}

/// Twelve consecutive months, January to December.
pub fn build_year(
    year: i32,
    employees: &[Employee],
    holidays: &HolidayCalendar,
) -> AppResult<Vec<MonthGrid>> {
    (1..=12)
        .map(|m| build_month(year, m, employees, holidays))
        .collect()
}
