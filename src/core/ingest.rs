//! Ingestion boundary: loosely shaped records in, fully typed employees out.
//!
//! Nothing here is fatal for a batch. A record without a name (or with a
//! negative allotment) is discarded, an interval that fails validation is
//! dropped, and the `IngestReport` counts what was left out.

use crate::core::colors::{ColorAssigner, is_valid_tag};
use crate::core::interval::validate_optional;
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, EmployeeRecord, VacationInterval};

#[derive(Debug)]
pub struct Normalized {
    pub employee: Employee,
    pub dropped_intervals: usize,
    /// Intervals whose declared `days` disagreed with the computed span.
    pub days_mismatches: usize,
}

#[derive(Debug, Default)]
pub struct IngestReport {
    pub accepted: usize,
    pub discarded: Vec<AppError>,
    pub dropped_intervals: usize,
    pub days_mismatches: usize,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.discarded.is_empty() && self.dropped_intervals == 0
    }
}

/// Validate one record. `color` is used when the record carries no
/// usable tag of its own.
pub fn normalize_record(rec: &EmployeeRecord, color: &str) -> AppResult<Normalized> {
    let name = rec
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::MissingRequiredField("name".into()))?;

    let total = rec.total_days.unwrap_or(0);
    if total < 0 {
        return Err(AppError::InvalidAllotment(total));
    }
    let total = u32::try_from(total).map_err(|_| AppError::InvalidAllotment(total))?;

    let mut vacations: Vec<VacationInterval> = Vec::with_capacity(rec.vacations.len());
    let mut dropped = 0;
    let mut mismatches = 0;

    for v in &rec.vacations {
        match validate_optional(v.start.as_deref(), v.end.as_deref()) {
            Ok(interval) => {
                if v.days.is_some_and(|d| d != interval.days()) {
                    mismatches += 1;
                }
                vacations.push(interval);
            }
            Err(_) => dropped += 1,
        }
    }

    let color = rec
        .color
        .as_deref()
        .map(str::trim)
        .filter(|c| is_valid_tag(c))
        .unwrap_or(color);

    let employee = Employee::new(name, rec.position.as_deref().unwrap_or_default(), total, color)
        .with_vacations(vacations);

    Ok(Normalized {
        employee,
        dropped_intervals: dropped,
        days_mismatches: mismatches,
    })
}

/// Normalize a batch. Colors are assigned by ordinal, starting at
/// `first_index` (the number of employees already in the collection).
pub fn ingest(
    records: &[EmployeeRecord],
    assigner: &ColorAssigner,
    first_index: usize,
) -> (Vec<Employee>, IngestReport) {
    let mut out = Vec::with_capacity(records.len());
    let mut report = IngestReport::default();

    for rec in records {
        let color = assigner.tag_for(first_index + out.len());
        match normalize_record(rec, &color) {
            Ok(n) => {
                report.dropped_intervals += n.dropped_intervals;
                report.days_mismatches += n.days_mismatches;
                out.push(n.employee);
            }
            Err(e) => report.discarded.push(e),
        }
    }

    report.accepted = out.len();
    (out, report)
}
