// src/export/model.rs

use crate::core::grid::MonthGrid;
use crate::core::summary::Usage;
use crate::models::DayClass;
use serde::Serialize;

/// Rows that can be laid out in a sheet.
pub(crate) trait TabularRow {
    fn headers() -> Vec<&'static str>;
    fn to_row(&self) -> Vec<String>;
    /// Background override for the whole row (RGB), if any.
    fn highlight(&self) -> Option<u32> {
        None
    }
}

/// Flat per-employee usage row.
#[derive(Serialize, Clone, Debug)]
pub struct UsageExport {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub total_days: u32,
    pub used_days: i64,
    pub remaining_days: i64,
    pub vacations: String,
    pub color: String,
}

impl From<&Usage<'_>> for UsageExport {
    fn from(u: &Usage<'_>) -> Self {
        let vacations = u
            .employee
            .vacations
            .iter()
            .map(|v| format!("{}..{}", v.start_str(), v.end_str()))
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            id: u.employee.id,
            name: u.employee.name.clone(),
            position: u.employee.position.clone(),
            total_days: u.employee.total_days,
            used_days: u.used_days,
            remaining_days: u.remaining_days,
            vacations,
            color: u.employee.color.clone(),
        }
    }
}

impl TabularRow for UsageExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "id",
            "name",
            "position",
            "total_days",
            "used_days",
            "remaining_days",
            "vacations",
            "color",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.position.clone(),
            self.total_days.to_string(),
            self.used_days.to_string(),
            self.remaining_days.to_string(),
            self.vacations.clone(),
            self.color.clone(),
        ]
    }

    fn highlight(&self) -> Option<u32> {
        (self.remaining_days < 0).then_some(0xF8D7DA)
    }
}

/// One calendar day with its classification and absences.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub weekday: String,
    pub classification: DayClass,
    pub absent_count: usize,
    pub absent: String,
}

impl TabularRow for DayExport {
    fn headers() -> Vec<&'static str> {
        vec!["date", "weekday", "classification", "absent_count", "absent"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.weekday.clone(),
            self.classification.as_str().to_string(),
            self.absent_count.to_string(),
            self.absent.clone(),
        ]
    }

    fn highlight(&self) -> Option<u32> {
        match self.classification {
            DayClass::Holiday => Some(0xFCE4EC),
            DayClass::Weekend => Some(0xF2F2F2),
            DayClass::Workday => None,
        }
    }
}

/// Flatten grids into one row per real day (padding is a layout concern).
pub(crate) fn grids_to_days(grids: &[MonthGrid]) -> Vec<DayExport> {
    grids
        .iter()
        .flat_map(|g| g.days.iter())
        .map(|cell| DayExport {
            date: cell.date.format("%Y-%m-%d").to_string(),
            weekday: cell.date.format("%a").to_string(),
            classification: cell.classification,
            absent_count: cell.occupants.len(),
            absent: cell
                .occupants
                .iter()
                .map(|o| o.name.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        })
        .collect()
}
