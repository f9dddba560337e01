// src/export/logic.rs

use crate::config::Config;
use crate::core::grid::{MonthGrid, build_month, build_year};
use crate::core::holidays::HolidayCalendar;
use crate::core::summary::usage;
use crate::db::pool::DbPool;
use crate::db::queries::load_employees;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DayExport, TabularRow, UsageExport, grids_to_days};
use crate::export::xlsx::export_xlsx;
use crate::models::Employee;
use crate::ui::messages::warning;
use crate::utils::date::{Period, parse_period};
use crate::utils::path::expand_tilde;
use serde::Serialize;
use std::path::Path;

/// What gets exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// One row per employee with used / remaining days.
    Usage,
    /// One row per calendar day of the period.
    Calendar(Period),
}

pub struct ExportLogic;

impl ExportLogic {
    /// Entry point used by the `export` command.
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        calendar: bool,
        period: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);
        ensure_writable(&path, force)?;
        ensure_parent(&path)?;

        let kind = if calendar {
            let p = match period {
                Some(p) => parse_period(p).map_err(AppError::InvalidDate)?,
                None => Period::current_month(),
            };
            ExportKind::Calendar(p)
        } else {
            ExportKind::Usage
        };

        let employees = load_employees(pool)?;
        let holidays = cfg.holiday_calendar()?;

        Self::write(&employees, &holidays, kind, format, &path)
    }

    /// Pure part of the export: snapshot in, file out.
    pub fn write(
        employees: &[Employee],
        holidays: &HolidayCalendar,
        kind: ExportKind,
        format: &ExportFormat,
        path: &Path,
    ) -> AppResult<()> {
        match kind {
            ExportKind::Usage => {
                let rows: Vec<UsageExport> = usage(employees).iter().map(UsageExport::from).collect();
                if rows.is_empty() {
                    warning("No employees to export.");
                }
                write_rows(&rows, format, path, "Usage")
            }
            ExportKind::Calendar(period) => {
                let grids: Vec<MonthGrid> = match period {
                    Period::Month(y, m) => vec![build_month(y, m, employees, holidays)?],
                    Period::Year(y) => build_year(y, employees, holidays)?,
                };
                let rows: Vec<DayExport> = grids_to_days(&grids);
                write_rows(&rows, format, path, "Calendar")
            }
        }
    }
}

fn write_rows<T>(rows: &[T], format: &ExportFormat, path: &Path, sheet: &str) -> AppResult<()>
where
    T: Serialize + TabularRow,
{
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
        ExportFormat::Xlsx => export_xlsx(rows, path, sheet),
    }
}
