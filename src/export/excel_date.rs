// src/export/excel_date.rs

use chrono::NaiveDate;

/// Excel serial (days since 1899-12-30) of an ISO `YYYY-MM-DD` string.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(date_to_excel_serial(d))
}

pub(crate) fn date_to_excel_serial(d: NaiveDate) -> f64 {
    // 1899-12-30 is always a valid date
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (d - excel_epoch).num_days() as f64
}
