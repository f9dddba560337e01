// src/import/csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::{EmployeeRecord, VacationRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Spreadsheet column → record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Field {
    Name,
    Position,
    Start,
    End,
    Days,
    TotalDays,
    Color,
}

fn normalize_header(h: &str) -> String {
    h.trim_start_matches('\u{feff}')
        .trim()
        .to_lowercase()
        .replace([' ', '-'], "_")
}

fn field_for(header: &str) -> Option<Field> {
    match normalize_header(header).as_str() {
        "name" | "full_name" | "fullname" | "employee" | "фио" | "сотрудник" => {
            Some(Field::Name)
        }
        "position" | "role" | "title" | "должность" => Some(Field::Position),
        "start" | "start_date" | "from" | "начало" | "дата_начала" => Some(Field::Start),
        "end" | "end_date" | "to" | "окончание" | "дата_окончания" => Some(Field::End),
        "days" | "дней" | "количество_дней" => Some(Field::Days),
        "total_days" | "total" | "allotment" | "всего" | "всего_дней" => {
            Some(Field::TotalDays)
        }
        "color" | "цвет" => Some(Field::Color),
        _ => None,
    }
}

struct Columns(HashMap<Field, usize>);

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut map = HashMap::new();
        for (idx, h) in headers.iter().enumerate() {
            if let Some(f) = field_for(h) {
                map.entry(f).or_insert(idx);
            }
        }
        Columns(map)
    }

    fn get<'r>(&self, row: &'r StringRecord, f: Field) -> Option<&'r str> {
        self.0
            .get(&f)
            .and_then(|idx| row.get(*idx))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Parse tabular rows (one vacation per row) and group them by name,
/// in first-seen order. Rows without a name are returned as discarded.
pub fn parse_csv_records<R: Read>(reader: R) -> AppResult<(Vec<EmployeeRecord>, Vec<AppError>)> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let cols = Columns::from_headers(rdr.headers()?);
    if !cols.0.contains_key(&Field::Name) {
        return Err(AppError::Import("no name column found in header".into()));
    }

    let mut records: Vec<EmployeeRecord> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();
    let mut discarded = Vec::new();

    for (line, row) in rdr.records().enumerate() {
        let row = row?;

        let Some(name) = cols.get(&row, Field::Name) else {
            discarded.push(AppError::MissingRequiredField(format!(
                "name (data row {})",
                line + 1
            )));
            continue;
        };

        let idx = *by_name.entry(name.to_string()).or_insert_with(|| {
            records.push(EmployeeRecord {
                name: Some(name.to_string()),
                ..Default::default()
            });
            records.len() - 1
        });
        let rec = &mut records[idx];

        if rec.position.is_none() {
            rec.position = cols.get(&row, Field::Position).map(str::to_string);
        }
        if rec.total_days.is_none() {
            rec.total_days = cols
                .get(&row, Field::TotalDays)
                .and_then(|s| s.parse::<i64>().ok());
        }
        if rec.color.is_none() {
            rec.color = cols.get(&row, Field::Color).map(str::to_string);
        }

        let start = cols.get(&row, Field::Start);
        let end = cols.get(&row, Field::End);
        if start.is_some() || end.is_some() {
            rec.vacations.push(VacationRecord {
                start: start.map(str::to_string),
                end: end.map(str::to_string),
                days: cols
                    .get(&row, Field::Days)
                    .and_then(|s| s.parse::<i64>().ok()),
            });
        }
    }

    Ok((records, discarded))
}

pub fn read_csv_records(path: &Path) -> AppResult<(Vec<EmployeeRecord>, Vec<AppError>)> {
    let file = File::open(path)?;
    parse_csv_records(file)
}
