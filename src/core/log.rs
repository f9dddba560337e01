use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::use_color;
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Colour of the operation column
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "vacation" => Colour::Cyan,
        "import" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn entries(pool: &mut DbPool) -> AppResult<Vec<LogEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = Self::entries(pool)?;

        println!("📜 Internal log:\n");

        let mut table = Table::new(vec![
            Column::right("id"),
            Column::left("date"),
            Column::left("operation"),
            Column::left("target"),
            Column::left("message"),
        ]);

        for e in &entries {
            let op = if use_color() {
                color_for_operation(&e.operation).paint(e.operation.as_str()).to_string()
            } else {
                e.operation.clone()
            };

            table.add_row(vec![
                e.id.to_string(),
                e.date.clone(),
                op,
                truncate(&e.target, 40),
                e.message.clone(),
            ]);
        }

        print!("{}", table.render());
        Ok(())
    }
}
