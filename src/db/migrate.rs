use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migrations record themselves there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Run `sql` once and mark `version` as applied in the log table.
fn apply_migration(conn: &Connection, version: &str, message: &str, sql: &str) -> Result<()> {
    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(sql)?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;

    success(format!("Migration applied: {} → {}", version, message));
    Ok(())
}

const CREATE_EMPLOYEES: &str = r#"
    CREATE TABLE IF NOT EXISTS employees (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        name        TEXT NOT NULL,
        position    TEXT NOT NULL DEFAULT '',
        total_days  INTEGER NOT NULL DEFAULT 0 CHECK(total_days >= 0),
        color       TEXT NOT NULL,
        created_at  TEXT NOT NULL
    );
"#;

const CREATE_VACATIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS vacations (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id INTEGER NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
        seq         INTEGER NOT NULL,
        start_date  TEXT NOT NULL,
        end_date    TEXT NOT NULL,
        days        INTEGER NOT NULL
    );
"#;

const INDEX_VACATIONS: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_vacations_employee_seq ON vacations(employee_id, seq);
    CREATE INDEX IF NOT EXISTS idx_vacations_range ON vacations(start_date, end_date);
"#;

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    apply_migration(
        conn,
        "20250301_0001_create_employees",
        "created employees table",
        CREATE_EMPLOYEES,
    )?;
    apply_migration(
        conn,
        "20250301_0002_create_vacations",
        "created vacations table",
        CREATE_VACATIONS,
    )?;
    apply_migration(
        conn,
        "20250412_0003_index_vacations",
        "indexed vacations by employee and range",
        INDEX_VACATIONS,
    )?;

    Ok(())
}
