use crate::core::interval::validate_interval;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Employee, VacationInterval};
use rusqlite::{Connection, Result, Row, params};

struct EmployeeRow {
    id: i64,
    name: String,
    position: String,
    total_days: i64,
    color: String,
    created_at: String,
}

fn map_employee_row(row: &Row) -> Result<EmployeeRow> {
    Ok(EmployeeRow {
        id: row.get("id")?,
        name: row.get("name")?,
        position: row.get("position")?,
        total_days: row.get("total_days")?,
        color: row.get("color")?,
        created_at: row.get("created_at")?,
    })
}

/// Intervals of one employee in insertion order.
///
/// Rows that no longer validate (edited by hand, for instance) are skipped:
/// they must not reach day counts or grids.
pub fn load_vacations(conn: &Connection, employee_id: i64) -> AppResult<Vec<VacationInterval>> {
    let mut stmt = conn.prepare_cached(
        "SELECT start_date, end_date FROM vacations
         WHERE employee_id = ?1
         ORDER BY seq ASC, id ASC",
    )?;

    let rows = stmt.query_map([employee_id], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (start, end) = r?;
        if let Ok(v) = validate_interval(&start, &end) {
            out.push(v);
        }
    }
    Ok(out)
}

/// Snapshot of the whole collection, ordered by id (creation order).
pub fn load_employees(pool: &mut DbPool) -> AppResult<Vec<Employee>> {
    let rows: Vec<EmployeeRow> = {
        let mut stmt = pool.conn.prepare(
            "SELECT id, name, position, total_days, color, created_at
             FROM employees
             ORDER BY id ASC",
        )?;
        let mapped = stmt.query_map([], map_employee_row)?;
        mapped.collect::<Result<Vec<_>>>()?
    };

    let mut out = Vec::with_capacity(rows.len());
    for r in rows {
        let vacations = load_vacations(&pool.conn, r.id)?;
        out.push(Employee {
            id: r.id,
            name: r.name,
            position: r.position,
            total_days: r.total_days.max(0) as u32,
            vacations,
            color: r.color,
            created_at: r.created_at,
        });
    }
    Ok(out)
}

pub fn count_employees(conn: &Connection) -> AppResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
    Ok(n.max(0) as usize)
}

fn write_vacations(conn: &Connection, employee_id: i64, vacations: &[VacationInterval]) -> Result<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO vacations (employee_id, seq, start_date, end_date, days)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;

    for (seq, v) in vacations.iter().enumerate() {
        stmt.execute(params![
            employee_id,
            seq as i64,
            v.start_str(),
            v.end_str(),
            v.days(),
        ])?;
    }
    Ok(())
}

/// Insert a new employee with its intervals. Returns the new id.
pub fn insert_employee(conn: &Connection, emp: &Employee) -> AppResult<i64> {
    let tx = conn.unchecked_transaction()?;
    let id = insert_employee_rows(&tx, emp)?;
    tx.commit()?;
    Ok(id)
}

/// Insert without opening a transaction: the caller owns it.
pub fn insert_employee_rows(conn: &Connection, emp: &Employee) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees (name, position, total_days, color, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            emp.name,
            emp.position,
            emp.total_days as i64,
            emp.color,
            emp.created_at,
        ],
    )?;
    let id = conn.last_insert_rowid();

    write_vacations(conn, id, &emp.vacations)?;
    Ok(id)
}

/// Update name, position and allotment. The color is never rewritten.
pub fn update_employee(conn: &Connection, emp: &Employee) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE employees SET name = ?1, position = ?2, total_days = ?3 WHERE id = ?4",
        params![emp.name, emp.position, emp.total_days as i64, emp.id],
    )?;
    Ok(n)
}

/// Replace the whole interval sequence of an employee.
pub fn replace_vacations(
    conn: &Connection,
    employee_id: i64,
    vacations: &[VacationInterval],
) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM vacations WHERE employee_id = ?1", [employee_id])?;
    write_vacations(&tx, employee_id, vacations)?;
    tx.commit()?;
    Ok(())
}

/// Append one interval after the existing ones.
pub fn append_vacation(conn: &Connection, employee_id: i64, v: &VacationInterval) -> AppResult<()> {
    let next_seq: i64 = conn.query_row(
        "SELECT IFNULL(MAX(seq) + 1, 0) FROM vacations WHERE employee_id = ?1",
        [employee_id],
        |row| row.get(0),
    )?;

    conn.execute(
        "INSERT INTO vacations (employee_id, seq, start_date, end_date, days)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![employee_id, next_seq, v.start_str(), v.end_str(), v.days()],
    )?;
    Ok(())
}

pub fn delete_employee(conn: &Connection, employee_id: i64) -> AppResult<usize> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM vacations WHERE employee_id = ?1", [employee_id])?;
    let n = tx.execute("DELETE FROM employees WHERE id = ?1", [employee_id])?;
    tx.commit()?;
    Ok(n)
}

/// Remove every employee (used by `import --replace`).
/// Runs inside the caller's transaction.
pub fn delete_all_employees(conn: &Connection) -> AppResult<usize> {
    conn.execute("DELETE FROM vacations", [])?;
    let n = conn.execute("DELETE FROM employees", [])?;
    Ok(n)
}
