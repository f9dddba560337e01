pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;

use crate::errors::AppResult;
use pool::DbPool;

/// Open the database and bring its schema up to date.
/// Migrations are idempotent, so this is safe on every command.
pub fn open(path: &str) -> AppResult<DbPool> {
    let pool = DbPool::new(path)?;
    initialize::init_db(&pool.conn)?;
    Ok(pool)
}
