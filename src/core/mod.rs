//! Vacation engine: interval validation, day counting, holiday overlay,
//! color tags, active-today query and calendar grids, plus the logic
//! behind the CLI commands that use them.

pub mod active;
pub mod colors;
pub mod config;
pub mod days;
pub mod employees;
pub mod grid;
pub mod holidays;
pub mod import;
pub mod ingest;
pub mod interval;
pub mod log;
pub mod summary;
