// src/import/mod.rs

mod csv;
mod json;

pub use self::csv::{parse_csv_records, read_csv_records};
pub use self::json::{parse_json_records, read_json_records};

use clap::ValueEnum;

#[derive(Clone, Debug, ValueEnum)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportFormat::Json => "json",
            ImportFormat::Csv => "csv",
        }
    }
}
