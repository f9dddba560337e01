use crate::config::Config;
use crate::core::ingest::{IngestReport, ingest};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{count_employees, delete_all_employees, insert_employee_rows};
use crate::errors::AppResult;
use crate::import::{ImportFormat, read_csv_records, read_json_records};
use crate::models::EmployeeRecord;
use crate::utils::path::expand_tilde;

pub struct ImportLogic;

impl ImportLogic {
    /// Read `file`, normalize every record and store the accepted ones.
    /// With `replace`, the stored collection is cleared first.
    pub fn import(
        pool: &mut DbPool,
        cfg: &Config,
        format: &ImportFormat,
        file: &str,
        replace: bool,
    ) -> AppResult<IngestReport> {
        let path = expand_tilde(file);

        let (records, mut discarded) = match format {
            ImportFormat::Json => (read_json_records(&path)?, Vec::new()),
            ImportFormat::Csv => read_csv_records(&path)?,
        };

        let mut report = Self::store(pool, cfg, &records, replace)?;
        discarded.append(&mut report.discarded);
        report.discarded = discarded;

        ttlog_quiet(
            &pool.conn,
            "import",
            format.as_str(),
            &format!(
                "Imported {} employee(s) from {} ({} discarded, {} interval(s) dropped)",
                report.accepted,
                path.display(),
                report.discarded.len(),
                report.dropped_intervals
            ),
        );

        Ok(report)
    }

    /// Store already-parsed records. Colors continue from the current
    /// collection size, so existing employees keep theirs.
    ///
    /// The clear (with `replace`) and every insert share one transaction:
    /// a failing batch leaves the stored collection untouched.
    pub fn store(
        pool: &mut DbPool,
        cfg: &Config,
        records: &[EmployeeRecord],
        replace: bool,
    ) -> AppResult<IngestReport> {
        let tx = pool.conn.unchecked_transaction()?;

        if replace {
            delete_all_employees(&tx)?;
        }

        let first_index = count_employees(&tx)?;
        let (employees, report) = ingest(records, &cfg.color_assigner(), first_index);

        for emp in &employees {
            insert_employee_rows(&tx, emp)?;
        }

        tx.commit()?;
        Ok(report)
    }
}
