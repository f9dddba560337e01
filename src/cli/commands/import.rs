use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::open;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        format,
        file,
        replace,
    } = cmd
    {
        let mut pool = open(&cfg.database)?;
        let report = ImportLogic::import(&mut pool, cfg, format, file, *replace)?;

        success(format!("Imported {} employee(s)", report.accepted));

        for e in &report.discarded {
            warning(format!("Record discarded: {}", e));
        }
        if report.dropped_intervals > 0 {
            warning(format!(
                "{} invalid vacation interval(s) dropped",
                report.dropped_intervals
            ));
        }
        if report.days_mismatches > 0 {
            warning(format!(
                "{} interval(s) declared a day count different from their span; recomputed",
                report.days_mismatches
            ));
        }
    }
    Ok(())
}
