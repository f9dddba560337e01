use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::open;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        calendar,
        period,
        force,
    } = cmd
    {
        let mut pool = open(&cfg.database)?;
        ExportLogic::export(&mut pool, cfg, format, file, *calendar, period, *force)?;
    }
    Ok(())
}
