use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::local::LocalStore;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = LocalStore::open(expand_tilde(&cfg.store));
        ExportLogic::export(&store, format, file, range, *force)?;
    }
    Ok(())
}
