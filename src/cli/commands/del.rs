use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DelLogic;
use crate::errors::AppResult;
use crate::store::local::LocalStore;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut store = LocalStore::open(expand_tilde(&cfg.store));
        DelLogic::del(&mut store, cfg, id)?;
    }
    Ok(())
}
