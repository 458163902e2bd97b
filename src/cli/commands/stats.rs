use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::errors::AppResult;
use crate::store::local::LocalStore;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { period } = cmd {
        let store = LocalStore::open(expand_tilde(&cfg.store));
        StatsLogic::stats(&store, period)?;
    }
    Ok(())
}
