use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::store::local::LocalStore;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        kind,
        limit,
    } = cmd
    {
        let store = LocalStore::open(expand_tilde(&cfg.store));
        ListLogic::list(&store, period, kind, *limit, cfg.show_mood)?;
    }
    Ok(())
}
