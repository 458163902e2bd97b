use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::import::{ImportLogic, merge_into_local, merge_into_remote};
use crate::store::local::LocalStore;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use rusqlite::Connection;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        file,
        user,
        pet,
        remote,
        dry_run,
        yes,
    } = cmd
    {
        let default_user = user.clone().unwrap_or_else(|| cfg.default_user.clone());

        let path = expand_tilde(file);
        let batch = ImportLogic::load(&path, &default_user)?;
        ImportLogic::print_preview(&batch);
        println!();

        if *dry_run {
            info("Dry run: nothing written.");
            return Ok(());
        }

        if batch.entries.is_empty() {
            info("Nothing to import.");
            return Ok(());
        }

        if !*yes && !confirm_import(batch.entries.len())? {
            println!("❌ Import cancelled by user.");
            return Ok(());
        }

        if *remote {
            let pet = pet.clone().unwrap_or_else(|| cfg.default_pet.clone());

            let mut pool = DbPool::new(&cfg.database)?;
            init_db(&pool.conn)?;

            let outcome = merge_into_remote(batch.entries, &pet, &default_user, &mut pool)?;
            let total = db::queries::count_activities(&pool)?;

            let _ = db::log::oplog(
                &pool.conn,
                "import",
                file,
                &format!("{} entries inserted for {}", outcome.imported, pet),
            );
            success(format!(
                "Inserted {} entries for {} ({} total in database)",
                outcome.imported, pet, total
            ));
        } else {
            let mut store = LocalStore::open(expand_tilde(&cfg.store));
            let outcome = merge_into_local(batch.entries, &mut store)?;

            // internal log, non-blocking
            if let Ok(conn) = Connection::open(&cfg.database) {
                let _ = db::log::oplog(
                    &conn,
                    "import",
                    file,
                    &format!(
                        "{} imported, {} skipped as duplicates",
                        outcome.imported, outcome.skipped
                    ),
                );
            }

            success(format!(
                "Imported {} entries, skipped {} duplicates ({} total in store)",
                outcome.imported, outcome.skipped, outcome.total
            ));
        }
    }
    Ok(())
}

fn confirm_import(count: usize) -> AppResult<bool> {
    use std::io::{Write, stdin, stdout};

    print!("Import {} entries? [y/N]: ", count);
    stdout().flush().ok();

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
