use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the JSON entry store
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.store.clone(), cli.test)?;

    let cfg = Config::load();
    let db_path = cli.db.clone().unwrap_or(cfg.database);

    println!("⚙️  Initializing pawlog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    // internal log, non-blocking
    if let Err(e) = log::oplog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 pawlog initialization completed!");
    Ok(())
}
