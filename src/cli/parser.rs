use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for pawlog
/// CLI application to track pet-care activities and import activity exports
#[derive(Parser)]
#[command(
    name = "pawlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple pet-care logging CLI: track activities and import exports from other apps",
    long_about = None
)]
pub struct Cli {
    /// Override entry store path (useful for tests or custom stores)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the entry store, database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Import an activity export file (CSV or JSON)
    Import {
        /// File to import (.csv or .json)
        file: String,

        /// Caregiver name for rows that don't carry one
        #[arg(long, help = "Caregiver name for rows without a logged-by field")]
        user: Option<String>,

        /// Pet the imported activities belong to (remote inserts)
        #[arg(long, help = "Pet the imported activities belong to (with --remote)")]
        pet: Option<String>,

        #[arg(
            long = "remote",
            help = "Insert into the database instead of the local entry store"
        )]
        remote: bool,

        #[arg(long = "dry-run", help = "Show the preview only, write nothing")]
        dry_run: bool,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List stored entries
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "kind", help = "Filter by activity type (potty, meal, ...)")]
        kind: Option<String>,

        #[arg(long, help = "Show at most N entries")]
        limit: Option<usize>,
    },

    /// Show per-type statistics over the stored entries
    Stats {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Delete a stored entry by id
    Del {
        /// Entry id as shown by `export --format json`
        id: String,
    },

    /// Export stored entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the entry store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
