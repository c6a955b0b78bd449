use crate::export::{ExportFormat, ExportTable};
use crate::models::target::TargetScope;
use clap::{Parser, Subcommand};

/// Command-line interface definition for studytracker
/// CLI application to track study sessions with SQLite
#[derive(Parser)]
#[command(
    name = "studytracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple study tracking CLI: log sessions and measure progress against daily/weekly targets",
    long_about = None
)]
pub struct Cli {
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
    /// Initialize the database and configuration
    Init,

    /// Start a study session
    Start,

    /// Stop the active session and record it
    Stop {
        /// What you studied (optional free text)
        #[arg(long = "activity", short = 'a')]
        activity: Option<String>,
    },

    /// Show whether a session is currently running
    Status,

    /// List recorded sessions
    Log {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                   → entire year  (e.g. "2025")
        /// - YYYY-MM                → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD             → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY-MM:YYYY-MM        → month range  (e.g. "2025-06:2025-08")
        ///
        /// If omitted, all recorded sessions are listed.
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,
    },

    /// Show the daily summary table (total per day, change vs previous day)
    Summary,

    /// Set the daily or weekly target hours
    Target {
        /// Target scope: daily (keyed by date) or weekly (keyed by the week's Monday)
        #[arg(value_enum)]
        scope: TargetScope,

        /// Target hours for the scope
        hours: f64,

        /// Apply to this date instead of today (YYYY-MM-DD); for weekly
        /// targets the week containing the date is used
        #[arg(long)]
        date: Option<String>,
    },

    /// Show today's and this week's progress with the recent summary
    Dashboard,

    /// Export study data in various formats
    Export {
        /// Export format: csv, json, xlsx
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Table to export; `all` writes every table (xlsx/json only)
        #[arg(long, value_enum, default_value = "all")]
        table: ExportTable,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip on Windows, tar.gz on Unix)
        #[arg(long)]
        compress: bool,

        /// Overwrite the destination if it already exists
        #[arg(long, short = 'f')]
        force: bool,
    },

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

    /// Manage the database (migrations, statistics, maintenance)
    Db {
        #[arg(long = "migrate", help = "Create any missing tables")]
        migrate: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },
}
