use crate::render::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftroster
/// CLI application to view driver/truck shift rosters from CSV
#[derive(Parser)]
#[command(
    name = "shiftroster",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple shift roster viewer: load a CSV schedule and render per-date, per-shift tables",
    long_about = None
)]
pub struct Cli {
    /// Override roster CSV path (useful for tests or a custom file)
    #[arg(global = true, long = "roster")]
    pub roster: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and a starter roster file
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

    /// List the selectable dates found in the roster
    Dates,

    /// Render the schedule tables for one date
    Show {
        /// Date key exactly as written in the roster (defaults to the
        /// first date in sort order)
        date: Option<String>,
    },

    /// Export schedule data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "DATE", help = "Export only the given date")]
        date: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show or toggle the dark mode preference
    Theme {
        #[arg(long = "toggle", help = "Flip dark mode and persist the choice")]
        toggle: bool,

        #[arg(long = "status", help = "Print where the current theme comes from")]
        status: bool,
    },
}
