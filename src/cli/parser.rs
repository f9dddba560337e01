use crate::export::ExportFormat;
use crate::import::ImportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rVacations
#[derive(Parser)]
#[command(
    name = "rvacations",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track employee vacations: used days, who is absent today, and month/year calendars",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a new employee
    Add {
        /// Full name of the employee
        name: String,

        #[arg(long = "position", short = 'p', default_value = "")]
        position: String,

        #[arg(long = "days", short = 'd', default_value_t = 0, help = "Total allotted vacation days")]
        total_days: u32,

        #[arg(long = "color", help = "Color tag (#rrggbb or hsl(h, s%, l%)); assigned automatically if omitted")]
        color: Option<String>,
    },

    /// Edit name, position or allotment of an employee
    Edit {
        /// Employee id or exact name
        employee: String,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "position", short = 'p')]
        position: Option<String>,

        #[arg(long = "days", short = 'd', help = "Total allotted vacation days")]
        total_days: Option<u32>,
    },

    /// Delete an employee and all of their vacations
    Del {
        /// Employee id or exact name
        employee: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Manage the vacation intervals of an employee
    Vacation {
        #[command(subcommand)]
        action: VacationAction,
    },

    /// List employees with used and remaining days
    List {
        #[arg(long = "details", help = "Also list every vacation interval")]
        details: bool,
    },

    /// Show one employee's card
    Show {
        /// Employee id or exact name
        employee: String,
    },

    /// List employees absent on a date (default: today)
    Active {
        #[arg(long = "date", value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },

    /// Print the calendar grid of a month or a whole year
    Calendar {
        #[arg(
            long,
            short,
            value_name = "PERIOD",
            help = "YYYY-MM for one month, YYYY for the whole year (default: current month)"
        )]
        period: Option<String>,

        #[arg(long = "names", help = "Label days with full names instead of initials")]
        names: bool,
    },

    /// Import employees from a JSON or CSV file
    Import {
        #[arg(long, value_enum, default_value = "json")]
        format: ImportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "replace", help = "Delete all stored employees before importing")]
        replace: bool,
    },

    /// Export usage or calendar data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "calendar", help = "Export one row per calendar day instead of per employee")]
        calendar: bool,

        #[arg(
            long,
            value_name = "PERIOD",
            help = "Calendar period: YYYY-MM or YYYY (default: current month)"
        )]
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum VacationAction {
    /// Append one interval
    Add {
        /// Employee id or exact name
        employee: String,
        /// First day (YYYY-MM-DD)
        start: String,
        /// Last day, inclusive (YYYY-MM-DD)
        end: String,
    },

    /// Replace all intervals with the given START:END spans
    Set {
        /// Employee id or exact name
        employee: String,
        #[arg(value_name = "START:END", required = true)]
        spans: Vec<String>,
    },

    /// Remove all intervals
    Clear {
        /// Employee id or exact name
        employee: String,
    },
}
