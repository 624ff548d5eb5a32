use crate::export::ExportFormat;
use crate::models::ServiceMode;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorklogs
/// Work-log generator for maintenance service orders
#[derive(Parser)]
#[command(
    name = "rworklogs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn service-order sequence intervals and pasted task tables into time-sliced work-log rows",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or shared rule tables)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with the built-in rule table
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "migrate",
            help = "Add missing fields and bring the rule table to the current version"
        )]
        migrate: bool,

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

    /// Generate work-log rows from a sequence interval or a pasted task table
    Generate {
        /// Service order number
        #[arg(long = "order", short = 'o')]
        order: String,

        /// Interval expression: "1-5", "1 2 4-6"; read from stdin when omitted
        #[arg(long, short = 'i', conflicts_with = "from_file")]
        interval: Option<String>,

        /// Read the interval (or pasted table) from a file
        #[arg(long = "from-file", value_name = "FILE")]
        from_file: Option<String>,

        /// Date (DD/MM/YYYY, slashes optional)
        #[arg(long, short = 'd')]
        date: String,

        /// Start time (HH:MM)
        #[arg(long, short = 's')]
        start: String,

        /// End time (HH:MM)
        #[arg(long, short = 'e')]
        end: String,

        /// Which rows of a pasted table to log (default from configuration)
        #[arg(long, value_enum)]
        mode: Option<ServiceMode>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate work-log rows from the tasks of a maintenance plan (CSV)
    Auto {
        /// Service order number
        #[arg(long = "order", short = 'o')]
        order: String,

        /// Plan CSV with no_seq, de_tarefa and de_sub_sist columns (UTF-8 or Latin-1)
        #[arg(long, value_name = "FILE")]
        plan: String,

        /// CSV delimiter (default from configuration)
        #[arg(long)]
        delimiter: Option<String>,

        /// Date (DD/MM/YYYY, slashes optional)
        #[arg(long, short = 'd')]
        date: String,

        /// Start time (HH:MM)
        #[arg(long, short = 's')]
        start: String,

        /// End time (HH:MM)
        #[arg(long, short = 'e')]
        end: String,

        /// Which tasks to log (default from configuration)
        #[arg(long, value_enum)]
        mode: Option<ServiceMode>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show how a pasted task table (or a plan CSV) splits into tire and general service
    Classify {
        /// Read the pasted table from a file instead of stdin
        #[arg(long = "from-file", value_name = "FILE", conflicts_with = "plan")]
        from_file: Option<String>,

        /// Classify a plan CSV (UTF-8 or Latin-1) instead of a pasted table
        #[arg(long, value_name = "FILE")]
        plan: Option<String>,

        /// CSV delimiter for --plan (default from configuration)
        #[arg(long, requires = "plan")]
        delimiter: Option<String>,

        /// Print only the two sequence lists
        #[arg(long)]
        short: bool,
    },
}

/// Where generated rows go: stdout, or an export file.
#[derive(clap::Args, Clone, Debug)]
pub struct OutputArgs {
    /// Export instead of printing
    #[arg(long, value_enum, requires = "file")]
    pub export: Option<ExportFormat>,

    /// Export file path
    #[arg(long, value_name = "FILE", requires = "export")]
    pub file: Option<String>,

    /// Overwrite the export file without asking
    #[arg(long, short = 'f')]
    pub force: bool,
}
