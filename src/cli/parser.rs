use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to check weekly timesheets and total basic/overtime hours
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate weekly timesheets (CSV, HTML or Word .docx) and total basic and overtime hours",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Validate every row and print the issues found
    Check {
        /// Timesheet file (.csv, .html, .htm or .docx)
        input: String,

        #[arg(long, help = "Fail when at least one issue is found")]
        strict: bool,
    },

    /// Print overall and weekly totals after the 40-hour basic rule
    Report {
        /// Timesheet file (.csv, .html, .htm or .docx)
        input: String,

        #[arg(long, help = "Show the overall totals")]
        overall: bool,

        #[arg(long, help = "Show the per-week totals")]
        weekly: bool,

        #[arg(long, help = "Show the validation issues")]
        issues: bool,
    },

    /// List the rows with their parsed minutes
    List {
        /// Timesheet file (.csv, .html, .htm or .docx)
        input: String,
    },

    /// Export rows (CSV) or the full recalculation (JSON)
    Export {
        /// Timesheet file (.csv, .html, .htm or .docx)
        input: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Build the submission payload (name, date range, CSV) as JSON
    Payload {
        /// Timesheet file (.csv, .html, .htm or .docx)
        input: String,

        #[arg(long, help = "Employee name (default: employee_name from config)")]
        name: Option<String>,

        #[arg(long, help = "First day of the period")]
        from: String,

        #[arg(long, help = "Last day of the period")]
        to: String,

        #[arg(long, value_name = "FILE", help = "Write to FILE instead of stdout")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
