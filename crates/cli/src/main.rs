// invoicedb CLI - load a retail CSV into SQLite and run the fixed reports

mod exit_codes;
mod render;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};

use invoicedb_config::Settings;
use invoicedb_store::{connection, report, Report};

use exit_codes::{exit_code, EXIT_IO, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "invoicedb")]
#[command(about = "Load a retail transaction CSV into SQLite and answer fixed reports")]
#[command(version)]
#[command(long_version = long_version())]
#[command(after_help = "\
Examples:
  invoicedb load --settings db.toml --input data/retail.csv
  invoicedb report-3 --settings db.toml
  invoicedb report-4 --settings db.toml --json")]
struct Cli {
    /// What to do
    action: Action,

    /// Connection settings file (TOML)
    #[arg(long, short = 's', env = "INVOICEDB_SETTINGS")]
    settings: PathBuf,

    /// Input CSV; required by `load`
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Action {
    /// Reset the tables and load --input
    #[value(alias = "create")]
    Load,
    /// Every invoice line with its description
    #[value(name = "report-1", alias = "query1")]
    Report1,
    /// Number of distinct invoices
    #[value(name = "report-2", alias = "query2")]
    Report2,
    /// Total price per invoice
    #[value(name = "report-3", alias = "query3")]
    Report3,
    /// Highest-value invoice
    #[value(name = "report-4", alias = "query4")]
    Report4,
}

impl Action {
    fn report(self) -> Option<Report> {
        match self {
            Self::Load => None,
            Self::Report1 => Some(Report::Lines),
            Self::Report2 => Some(Report::InvoiceCount),
            Self::Report3 => Some(Report::Totals),
            Self::Report4 => Some(Report::TopInvoice),
        }
    }
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("INVOICEDB_REVISION"), ")",
        "\nstore:   sqlite (rusqlite, bundled)",
    )
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.action.report() {
        None => cmd_load(&cli.settings, cli.input.as_deref()),
        Some(report) => cmd_report(&cli.settings, report, cli.json),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<invoicedb_core::Error> for CliError {
    fn from(err: invoicedb_core::Error) -> Self {
        let kind = err.kind();
        log::debug!("{kind} failure: {err}");
        let hint = match &err {
            invoicedb_core::Error::Settings(_) => {
                Some("settings need a [database] section with a 'path' key".to_string())
            }
            invoicedb_core::Error::Database(msg) if msg.contains("run a load first") => {
                Some("invoicedb load --settings <FILE> --input <CSV>".to_string())
            }
            _ => None,
        };
        Self { code: exit_code(kind), message: err.to_string(), hint }
    }
}

// ============================================================================
// load
// ============================================================================

fn cmd_load(settings_path: &Path, input: Option<&Path>) -> Result<(), CliError> {
    let input = input.ok_or_else(|| {
        CliError::args("load requires --input").with_hint("invoicedb load --settings <FILE> --input <CSV>")
    })?;

    let settings = Settings::load(settings_path)?;
    let layout = settings.layout()?;
    let mut conn = connection::open(&settings.database)?;

    let summary = invoicedb_store::ingest(&mut conn, &layout, input)?;
    log::info!("{} line(s) committed from {}", summary.lines, input.display());

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "OK").map_err(|e| CliError::io(e.to_string()))?;
    Ok(())
}

// ============================================================================
// report-1 .. report-4
// ============================================================================

fn cmd_report(settings_path: &Path, which: Report, json: bool) -> Result<(), CliError> {
    let settings = Settings::load(settings_path)?;
    let conn = connection::open(&settings.database)?;

    let output = report::run(&conn, which)?;
    log::info!("report {}: {} row(s)", which.number(), output.row_count());

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let written = if json {
        render::json(&output, &mut handle)
    } else {
        render::text(&output, &mut handle)
    };
    written.map_err(|e| CliError::io(e.to_string()))
}
