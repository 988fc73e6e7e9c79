// leetsheet - organize a LeetCode problem sheet into a categorized CSV

mod exit_codes;
mod organize;
mod setup;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use leetsheet_config::ConfigError;
use leetsheet_io::IoError;
use tracing_subscriber::EnvFilter;

use exit_codes::{EXIT_CONFIG, EXIT_ERROR, EXIT_INPUT, EXIT_OUTPUT, EXIT_SUCCESS};

#[derive(Parser)]
#[command(name = "leetsheet")]
#[command(about = "Categorize, pad and sort a LeetCode problem sheet into a CSV")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    /// Settings file (default: ./leetsheet.toml when present)
    #[arg(long, global = true, env = "LEETSHEET_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the categorized CSV (the default when no command is given)
    #[command(after_help = "\
Examples:
  leetsheet
  leetsheet organize --input problems.csv --output catalog.csv
  leetsheet organize --target 150")]
    Organize(OrganizeArgs),

    /// Fill in missing keys of the app's .env file interactively
    Setup {
        /// Env file to update
        #[arg(long, default_value = leetsheet_config::ENV_FILE)]
        env_file: PathBuf,
    },
}

#[derive(Args, Default)]
pub struct OrganizeArgs {
    /// Source sheet (.xlsx, .xls, .ods, .csv, .tsv); overrides the settings file
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Export path; overrides the settings file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Number of exported rows
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub target: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries only the result line; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        None => organize::cmd_organize(cli.config, OrganizeArgs::default()),
        Some(Commands::Organize(args)) => organize::cmd_organize(cli.config, args),
        Some(Commands::Setup { env_file }) => setup::cmd_setup(env_file),
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

pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn general(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    /// Create error from an I/O error, split into input and output failures.
    pub fn io(err: IoError) -> Self {
        let code = if err.is_write() { EXIT_OUTPUT } else { EXIT_INPUT };
        let hint = match &err {
            IoError::NotFound(_) => Some(
                "run from the folder holding the sheet, pass --input, or set `input` in leetsheet.toml"
                    .to_string(),
            ),
            IoError::MissingColumn { .. } => Some(
                "expected headers: Problem Number, Problem Name, Technique, Completed?, Link"
                    .to_string(),
            ),
            IoError::UnsupportedFormat { .. } => {
                Some("supported: xlsx, xlsm, xls, xlsb, ods, csv, tsv, txt".to_string())
            }
            _ => None,
        };
        Self { code, message: err.to_string(), hint }
    }

    pub fn config(err: ConfigError) -> Self {
        let code = match &err {
            ConfigError::Write { .. } => EXIT_OUTPUT,
            ConfigError::Prompt(_) => EXIT_ERROR,
            ConfigError::Read { .. } | ConfigError::Parse { .. } | ConfigError::Invalid(_) => {
                EXIT_CONFIG
            }
        };
        Self { code, message: err.to_string(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
