#![deny(missing_docs)]
//! Linecount command-line interface.
//!
//! Counts the lines of every file with a given extension under a directory
//! tree and prints per-file counts followed by aggregate statistics.

use clap::{Args, Parser, ValueEnum};
use linecount_core::{
    DEFAULT_EXTENSION, LineCountError, ScanResult, Scanner, StdFileSystem, render_json,
    render_markdown, render_text,
};
use log::debug;
use std::io;
use std::path::PathBuf;
#[cfg(not(test))]
use std::process::ExitCode;

pub(crate) type CliResult<T> = Result<T, LineCountError>;

const EXIT_USAGE: u8 = 64;
const EXIT_NO_INPUT: u8 = 66;
const EXIT_IO: u8 = 74;

#[derive(Parser, Debug)]
#[command(
    name = "linecount",
    version,
    about = "Count lines in files with a given extension"
)]
struct Cli {
    /// Directory to scan, including all nested subdirectories.
    directory: PathBuf,
    /// Filename extension to match, such as '.txt' or '.csv'.
    #[arg(
        default_value = DEFAULT_EXTENSION,
        env = "LINECOUNT_EXTENSION",
        value_parser = parse_extension
    )]
    extension: String,
    #[command(flatten)]
    report: OutputArgs,
}

#[derive(Args, Clone, Debug)]
struct OutputArgs {
    /// Output format for report data.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "LINECOUNT_FORMAT")]
    format: OutputFormat,
    /// Write the report to a file instead of stdout.
    #[arg(long = "report-output")]
    report_output: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[cfg(not(test))]
fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}

#[cfg(test)]
fn main() {}

fn run(cli: &Cli) -> CliResult<()> {
    debug!("arguments: {cli:?}");
    let scanner = Scanner::new(StdFileSystem::new());
    let result = scanner.scan(&cli.directory, &cli.extension)?;
    emit_report(&result, &cli.report)
}

fn parse_extension(value: &str) -> CliResult<String> {
    if value.starts_with('.') {
        Ok(value.to_string())
    } else {
        Err(LineCountError::InvalidArgument(format!(
            "the filename extension '{value}' is formatted incorrectly; \
             examples of proper formatting: '.txt' or '.csv'"
        )))
    }
}

fn exit_code(error: &LineCountError) -> u8 {
    match error {
        LineCountError::InvalidArgument(_) => EXIT_USAGE,
        LineCountError::NotFound(_) => EXIT_NO_INPUT,
        LineCountError::Io(_) => EXIT_IO,
    }
}

fn emit_report(result: &ScanResult, output: &OutputArgs) -> CliResult<()> {
    let contents = match output.format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Markdown => render_markdown(result),
        OutputFormat::Json => render_json(result).map_err(io::Error::from)? + "\n",
    };
    emit_output(output, contents)
}

fn emit_output(output: &OutputArgs, contents: String) -> CliResult<()> {
    if let Some(path) = &output.report_output {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        debug!("report written to {}", path.display());
    } else {
        print!("{contents}");
    }
    Ok(())
}
