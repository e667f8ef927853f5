//! CLI argument definitions for tabscope.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tabscope_inspect::{DEFAULT_HEAD_ROWS, DEFAULT_TAIL_ROWS};

/// File read when no path is given.
pub const DEFAULT_INPUT: &str = "data.csv";

#[derive(Parser)]
#[command(
    name = "tabscope",
    version,
    about = "Inspect a CSV file: row windows, column summary and data quality",
    long_about = "Load a comma-separated file and print its last rows, the full table,\n\
                  its first rows, a column summary and data-quality metrics."
)]
pub struct Cli {
    /// CSV file to inspect (first line is the header).
    #[arg(value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub path: PathBuf,

    /// Number of leading rows to show.
    #[arg(
        long = "head",
        value_name = "N",
        default_value_t = DEFAULT_HEAD_ROWS,
        value_parser = parse_row_count
    )]
    pub head: usize,

    /// Number of trailing rows to show.
    #[arg(
        long = "tail",
        value_name = "N",
        default_value_t = DEFAULT_TAIL_ROWS,
        value_parser = parse_row_count
    )]
    pub tail: usize,

    /// Print the summary and quality metrics as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Accepts positive integers written as integers; `0`, `-1` and `2.0` are
/// all rejected.
fn parse_row_count(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a positive integer, got '{value}'")),
    }
}

/// The first line of a clap error, without its `error: ` prefix.
pub fn argument_error_message(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
