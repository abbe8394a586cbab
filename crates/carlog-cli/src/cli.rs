//! CLI argument definitions for the CARLOG converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "carlog",
    version,
    about = "CARLOG converter - Convert car listing records between XML and CLB",
    long_about = "Convert car listing records between the XML document format and\n\
                  the CARLOG binary (CLB) format.\n\
                  Files are read and written whole; record order is preserved."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert records from one format to the other.
    Convert(ConvertArgs),

    /// Decode a file and print its records.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Input format (inferred from the file extension when omitted).
    #[arg(long = "from", value_enum)]
    pub from: Option<FormatArg>,

    /// Output format (inferred from the file extension when omitted).
    #[arg(long = "to", value_enum)]
    pub to: Option<FormatArg>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Input format (inferred from the file extension when omitted).
    #[arg(long = "from", value_enum)]
    pub from: Option<FormatArg>,

    /// Print records as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// Record file formats the converter understands.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum FormatArg {
    /// XML document (`<Document>` of `<Car>` elements).
    Xml,
    /// CARLOG binary format.
    Clb,
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
