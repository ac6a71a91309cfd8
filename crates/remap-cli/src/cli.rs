//! CLI argument definitions for the remap tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "remap",
    version,
    about = "Reshape delimited export files into a target schema",
    long_about = "Reshape delimited export files into a target schema.\n\n\
                  Output columns are declared in a JSON configuration: plain columns\n\
                  select, rewrite and filter single input fields; generated columns\n\
                  are synthesized from the whole record by named generators."
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
    /// Transform a delimited file according to a mapping configuration.
    Prepare(PrepareArgs),

    /// List the registered filters and generators.
    Functions,

    /// Copy a file into every leaf directory of a tree and record it in
    /// each directory's manifest.
    Distribute(DistributeArgs),
}

#[derive(Parser)]
pub struct PrepareArgs {
    /// Path to the JSON mapping configuration.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Path to the delimited input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write output to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct DistributeArgs {
    /// File to copy into each leaf directory.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Directory tree to distribute into.
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: PathBuf,

    /// Additional metadata for the manifest line, comma separated.
    #[arg(short = 'm', long = "metadata", value_name = "VALUES")]
    pub metadata: Option<String>,

    /// Replace spaces with underscores in target filenames.
    #[arg(short = 'r', long = "replace-spaces")]
    pub replace_spaces: bool,
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
