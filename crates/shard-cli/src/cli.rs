//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Snowshard - split Snowflake GET_DDL dumps into one SQL file per object
#[derive(Parser, Debug)]
#[command(name = "snowshard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (where snowshard.yml lives)
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Override the output directory from config
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split dump files into one file per object
    Split(SplitArgs),

    /// Remove generated files for one database, or the whole output tree
    Reset(ResetArgs),

    /// Write a placeholder for an imported database with no extractable DDL
    Placeholder(PlaceholderArgs),
}

/// Arguments for the split command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// GET_DDL dump files; the database name is taken from each file stem
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print run results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the reset command
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Only remove files belonging to this database (default: everything)
    #[arg(short, long)]
    pub database: Option<String>,
}

/// Arguments for the placeholder command
#[derive(Args, Debug)]
pub struct PlaceholderArgs {
    /// Name of the imported database
    pub database: String,
}
