//! Snowshard CLI - split Snowflake GET_DDL dumps into per-object SQL files

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{placeholder, reset, split};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Split(args) => split::execute(args, &cli.global),
        cli::Commands::Reset(args) => reset::execute(args, &cli.global),
        cli::Commands::Placeholder(args) => placeholder::execute(args, &cli.global),
    }
}
