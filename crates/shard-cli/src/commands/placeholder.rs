//! Placeholder command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, PlaceholderArgs};
use crate::commands::common::resolve_output_root;

/// Execute the placeholder command
pub fn execute(args: &PlaceholderArgs, global: &GlobalArgs) -> Result<()> {
    let output_root = resolve_output_root(global)?;

    shard_core::write_placeholder(&args.database, &output_root)?;
    println!("Wrote imported-database placeholder for {}", args.database);
    Ok(())
}
