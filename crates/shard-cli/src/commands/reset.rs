//! Reset command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, ResetArgs};
use crate::commands::common::resolve_output_root;

/// Execute the reset command
pub fn execute(args: &ResetArgs, global: &GlobalArgs) -> Result<()> {
    let output_root = resolve_output_root(global)?;

    match &args.database {
        Some(name) => println!("Removing generated files for {name}"),
        None => println!("Removing the whole output tree under {}", output_root.display()),
    }
    shard_core::reset(args.database.as_deref(), &output_root)?;
    Ok(())
}

#[cfg(test)]
#[path = "reset_test.rs"]
mod tests;
