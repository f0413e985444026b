//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use std::path::PathBuf;

use shard_core::Config;

use crate::cli::GlobalArgs;

/// Resolve the output root: an explicit `--output-dir` wins, otherwise the
/// project config (or its defaults) decides.
pub(crate) fn resolve_output_root(global: &GlobalArgs) -> Result<PathBuf> {
    if let Some(dir) = &global.output_dir {
        return Ok(dir.clone());
    }
    let config = Config::load(&global.project_dir).context("Failed to load config")?;
    Ok(config.output_root(&global.project_dir))
}
