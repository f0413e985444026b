//! Split command implementation

use anyhow::Result;
use serde::Serialize;

use shard_core::{partition, DumpSource, FileSource, Summary};

use crate::cli::{GlobalArgs, SplitArgs};
use crate::commands::common::resolve_output_root;

/// Per-database outcome, for the `--json` report.
#[derive(Debug, Serialize)]
struct SplitResult {
    database: String,
    #[serde(flatten)]
    summary: Summary,
}

/// Execute the split command
pub fn execute(args: &SplitArgs, global: &GlobalArgs) -> Result<()> {
    let output_root = resolve_output_root(global)?;

    let mut results: Vec<SplitResult> = Vec::new();
    let mut failures = 0usize;

    for file in &args.files {
        let source = match FileSource::new(file) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("  {e}");
                failures += 1;
                continue;
            }
        };
        if global.verbose {
            eprintln!(
                "[verbose] Splitting {} into {}",
                file.display(),
                output_root.display()
            );
        }

        let text = match source.ddl() {
            Ok(text) => text,
            Err(e) => {
                eprintln!("  {}: {e}", source.database_name());
                failures += 1;
                continue;
            }
        };

        match partition(source.database_name(), &text, &output_root) {
            Ok(summary) => {
                if !args.json {
                    println!("{}: {summary}", source.database_name());
                    if global.verbose {
                        for skip in &summary.skipped {
                            eprintln!("[verbose]   skipped: {}", skip.reason);
                        }
                    }
                }
                results.push(SplitResult {
                    database: source.database_name().to_string(),
                    summary,
                });
            }
            Err(e) => {
                eprintln!("  {}: {e}", source.database_name());
                failures += 1;
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    if failures > 0 {
        anyhow::bail!(
            "{failures} database{} failed to split",
            if failures == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "split_test.rs"]
mod tests;
