//! Configuration types and parsing for snowshard.yml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Name of the optional per-project config file.
pub const CONFIG_FILE: &str = "snowshard.yml";

/// Project configuration from snowshard.yml.
///
/// The file is optional; a missing file means defaults. Unknown fields are
/// rejected so typos surface instead of silently doing nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory the object tree is written into, relative to the project
    /// directory unless absolute
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Config {
    /// Load the config from `project_dir`, falling back to defaults when no
    /// config file exists.
    pub fn load(project_dir: &Path) -> CoreResult<Config> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&raw)?;
        Ok(config)
    }

    /// Resolve the configured output directory against the project dir.
    pub fn output_root(&self, project_dir: &Path) -> PathBuf {
        let configured = Path::new(&self.output_dir);
        if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            project_dir.join(configured)
        }
    }
}
