//! Filesystem-safe object names

use once_cell::sync::Lazy;
use regex::Regex;

static R_HOSTILE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[ ,<>"]"#).unwrap());

/// Replace characters from a database object name which aren't valid on the
/// filesystem (or survive poorly in shell use) with underscores.
///
/// The set covers spaces and commas left over from signature joining, angle
/// brackets, and double quotes embedded mid-name.
pub fn munged_name(name: &str) -> String {
    R_HOSTILE.replace_all(name, "_").into_owned()
}
