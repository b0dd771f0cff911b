//! # jaas-cli — CLI for the JaaS Dataset Toolchain
//!
//! Provides the `jaas-lint` binary: the pre-publish gate for the joke
//! dataset. One invocation performs one validation run over the two static
//! inputs co-located with the repository:
//!
//! ```bash
//! jaas-lint            # validate data/jokes.json against data/schema.json
//! jaas-lint --check    # same, with an explicit confirmation line on success
//! ```
//!
//! Exit code 0 means every check passed; 1 means a fatal load failure or at
//! least one accumulated validation error. Coverage warnings never change
//! the exit code.

pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::validate::{DATASET_FILE, SCHEMA_FILE};

/// Directory holding the two static inputs, relative to the repository root.
pub const DATA_DIR: &str = "data";

/// Walk up from `start` to the nearest ancestor whose `data/` directory
/// contains both input files.
pub fn find_data_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        let data = dir.join(DATA_DIR);
        if data.join(SCHEMA_FILE).is_file() && data.join(DATASET_FILE).is_file() {
            return Some(data);
        }
        dir = dir.parent()?;
    }
}

/// Resolve the data directory from the current working directory.
///
/// # Errors
///
/// Fails when the current directory cannot be determined or no ancestor
/// carries `data/schema.json` and `data/jokes.json`.
pub fn resolve_data_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    match find_data_root(&cwd) {
        Some(root) => Ok(root),
        None => bail!(
            "could not locate {DATA_DIR}/{SCHEMA_FILE} and {DATA_DIR}/{DATASET_FILE} in {} or any parent directory",
            cwd.display()
        ),
    }
}
