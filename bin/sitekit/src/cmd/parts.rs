//! Parts command - show the names derived from a source path

use std::path::Path;

use color_eyre::eyre::{Result, eyre};
use sitekit_core::PathParts;

/// Run the parts command, printing the parts as JSON.
pub fn run(path: &Path) -> Result<()> {
    let parts = PathParts::try_from_path(path)
        .ok_or_else(|| eyre!("source path is empty"))?;

    println!("{}", serde_json::to_string_pretty(&parts)?);
    Ok(())
}
