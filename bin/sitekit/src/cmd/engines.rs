//! Engines command - report which stylesheet engines were found

use color_eyre::eyre::{Result, bail};
use sitekit_css::BackendRegistry;

/// Run the engines command.
///
/// In production every engine must be present.
pub fn run(registry: &BackendRegistry, production: bool) -> Result<()> {
    let mut missing = Vec::new();

    for (backend, available) in registry.engines() {
        let mark = if available { "✓" } else { "✗" };
        println!("  {mark} {:<10} {}", backend.kind(), backend.engine());
        if !available {
            missing.push(backend.kind());
        }
    }

    if production && !missing.is_empty() {
        bail!("{} stylesheet engine(s) missing", missing.len());
    }

    Ok(())
}
