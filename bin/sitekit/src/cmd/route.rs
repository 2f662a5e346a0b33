//! Route command - match a path against route patterns

use color_eyre::eyre::{Result, WrapErr};
use sitekit_core::Config;
use sitekit_router::RouteTable;

/// Build the table to match against: explicit patterns route to
/// themselves, otherwise the configured routes are used in order.
pub fn table(config: &Config, patterns: &[String]) -> Result<RouteTable<String>> {
    let table = if patterns.is_empty() {
        RouteTable::from_routes(
            config
                .routes
                .iter()
                .map(|route| (route.pattern.as_str(), route.page.clone())),
        )
    } else {
        RouteTable::from_routes(patterns.iter().map(|p| (p.as_str(), p.clone())))
    };

    table.wrap_err("invalid route pattern")
}

/// Run the route command.
///
/// Prints the first match as JSON, or `null` when nothing matches.
pub fn run(config: &Config, path: &str, patterns: &[String]) -> Result<()> {
    let table = table(config, patterns)?;
    if table.is_empty() {
        tracing::warn!("no routes given and none configured");
    }

    let value = match table.resolve(path) {
        Some(hit) => serde_json::json!({
            "pattern": hit.pattern.to_string(),
            "target": hit.target,
            "params": hit.params,
        }),
        None => serde_json::Value::Null,
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
