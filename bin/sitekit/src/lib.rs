//! Sitekit CLI Library
//!
//! Command implementations for the `sitekit` binary, exposed as a library
//! so they can be tested without spawning the binary.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (css, route, parts, page, engines)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use sitekit::{Options, cmd};
//!
//! let options = Options::default();
//! let config = sitekit::load_config(Path::new("site.toml"), None).unwrap();
//! cmd::css::run(&config, &options, Path::new("main.styl"), false, None, None).unwrap();
//! ```

pub mod cmd;

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use sitekit_css::BackendRegistry;
pub use sitekit_core::Config;
use tracing::{debug, info};

/// Name of the configuration file looked up when none is given.
pub const DEFAULT_CONFIG: &str = "site.toml";

/// Global switches shared by every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Build for production: stylesheets are always minified.
    pub production: bool,

    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
}

/// Load the site configuration.
///
/// With an environment file, `path` is the base layer and may be missing.
/// Without one, a missing default config file means built-in defaults.
pub fn load_config(path: &Path, environment: Option<&Path>) -> Result<Config> {
    if let Some(environment) = environment {
        debug!(?path, ?environment, "loading layered configuration");
        return Config::load_layered(path, Some(environment)).wrap_err_with(|| {
            format!(
                "failed to load {} with environment {}",
                path.display(),
                environment.display()
            )
        });
    }

    if !path.exists() && path == Path::new(DEFAULT_CONFIG) {
        info!("no {DEFAULT_CONFIG} found, using defaults");
        return Ok(Config::default());
    }

    Config::load_with_env(path)
        .wrap_err_with(|| format!("failed to load configuration from {}", path.display()))
}

/// Probe the configured stylesheet engines and make them the process-wide
/// registry.
pub fn install_engines(config: &Config) {
    if BackendRegistry::install_global(BackendRegistry::discover(&config.css)).is_err() {
        debug!("stylesheet engines already discovered");
    }
}

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(&dir.path().join("nope.toml"), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_environment_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("site.toml");
        let env = dir.path().join("prod.yaml");
        std::fs::write(&base, "[site]\ntitle = \"Base\"\nlanguage = \"fi\"\n").unwrap();
        std::fs::write(&env, "site:\n  title: Production\n").unwrap();

        let config = load_config(&base, Some(&env)).unwrap();
        assert_eq!(config.site.title, "Production");
        assert_eq!(config.site.language, "fi");
    }

    #[test]
    fn test_load_config_environment_without_base() {
        let dir = tempfile::tempdir().unwrap();
        let env = dir.path().join("joku.yaml");
        std::fs::write(&env, "build:\n  minify: true\n").unwrap();

        let config = load_config(&dir.path().join("site.toml"), Some(&env)).unwrap();
        assert!(config.build.minify);
    }
}
