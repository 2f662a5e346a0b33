//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sitekit_router::RoutePattern;

use crate::error::{CoreError, Result};

/// Main configuration structure for sitekit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// Stylesheet engine settings.
    #[serde(default)]
    pub css: CssConfig,

    /// Site-wide `<head>` defaults.
    #[serde(default)]
    pub head: HeadConfig,

    /// Client-side routes, in match order.
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    #[serde(default)]
    pub title: String,

    /// Base URL for the site (e.g., "https://example.com").
    #[serde(default)]
    pub base_url: String,

    /// Language code used for the `lang` attribute.
    #[serde(default = "default_language")]
    pub language: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated files.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Whether stylesheets are minified.
    #[serde(default)]
    pub minify: bool,

    /// Whether to render drafts.
    #[serde(default)]
    pub drafts: bool,

    /// Whether headings get slug ids for in-page links.
    #[serde(default)]
    pub heading_anchors: bool,
}

/// External stylesheet engines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CssConfig {
    /// Program that compiles plain CSS.
    #[serde(default = "default_native_program")]
    pub native_program: String,

    /// Program that compiles the indented alternate syntax.
    #[serde(default = "default_stylus_program")]
    pub stylus_program: String,
}

/// Defaults applied to every page head.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadConfig {
    /// Document character set.
    #[serde(default = "default_charset")]
    pub charset: String,

    /// Viewport meta content.
    #[serde(default = "default_viewport")]
    pub viewport: String,

    /// Title template; `%s` is replaced by the page title.
    #[serde(default)]
    pub title_template: Option<String>,

    /// Favicon URL.
    #[serde(default)]
    pub favicon: Option<String>,
}

/// A declared client-side route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Route pattern such as `/users/:id`.
    pub pattern: String,

    /// Page rendered for the route.
    pub page: String,
}

// Default value functions
fn default_language() -> String {
    "en".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_native_program() -> String {
    "lightningcss".to_string()
}

fn default_stylus_program() -> String {
    "stylus".to_string()
}

fn default_charset() -> String {
    "utf-8".to_string()
}

fn default_viewport() -> String {
    "width=device-width,initial-scale=1".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            base_url: String::new(),
            language: default_language(),
            description: None,
            author: None,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            minify: false,
            drafts: false,
            heading_anchors: false,
        }
    }
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            native_program: default_native_program(),
            stylus_program: default_stylus_program(),
        }
    }
}

impl Default for HeadConfig {
    fn default() -> Self {
        Self {
            charset: default_charset(),
            viewport: default_viewport(),
            title_template: None,
            favicon: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, with `SITEKIT__` environment
    /// overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        Self::load_layered(path, None)
    }

    /// Load a base file, an optional environment file laid over it, and
    /// `SITEKIT__` environment overrides on top.
    ///
    /// The base file may be missing when an overlay is given; the format of
    /// each file follows its extension.
    pub fn load_layered(path: &Path, overlay: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from(path).required(overlay.is_none()));

        if let Some(overlay) = overlay {
            builder = builder.add_source(config::File::from(overlay));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("SITEKIT").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.css.native_program.trim().is_empty() {
            return Err(CoreError::config("css.native_program cannot be empty"));
        }

        if self.css.stylus_program.trim().is_empty() {
            return Err(CoreError::config("css.stylus_program cannot be empty"));
        }

        for route in &self.routes {
            RoutePattern::parse(&route.pattern)?;
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
