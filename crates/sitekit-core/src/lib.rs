//! Sitekit Core Library
//!
//! Source path resolution, site configuration, front-matter splitting and
//! error handling shared by the sitekit crates.

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod path;

pub use config::Config;
pub use error::{CoreError, Result};
pub use frontmatter::{FrontmatterFormat, Meta, parse_meta, split_frontmatter};
pub use path::{PathParts, resolve};
