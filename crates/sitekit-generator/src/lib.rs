//! Sitekit Generator Library
//!
//! Renders page heads and assembles content files into HTML pages.
//!
//! # Modules
//!
//! - [`head`] - `<head>` metadata and its HTML rendering
//! - [`page`] - Page assembly from a source path and its text

pub mod head;
pub mod page;

pub use head::{HeadData, render_head};
pub use page::{GeneratorError, RenderedPage, Result, render_page};
