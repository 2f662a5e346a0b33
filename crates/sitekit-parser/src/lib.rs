//! Sitekit Parser Library
//!
//! Turns Markdown content files into page metadata plus rendered HTML.

pub mod markdown;

pub use markdown::{Document, MarkdownError, MarkdownParser, Result, TocEntry, parse_markdown};
