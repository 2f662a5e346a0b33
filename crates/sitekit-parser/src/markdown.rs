//! Markdown parser using pulldown-cmark.

use std::collections::HashSet;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};
use serde::Serialize;
use sitekit_core::{CoreError, Meta, parse_meta};
use thiserror::Error;

/// Markdown parsing errors.
#[derive(Debug, Error)]
pub enum MarkdownError {
    /// Failed to parse front-matter.
    #[error("frontmatter error: {0}")]
    Frontmatter(#[from] CoreError),
}

/// Result type for markdown operations.
pub type Result<T> = std::result::Result<T, MarkdownError>;

/// A heading collected while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Heading level, 1 to 6.
    pub level: u8,

    /// Plain heading text.
    pub text: String,

    /// Anchor id carried by the rendered heading, either written as
    /// `{#id}` or generated when heading anchors are on.
    pub id: Option<String>,
}

/// A parsed content file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    /// Front-matter fields; empty when the file has none.
    pub meta: Meta,

    /// Body rendered to HTML.
    pub content: String,

    /// Headings in document order.
    pub toc: Vec<TocEntry>,
}

/// Markdown parser with a fixed set of extensions.
#[derive(Debug, Clone)]
pub struct MarkdownParser {
    options: Options,
    heading_anchors: bool,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownParser {
    /// Create a parser with tables, footnotes, strikethrough and task lists.
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

        Self {
            options,
            heading_anchors: false,
        }
    }

    /// Give headings without an explicit `{#id}` an id slugged from their
    /// text. Repeated slugs get `-1`, `-2`, ... suffixes.
    pub fn with_heading_anchors(mut self, enabled: bool) -> Self {
        self.heading_anchors = enabled;
        self
    }

    /// Parse a content file with optional front-matter.
    pub fn parse(&self, text: &str) -> Result<Document> {
        let (meta, body) = parse_meta(text)?;
        let (content, toc) = self.render(body);

        Ok(Document { meta, content, toc })
    }

    /// Render a body with no front-matter.
    pub fn render(&self, body: &str) -> (String, Vec<TocEntry>) {
        let mut events: Vec<Event<'_>> = Parser::new_ext(body, self.options).collect();
        let mut toc = Vec::new();
        let mut used = HashSet::new();
        let mut open: Option<(usize, String)> = None;

        for i in 0..events.len() {
            if matches!(events[i], Event::End(TagEnd::Heading(_))) {
                if let Some((start, text)) = open.take() {
                    if let Event::Start(Tag::Heading { level, id, .. }) = &mut events[start] {
                        if id.is_none() && self.heading_anchors {
                            let slug = unique_slug(&text, &mut used);
                            if !slug.is_empty() {
                                *id = Some(slug.into());
                            }
                        } else if let Some(explicit) = id.as_ref() {
                            used.insert(explicit.to_string());
                        }
                        toc.push(TocEntry {
                            level: *level as u8,
                            text,
                            id: id.as_ref().map(|id| id.to_string()),
                        });
                    }
                }
                continue;
            }

            match &events[i] {
                Event::Start(Tag::Heading { .. }) => open = Some((i, String::new())),
                Event::Text(text) | Event::Code(text) => {
                    if let Some((_, buf)) = open.as_mut() {
                        buf.push_str(text);
                    }
                }
                _ => {}
            }
        }

        let mut out = String::with_capacity(body.len() * 3 / 2);
        html::push_html(&mut out, events.into_iter());

        (out, toc)
    }
}

/// Parse `text` with the default parser.
///
/// ```
/// let doc = sitekit_parser::parse_markdown("---\nog: og.png\n---\n# Hey").unwrap();
/// assert_eq!(doc.meta["og"].as_str(), Some("og.png"));
/// assert_eq!(doc.content.trim(), "<h1>Hey</h1>");
/// ```
pub fn parse_markdown(text: &str) -> Result<Document> {
    MarkdownParser::new().parse(text)
}

/// Slug `text`, suffixing it until it is not in `used`.
fn unique_slug(text: &str, used: &mut HashSet<String>) -> String {
    let base = slugify(text);
    if base.is_empty() || used.insert(base.clone()) {
        return base;
    }
    (1..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| used.insert(candidate.clone()))
        .unwrap_or(base)
}

/// Convert text to a URL-safe slug.
fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() {
                Some(c)
            } else if c.is_whitespace() || c == '-' || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
