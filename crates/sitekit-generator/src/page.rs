//! Page assembly.
//!
//! A content file becomes one HTML document: its path decides where the
//! page lives, its front-matter feeds the head, and its body is rendered
//! from Markdown.

use std::path::Path;

use serde::Serialize;
use sitekit_core::{Config, Meta, PathParts};
use sitekit_parser::{MarkdownError, MarkdownParser};
use thiserror::Error;
use tracing::debug;

use crate::head::{HeadData, escape, render_head};

/// Page generation errors.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The source path was empty.
    #[error("source path is empty")]
    EmptyPath,

    /// The content file could not be parsed.
    #[error("markdown error: {0}")]
    Markdown(#[from] MarkdownError),

    /// Front-matter fields have the wrong shape for the head.
    #[error("invalid head metadata: {0}")]
    Head(#[from] serde_yaml::Error),
}

/// Result type for page generation.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// A fully rendered page.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    /// Names derived from the source path.
    pub parts: PathParts,

    /// Front-matter of the source.
    pub meta: Meta,

    /// The complete HTML document.
    pub html: String,
}

impl RenderedPage {
    /// Whether the page is marked `draft: true`.
    pub fn is_draft(&self) -> bool {
        self.meta
            .get("draft")
            .and_then(serde_yaml::Value::as_bool)
            .unwrap_or(false)
    }
}

/// Render the content file at `source_path` whose text is `text`.
///
/// A leading `./` or `/` on the path is ignored. Pages without a `title`
/// take the text of their first heading, then the site title.
pub fn render_page(source_path: &str, text: &str, config: &Config) -> Result<RenderedPage> {
    let parts =
        PathParts::try_from_path(Path::new(source_path)).ok_or(GeneratorError::EmptyPath)?;
    let doc = MarkdownParser::new()
        .with_heading_anchors(config.build.heading_anchors)
        .parse(text)?;

    let mut head = HeadData::from_meta(&doc.meta)?.with_defaults(config);
    if head.title.is_none() {
        head.title = doc
            .toc
            .first()
            .map(|entry| entry.text.clone())
            .or_else(|| (!config.site.title.is_empty()).then(|| config.site.title.clone()));
    }
    if head.canonical.is_none() && !config.site.base_url.is_empty() {
        head.canonical = Some(config.url_for(&parts.url));
    }

    let html = format!(
        "<!doctype html>\n<html lang=\"{lang}\">\n<head>\n{head}\n</head>\n<body>\n{body}</body>\n</html>\n",
        lang = escape(&config.site.language),
        head = render_head(&head),
        body = doc.content,
    );

    debug!(source = source_path, url = %parts.url, bytes = html.len(), "rendered page");

    Ok(RenderedPage {
        parts,
        meta: doc.meta,
        html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_page() {
        let page = render_page(
            "docs/glossary/semantic-css.md",
            "---\ntitle: Semantic CSS\nog: og.png\n---\n# Hey",
            &Config::default(),
        )
        .unwrap();

        assert_eq!(page.parts.url, "/docs/glossary/semantic-css.html");
        assert_eq!(page.parts.appdir, "docs");
        assert!(page.html.starts_with("<!doctype html>"));
        assert!(page.html.contains(r#"<html lang="en">"#));
        assert!(page.html.contains("<title>Semantic CSS</title>"));
        assert!(page.html.contains(r#"<meta charset="utf-8">"#));
        assert!(page.html.contains(r#"content="og.png""#));
        assert!(page.html.contains("<h1>Hey</h1>"));
        assert!(!page.is_draft());
    }

    #[test]
    fn test_title_falls_back_to_heading() {
        let page = render_page("index.md", "# Welcome\n\nHello", &Config::default()).unwrap();
        assert!(page.html.contains("<title>Welcome</title>"));
    }

    #[test]
    fn test_title_falls_back_to_site_title() {
        let mut config = Config::default();
        config.site.title = "My Site".to_string();
        config.site.author = Some("Ada".to_string());

        let page = render_page("about.md", "No headings here.", &config).unwrap();
        assert!(page.html.contains("<title>My Site</title>"));
        assert!(page.html.contains(r#"<meta name="author" content="Ada">"#));

        let page = render_page("about.md", "# About", &config).unwrap();
        assert!(page.html.contains("<title>About</title>"));
    }

    #[test]
    fn test_untitled_page_without_site_title() {
        let page = render_page("about.md", "Text", &Config::default()).unwrap();
        assert!(!page.html.contains("<title>"));
    }

    #[test]
    fn test_heading_anchors_from_config() {
        let mut config = Config::default();
        config.build.heading_anchors = true;

        let page = render_page("guide.md", "# Guide\n## Install", &config).unwrap();
        assert!(page.html.contains(r#"<h1 id="guide">Guide</h1>"#));
        assert!(page.html.contains(r#"<h2 id="install">Install</h2>"#));
    }

    #[test]
    fn test_canonical_from_base_url() {
        let mut config = Config::default();
        config.site.base_url = "https://example.com".to_string();

        let page = render_page("blog/post.md", "Body", &config).unwrap();
        assert!(
            page.html
                .contains(r#"<link rel="canonical" href="https://example.com/blog/post.html">"#)
        );
    }

    #[test]
    fn test_draft_flag() {
        let page = render_page("wip.md", "---\ndraft: true\n---\nSoon", &Config::default()).unwrap();
        assert!(page.is_draft());
    }

    #[test]
    fn test_empty_path() {
        let result = render_page("", "# Hey", &Config::default());
        assert!(matches!(result, Err(GeneratorError::EmptyPath)));

        let result = render_page("./", "# Hey", &Config::default());
        assert!(matches!(result, Err(GeneratorError::EmptyPath)));
    }

    #[test]
    fn test_bad_head_metadata() {
        let result = render_page("a.md", "---\nscripts: 3\n---\n", &Config::default());
        assert!(matches!(result, Err(GeneratorError::Head(_))));
    }
}
