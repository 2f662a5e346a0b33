//! Page `<head>` rendering.

use serde::{Deserialize, Serialize};
use sitekit_core::{Config, Meta};

/// Everything that can end up in a page head.
///
/// Deserialises straight from page front-matter; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadData {
    pub charset: Option<String>,
    pub title: Option<String>,

    /// `%s` is replaced by `title`.
    pub title_template: Option<String>,

    pub description: Option<String>,
    pub author: Option<String>,
    pub viewport: Option<String>,

    /// Open Graph image.
    #[serde(alias = "og")]
    pub og_image: Option<String>,

    /// Image the browser should fetch early.
    pub preload_image: Option<String>,

    pub favicon: Option<String>,
    pub canonical: Option<String>,
    pub generator: Option<String>,
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
}

impl HeadData {
    /// Read head fields out of page metadata.
    pub fn from_meta(meta: &Meta) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_value(serde_yaml::to_value(meta)?)
    }

    /// Fill unset fields from site-wide configuration.
    pub fn with_defaults(mut self, config: &Config) -> Self {
        let head = &config.head;
        self.charset.get_or_insert_with(|| head.charset.clone());
        self.viewport.get_or_insert_with(|| head.viewport.clone());
        if self.title_template.is_none() {
            self.title_template.clone_from(&head.title_template);
        }
        if self.favicon.is_none() {
            self.favicon.clone_from(&head.favicon);
        }
        if self.description.is_none() {
            self.description.clone_from(&config.site.description);
        }
        if self.author.is_none() {
            self.author.clone_from(&config.site.author);
        }
        self
    }

    /// The final `<title>` text.
    pub fn full_title(&self) -> Option<String> {
        let title = self.title.as_deref()?;
        Some(match self.title_template.as_deref() {
            Some(template) if template.contains("%s") => template.replace("%s", title),
            _ => title.to_string(),
        })
    }
}

/// Render the inner HTML of a `<head>` element, one tag per line.
///
/// ```
/// use sitekit_generator::{HeadData, render_head};
///
/// let head = render_head(&HeadData {
///     charset: Some("foo".into()),
///     title: Some("Hey".into()),
///     preload_image: Some("hey.png".into()),
///     ..HeadData::default()
/// });
/// assert!(head.contains(r#"meta charset="foo""#));
/// assert!(head.contains("<title>Hey</title>"));
/// assert!(head.contains(r#"<link rel="preload" as="image" href="hey.png">"#));
/// ```
pub fn render_head(data: &HeadData) -> String {
    let mut tags = Vec::new();

    if let Some(charset) = &data.charset {
        tags.push(format!(r#"<meta charset="{}">"#, escape(charset)));
    }
    if let Some(viewport) = &data.viewport {
        tags.push(meta_tag("name", "viewport", viewport));
    }
    if let Some(title) = data.full_title() {
        tags.push(format!("<title>{}</title>", escape(&title)));
    }
    if let Some(description) = &data.description {
        tags.push(meta_tag("name", "description", description));
    }
    if let Some(author) = &data.author {
        tags.push(meta_tag("name", "author", author));
    }
    if let Some(generator) = &data.generator {
        tags.push(meta_tag("name", "generator", generator));
    }
    if let Some(image) = &data.og_image {
        tags.push(meta_tag("property", "og:image", image));
    }
    if let Some(href) = &data.canonical {
        tags.push(link_tag("canonical", href));
    }
    if let Some(href) = &data.favicon {
        tags.push(link_tag("icon", href));
    }
    if let Some(href) = &data.preload_image {
        tags.push(format!(
            r#"<link rel="preload" as="image" href="{}">"#,
            escape(href)
        ));
    }
    for href in &data.stylesheets {
        tags.push(link_tag("stylesheet", href));
    }
    for src in &data.scripts {
        tags.push(format!(r#"<script src="{}"></script>"#, escape(src)));
    }

    tags.join("\n")
}

fn meta_tag(attr: &str, key: &str, content: &str) -> String {
    format!(r#"<meta {attr}="{key}" content="{}">"#, escape(content))
}

fn link_tag(rel: &str, href: &str) -> String {
    format!(r#"<link rel="{rel}" href="{}">"#, escape(href))
}

/// Escape HTML special characters.
pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
