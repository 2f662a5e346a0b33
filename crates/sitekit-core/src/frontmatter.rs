//! Front-matter splitting for content files.

use std::collections::BTreeMap;

use crate::error::{CoreError, Result};

/// Page metadata parsed from a front-matter block.
pub type Meta = BTreeMap<String, serde_yaml::Value>;

/// Delimiter types for front-matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML front-matter delimited by `---`.
    Yaml,
    /// TOML front-matter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// Get the delimiter string for this format.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split content into front-matter and body.
///
/// Both delimiters must sit on lines of their own. Returns `None` when the
/// content has no block or the block is never closed.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start();

    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };
    let delimiter = format.delimiter();

    let (opening, rest) = content.split_once('\n')?;
    if opening.trim_end() != delimiter {
        return None;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == delimiter {
            let frontmatter = &rest[..offset];
            let body = rest[offset + line.len()..].trim_start_matches(['\r', '\n']);
            return Some((format, frontmatter, body));
        }
        offset += line.len();
    }

    None
}

/// Parse the front-matter block of `content` into a metadata map.
///
/// Content without a block yields empty metadata and the full content as
/// the body.
pub fn parse_meta(content: &str) -> Result<(Meta, &str)> {
    let Some((format, block, body)) = split_frontmatter(content) else {
        return Ok((Meta::new(), content));
    };

    if block.trim().is_empty() {
        return Ok((Meta::new(), body));
    }

    let meta: Meta = match format {
        FrontmatterFormat::Yaml => {
            serde_yaml::from_str(block).map_err(|e| CoreError::frontmatter(e.to_string()))?
        }
        FrontmatterFormat::Toml => {
            toml::from_str(block).map_err(|e| CoreError::frontmatter(e.to_string()))?
        }
    };

    Ok((meta, body))
}
