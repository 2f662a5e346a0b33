//! Source path resolution.
//!
//! Every content file gets a fixed set of names derived from its
//! repository-relative path: the URL it is served at, its directory, the
//! app group it belongs to (the first directory) and its output slug.

use std::path::Path;

use serde::Serialize;

/// Names derived from a single source path.
///
/// ```
/// use sitekit_core::path::resolve;
///
/// let parts = resolve("docs/glossary/semantic-css.md");
/// assert_eq!(parts.url, "/docs/glossary/semantic-css.html");
/// assert_eq!(parts.dir, "docs/glossary");
/// assert_eq!(parts.appdir, "docs");
/// assert_eq!(parts.slug, "semantic-css.html");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathParts {
    /// Server-rooted URL ending in `.html`.
    pub url: String,

    /// Every component but the last, `/`-joined. Empty for top-level files.
    pub dir: String,

    /// First path component. Empty for top-level files.
    pub appdir: String,

    /// Final component with its extension rewritten to `.html`.
    pub slug: String,
}

impl PathParts {
    /// Resolve a platform path, normalising separators and any leading
    /// `./` or `/` first.
    ///
    /// # Panics
    ///
    /// Panics if nothing is left after normalising, as for `""`, `"./"` or
    /// `"/"`. Use [`PathParts::try_from_path`] for paths that come from
    /// user input.
    pub fn from_path(path: &Path) -> Self {
        resolve(&relative(path))
    }

    /// Like [`PathParts::from_path`], but `None` when nothing is left of
    /// the path after normalising.
    pub fn try_from_path(path: &Path) -> Option<Self> {
        let relative = relative(path);
        (!relative.is_empty()).then(|| resolve(&relative))
    }
}

fn relative(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    normalized
        .trim_start_matches("./")
        .trim_start_matches('/')
        .to_string()
}

/// Derive [`PathParts`] from a repository-relative, `/`-separated path.
///
/// # Panics
///
/// Panics if `path` is empty. Callers hand in paths found while walking the
/// source tree, so an empty one is a bug in the caller.
pub fn resolve(path: &str) -> PathParts {
    assert!(!path.is_empty(), "source path must not be empty");

    let (dir, file) = path.rsplit_once('/').unwrap_or(("", path));
    let appdir = dir.split_once('/').map_or(dir, |(first, _)| first);
    let slug = html_name(file);

    let url = if dir.is_empty() {
        format!("/{slug}")
    } else {
        format!("/{dir}/{slug}")
    };

    PathParts {
        url,
        dir: dir.to_string(),
        appdir: appdir.to_string(),
        slug,
    }
}

/// Swap a file name's extension for `.html`.
fn html_name(file: &str) -> String {
    match file.rfind('.') {
        // A leading dot marks a hidden file, not an extension
        Some(dot) if dot > 0 => format!("{}.html", &file[..dot]),
        _ => format!("{file}.html"),
    }
}
