//! Backend selection, compilation and error normalisation.

use rayon::prelude::*;
use tracing::debug;

use crate::{
    CssError, Result,
    backend::{BackendKind, EngineFailure},
    registry::BackendRegistry,
};

/// One stylesheet to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetJob {
    /// The stylesheet source.
    pub source_text: String,

    /// File extension or language name used to pick the backend.
    pub extension_or_hint: String,

    /// Ask the engine for its densest output.
    pub minify: bool,
}

impl StylesheetJob {
    /// A plain-CSS job.
    pub fn new(source_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            extension_or_hint: String::new(),
            minify: false,
        }
    }

    /// Set the extension or language hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.extension_or_hint = hint.into();
        self
    }

    /// Set whether to minify.
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }
}

/// Map an extension or language hint onto a backend.
///
/// An empty hint means plain CSS. A leading dot and letter case are
/// ignored. The source text is never inspected.
pub fn select_backend(hint: &str) -> Result<BackendKind> {
    let normalized = hint.trim().trim_start_matches('.').to_ascii_lowercase();
    match normalized.as_str() {
        "" | "css" => Ok(BackendKind::Native),
        "styl" | "stylus" => Ok(BackendKind::AltSyntax),
        _ => Err(CssError::UnsupportedExtension(hint.to_string())),
    }
}

/// Compiles stylesheet jobs against a backend registry.
#[derive(Debug, Clone, Copy)]
pub struct Coordinator<'r> {
    registry: &'r BackendRegistry,
}

impl Coordinator<'static> {
    /// A coordinator over the process-wide registry.
    pub fn global() -> Self {
        Self::new(BackendRegistry::global())
    }
}

impl<'r> Coordinator<'r> {
    /// Create a coordinator over `registry`.
    pub fn new(registry: &'r BackendRegistry) -> Self {
        Self { registry }
    }

    /// The registry this coordinator consults.
    pub fn registry(&self) -> &'r BackendRegistry {
        self.registry
    }

    /// Whether the engine for `kind` was found.
    pub fn is_available(&self, kind: BackendKind) -> bool {
        self.registry.is_available(kind)
    }

    /// Compile one job.
    ///
    /// Engine output is returned verbatim. Rejected sources come back as
    /// [`CssError::Compile`] with a 1-based diagnostic.
    pub fn build(&self, job: &StylesheetJob) -> Result<String> {
        let kind = select_backend(&job.extension_or_hint)?;
        debug!(%kind, hint = %job.extension_or_hint, minify = job.minify, "selected stylesheet backend");

        let backend = match self.registry.get(kind) {
            Some(backend) if self.registry.is_available(kind) => backend,
            _ => return Err(CssError::Unavailable(kind)),
        };

        match backend.compile(&job.source_text, job.minify) {
            Ok(css) => {
                debug!(%kind, bytes = css.len(), "stylesheet compiled");
                Ok(css)
            }
            Err(EngineFailure::Rejected(report)) => {
                let diagnostic = backend.normalize_error(&report, &job.source_text);
                debug!(
                    %kind,
                    line = diagnostic.line,
                    column = diagnostic.column,
                    message = %diagnostic.message,
                    "stylesheet rejected"
                );
                Err(CssError::Compile(diagnostic))
            }
            Err(EngineFailure::Spawn(source)) => Err(CssError::Engine { kind, source }),
        }
    }

    /// Compile many jobs in parallel, one result per job in input order.
    pub fn build_batch(&self, jobs: &[StylesheetJob]) -> Vec<Result<String>> {
        jobs.par_iter().map(|job| self.build(job)).collect()
    }
}
