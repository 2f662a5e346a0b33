//! Sitekit Stylesheet Library
//!
//! Compiles stylesheets through pluggable external engines and reports every
//! engine failure as one [`Diagnostic`] shape.
//!
//! # Modules
//!
//! - [`diagnostic`] - Unified compile diagnostics
//! - [`backend`] - The engine capability and backend kinds
//! - [`lightning`] - Plain CSS through `lightningcss`
//! - [`stylus`] - Indented syntax through `stylus`
//! - [`registry`] - Engine discovery, probed once per registry
//! - [`coordinator`] - Backend selection, compilation and normalisation

pub mod backend;
pub mod coordinator;
pub mod diagnostic;
pub mod lightning;
mod process;
pub mod registry;
pub mod stylus;

pub use backend::{BackendKind, EngineFailure, StylesheetBackend};
pub use coordinator::{Coordinator, StylesheetJob, select_backend};
pub use diagnostic::Diagnostic;
pub use lightning::LightningBackend;
pub use registry::BackendRegistry;
pub use stylus::StylusBackend;
use thiserror::Error;

/// Stylesheet build errors.
#[derive(Debug, Error)]
pub enum CssError {
    /// The extension hint names no known stylesheet language.
    #[error("unsupported stylesheet extension: {0}")]
    UnsupportedExtension(String),

    /// The engine for this backend was not found at startup.
    #[error("{0} stylesheet engine is not available")]
    Unavailable(BackendKind),

    /// The engine rejected the source.
    #[error("compile error: {0}")]
    Compile(#[from] Diagnostic),

    /// The engine could not be run.
    #[error("failed to run {kind} stylesheet engine: {source}")]
    Engine {
        kind: BackendKind,
        #[source]
        source: std::io::Error,
    },
}

impl CssError {
    /// The compile diagnostic, if this is a source error.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Compile(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }
}

/// Result type for stylesheet operations.
pub type Result<T> = std::result::Result<T, CssError>;
