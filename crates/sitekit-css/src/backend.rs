//! The stylesheet engine capability.
//!
//! Each engine is an adapter pair: [`StylesheetBackend::compile`] runs the
//! engine and [`StylesheetBackend::normalize_error`] turns whatever that
//! engine reports on failure into a [`Diagnostic`]. New engines are added by
//! implementing the trait, never by branching in the coordinator.

use std::fmt;

use crate::diagnostic::Diagnostic;

/// Which backend slot an engine fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Plain CSS.
    Native,
    /// The indented alternate syntax (`.styl`).
    AltSyntax,
}

impl BackendKind {
    /// Short name used in logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::AltSyntax => "alt-syntax",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Raw failure from an engine, before normalisation.
#[derive(Debug)]
pub enum EngineFailure {
    /// The engine ran and rejected the source; holds its error report.
    Rejected(String),
    /// The engine could not be run at all.
    Spawn(std::io::Error),
}

/// A stylesheet compiler engine.
pub trait StylesheetBackend: Send + Sync + fmt::Debug {
    /// The slot this engine fills.
    fn kind(&self) -> BackendKind;

    /// Human-readable engine name.
    fn engine(&self) -> &str;

    /// Check whether the engine is installed. Must not panic or block for
    /// long when it is missing.
    fn probe(&self) -> bool;

    /// Compile `source` to CSS, minifying to the densest form when asked.
    fn compile(&self, source: &str, minify: bool) -> Result<String, EngineFailure>;

    /// Map this engine's error report onto a diagnostic for `source`.
    fn normalize_error(&self, report: &str, source: &str) -> Diagnostic;
}
