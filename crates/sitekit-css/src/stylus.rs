//! Indented alternate syntax through the `stylus` command-line engine.
//!
//! Stylus reports failures as a header line such as
//! `ParseError: stdin:1:12`, a numbered excerpt with a caret line, and the
//! message after a blank line. Node may wrap all of that in a stack trace.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    backend::{BackendKind, EngineFailure, StylesheetBackend},
    diagnostic::Diagnostic,
    process,
};

static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(\w*Error):\s*(.*?):(\d+):(\d+)\s*$").expect("valid header regex")
});

// Excerpt rows ("   1| foo") and caret rows ("-----^")
static EXCERPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+\||-*\^$)").expect("valid excerpt regex"));

/// Alternate-syntax backend driving `stylus` over stdin.
#[derive(Debug, Clone)]
pub struct StylusBackend {
    program: String,
}

impl Default for StylusBackend {
    fn default() -> Self {
        Self::new("stylus")
    }
}

impl StylusBackend {
    /// Create a backend that runs `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl StylesheetBackend for StylusBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::AltSyntax
    }

    fn engine(&self) -> &str {
        &self.program
    }

    fn probe(&self) -> bool {
        process::probe(&self.program)
    }

    fn compile(&self, source: &str, minify: bool) -> Result<String, EngineFailure> {
        let args: &[&str] = if minify { &["--compress"] } else { &[] };
        let css = process::run(&self.program, args, Some(source))?;
        Ok(css.trim_end().to_string())
    }

    fn normalize_error(&self, report: &str, source: &str) -> Diagnostic {
        let Some(caps) = HEADER.captures(report) else {
            let message = report
                .lines()
                .map(str::trim)
                .find(|l| !l.is_empty())
                .unwrap_or("stylus failed");
            return Diagnostic::at(message, 1, 1, source);
        };

        let line = caps[3].parse().unwrap_or(1);
        let column = caps[4].parse().unwrap_or(1);

        let header_end = caps.get(0).map_or(report.len(), |m| m.end());
        let message = report[header_end..]
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.trim().is_empty())
            .filter(|l| !EXCERPT.is_match(l))
            .map(str::trim)
            .find(|l| !l.starts_with("at "))
            .unwrap_or(&caps[1])
            .to_string();

        Diagnostic::at(message, line, column, source)
    }
}
