//! Plain CSS through the `lightningcss` command-line engine.

use std::io::Write;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    backend::{BackendKind, EngineFailure, StylesheetBackend},
    diagnostic::Diagnostic,
    process,
};

// "<message> at <file>:<line>[:<column>]", line counted from 0. The CLI may
// wrap it in an io::Error debug dump, so the match is not anchored at the end.
static LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^(?:Error:\s*)?(Custom \{ kind: \w+, error: ")?(.*)\s+at\s+([^:\n"]+):(\d+)(?::(\d+))?"#)
        .expect("valid location regex")
});

/// Native backend driving `lightningcss`.
#[derive(Debug, Clone)]
pub struct LightningBackend {
    program: String,
}

impl Default for LightningBackend {
    fn default() -> Self {
        Self::new("lightningcss")
    }
}

impl LightningBackend {
    /// Create a backend that runs `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl StylesheetBackend for LightningBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Native
    }

    fn engine(&self) -> &str {
        &self.program
    }

    fn probe(&self) -> bool {
        process::probe(&self.program)
    }

    fn compile(&self, source: &str, minify: bool) -> Result<String, EngineFailure> {
        // The CLI reads from a file argument
        let mut input = tempfile::Builder::new()
            .prefix("sitekit-")
            .suffix(".css")
            .tempfile()
            .map_err(EngineFailure::Spawn)?;
        input
            .write_all(source.as_bytes())
            .and_then(|()| input.flush())
            .map_err(EngineFailure::Spawn)?;

        let path = input.path().to_string_lossy().into_owned();
        let mut args = Vec::with_capacity(2);
        if minify {
            args.push("--minify");
        }
        args.push(path.as_str());

        let css = process::run(&self.program, &args, None)?;
        Ok(css.trim_end().to_string())
    }

    fn normalize_error(&self, report: &str, source: &str) -> Diagnostic {
        if let Some(caps) = LOCATION.captures(report) {
            let raw = caps[2].trim();
            let message = if caps.get(1).is_some() {
                unescape_debug(raw)
            } else {
                raw.to_string()
            };
            let line = caps[4].parse::<usize>().map_or(1, |l| l + 1);
            let column = caps
                .get(5)
                .and_then(|c| c.as_str().parse().ok())
                .unwrap_or(1);
            return Diagnostic::at(message, line, column, source);
        }

        let message = report
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(|l| l.trim_start_matches("Error:").trim())
            .unwrap_or("lightningcss failed");
        Diagnostic::at(message, 1, 1, source)
    }
}

/// Undo the escaping of a string printed with `{:?}`.
fn unescape_debug(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
