//! Unified compile diagnostics.

use thiserror::Error;

/// A stylesheet compile failure pinned to a source location.
///
/// Lines and columns are 1-based whatever the engine reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (line {line}, column {column})")]
pub struct Diagnostic {
    /// Human-readable description from the engine.
    pub message: String,

    /// 1-based line number.
    pub line: usize,

    /// 1-based column number.
    pub column: usize,

    /// The source line at `line`, without its newline.
    pub line_text: String,
}

impl Diagnostic {
    /// Build a diagnostic at a 1-based position, copying the line text out
    /// of `source`.
    ///
    /// Positions below 1 are raised to 1. A line past the end of the source
    /// keeps its number and gets empty line text.
    pub fn at(message: impl Into<String>, line: usize, column: usize, source: &str) -> Self {
        let line = line.max(1);
        let line_text = source
            .lines()
            .nth(line - 1)
            .unwrap_or_default()
            .to_string();

        Self {
            message: message.into(),
            line,
            column: column.max(1),
            line_text,
        }
    }

    /// Render the offending line with a caret under the column.
    ///
    /// A column of 0 in a hand-built diagnostic puts the caret at the start.
    ///
    /// ```
    /// use sitekit_css::Diagnostic;
    ///
    /// let d = Diagnostic::at("expected \"}\"", 1, 12, "foo { mb: 0");
    /// assert_eq!(d.excerpt(), "1 | foo { mb: 0\n  |            ^");
    /// ```
    pub fn excerpt(&self) -> String {
        let gutter = self.line.to_string();
        format!(
            "{gutter} | {}\n{} | {}^",
            self.line_text,
            " ".repeat(gutter.len()),
            " ".repeat(self.column.saturating_sub(1))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_copies_line_text() {
        let source = "body {\n  margin 0;\n}";
        let d = Diagnostic::at("missing colon", 2, 3, source);

        assert_eq!(d.line, 2);
        assert_eq!(d.column, 3);
        assert_eq!(d.line_text, "  margin 0;");
        assert_eq!(d.message, "missing colon");
    }

    #[test]
    fn test_at_clamps_zero_positions() {
        let d = Diagnostic::at("oops", 0, 0, "a {}");
        assert_eq!((d.line, d.column), (1, 1));
        assert_eq!(d.line_text, "a {}");
    }

    #[test]
    fn test_at_past_end() {
        let d = Diagnostic::at("unexpected end", 3, 1, "a {");
        assert_eq!(d.line, 3);
        assert_eq!(d.line_text, "");
    }

    #[test]
    fn test_crlf_line_text() {
        let d = Diagnostic::at("x", 1, 1, "a {\r\nb");
        assert_eq!(d.line_text, "a {");
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::at("Unexpected token", 1, 6, "body margin: 0 }");
        assert_eq!(d.to_string(), "Unexpected token (line 1, column 6)");
    }

    #[test]
    fn test_excerpt_wide_gutter() {
        let source = (1..=12).map(|n| format!("l{n}")).collect::<Vec<_>>().join("\n");
        let d = Diagnostic::at("x", 12, 2, &source);
        assert_eq!(d.excerpt(), "12 | l12\n   |  ^");
    }

    #[test]
    fn test_excerpt_zero_column_from_literal() {
        let d = Diagnostic {
            message: "x".into(),
            line: 1,
            column: 0,
            line_text: "a {".into(),
        };
        assert_eq!(d.excerpt(), "1 | a {\n  | ^");
    }
}
