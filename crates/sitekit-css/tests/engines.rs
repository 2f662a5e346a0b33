//! Tests against the real command-line engines.
//!
//! Each test returns early when its engine is not installed, the same way a
//! build consults availability before compiling.

use sitekit_css::{BackendKind, Coordinator, CssError, StylesheetJob};

fn coordinator_for(kind: BackendKind) -> Option<Coordinator<'static>> {
    let coordinator = Coordinator::global();
    if coordinator.is_available(kind) {
        Some(coordinator)
    } else {
        eprintln!("skipping: {kind} engine not installed");
        None
    }
}

#[test]
fn test_native_minifies() {
    let Some(coordinator) = coordinator_for(BackendKind::Native) else {
        return;
    };

    let job = StylesheetJob::new("body { margin: 0 }").with_minify(true);
    let css = coordinator.build(&job).expect("valid css compiles");

    assert_eq!(css, "body{margin:0}");
}

#[test]
fn test_native_reports_position() {
    let Some(coordinator) = coordinator_for(BackendKind::Native) else {
        return;
    };

    let source = "body margin: 0 }";
    let err = coordinator
        .build(&StylesheetJob::new(source).with_hint("css").with_minify(true))
        .expect_err("broken css is rejected");

    let diagnostic = match err {
        CssError::Compile(diagnostic) => diagnostic,
        other => panic!("expected a compile diagnostic, got {other:?}"),
    };
    assert_eq!(diagnostic.line, 1);
    assert_eq!(diagnostic.line_text, source);
    assert!(diagnostic.column >= 1);
    assert!(!diagnostic.message.is_empty());
}

#[test]
fn test_stylus_compiles() {
    let Some(coordinator) = coordinator_for(BackendKind::AltSyntax) else {
        return;
    };

    let job = StylesheetJob::new("body\n  margin 0\n").with_hint(".styl");
    let css = coordinator.build(&job).expect("valid stylus compiles");

    assert!(css.contains("margin: 0"), "unexpected output: {css}");
}

#[test]
fn test_stylus_minifies() {
    let Some(coordinator) = coordinator_for(BackendKind::AltSyntax) else {
        return;
    };

    let job = StylesheetJob::new("body\n  margin: 0")
        .with_hint(".styl")
        .with_minify(true);
    assert_eq!(coordinator.build(&job).expect("compiles"), "body{margin:0}");
}

#[test]
fn test_stylus_reports_position() {
    let Some(coordinator) = coordinator_for(BackendKind::AltSyntax) else {
        return;
    };

    let err = coordinator
        .build(&StylesheetJob::new("foo { mb: 0").with_hint("styl"))
        .expect_err("unterminated block is rejected");

    let diagnostic = err.diagnostic().expect("compile diagnostic");
    assert_eq!(diagnostic.line, 1);
    assert_eq!(diagnostic.column, 12);
    assert_eq!(diagnostic.line_text, "foo { mb: 0");
    assert!(!diagnostic.message.is_empty());
}

#[test]
fn test_unsupported_extension_needs_no_engine() {
    let err = Coordinator::global()
        .build(&StylesheetJob::new("$x: 1;").with_hint("scss"))
        .expect_err("scss is not supported");
    assert!(matches!(err, CssError::UnsupportedExtension(_)));
}
