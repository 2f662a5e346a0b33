//! Integration tests for sitekit-router
//!
//! Covers the public matching contract:
//! - Segment counts must agree
//! - Literal segments match exactly, with no partial matches
//! - Captured integers are coerced, everything else stays text

use sitekit_router::*;

fn int(n: i64) -> ParamValue {
    ParamValue::Int(n)
}

#[test]
fn test_users_id() {
    let params = match_route("/users/:id", "/users/20").unwrap().unwrap();
    assert_eq!(params, [("id", int(20))].into_iter().collect::<Params>());
}

#[test]
fn test_view_and_id() {
    let params = match_route("/:view/:id", "/users/20").unwrap().unwrap();
    assert_eq!(
        params,
        [("id", int(20)), ("view", ParamValue::from("users"))]
            .into_iter()
            .collect::<Params>()
    );
}

#[test]
fn test_longer_pattern_never_matches() {
    assert_eq!(match_route("/users/:id/edit", "/users/20").unwrap(), None);
}

#[test]
fn test_wrong_literal_never_matches() {
    assert_eq!(match_route("/fail/:id", "/users/20").unwrap(), None);
}

#[test]
fn test_differing_segment_counts() {
    let cases = [
        ("/:a", "/"),
        ("/:a", "/x/y"),
        ("/:a/:b", "/x"),
        ("/", "/x"),
        ("/a/b/c", "/a/b"),
    ];
    for (pattern, path) in cases {
        assert_eq!(
            match_route(pattern, path).unwrap(),
            None,
            "{pattern} should not match {path}"
        );
    }
}

#[test]
fn test_param_only_patterns_round_trip() {
    let pattern = RoutePattern::parse("/:a/:b/:c").unwrap();
    let params = pattern.matches("/12/hello/-3").unwrap();

    assert_eq!(params.get("a").and_then(ParamValue::as_int), Some(12));
    assert_eq!(params.get("b").and_then(ParamValue::as_str), Some("hello"));
    assert_eq!(params.get("c").and_then(ParamValue::as_int), Some(-3));
}

#[test]
fn test_leading_and_trailing_slashes_ignored() {
    let params = match_route("users/:id/", "//users/7").unwrap().unwrap();
    assert_eq!(params.get("id"), Some(&int(7)));
}

#[test]
fn test_matching_is_idempotent() {
    let pattern = RoutePattern::parse("/:view/:id").unwrap();
    assert_eq!(pattern.matches("/users/20"), pattern.matches("/users/20"));
}

#[test]
fn test_invalid_pattern_is_an_error_not_a_mismatch() {
    assert!(match_route("/:id/:id", "/1/2").is_err());
}

#[test]
fn test_table_resolves_navigation() {
    let table = RouteTable::from_routes([
        ("/", "home.html"),
        ("/users/:id", "user.html"),
        ("/:view/:id", "view.html"),
    ])
    .unwrap();

    assert_eq!(*table.resolve("/").unwrap().target, "home.html");
    assert_eq!(*table.resolve("/users/3").unwrap().target, "user.html");

    let matched = table.resolve("/posts/hello").unwrap();
    assert_eq!(*matched.target, "view.html");
    assert_eq!(matched.params.get("id"), Some(&ParamValue::from("hello")));
}

#[test]
fn test_patterns_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RoutePattern>();
    assert_send_sync::<RouteTable<String>>();

    let pattern = std::sync::Arc::new(RoutePattern::parse("/users/:id").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|n| {
            let pattern = pattern.clone();
            std::thread::spawn(move || pattern.matches(&format!("/users/{n}")))
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let params = handle.join().unwrap().unwrap();
        assert_eq!(params.get("id"), Some(&int(n as i64)));
    }
}
