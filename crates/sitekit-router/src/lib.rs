//! Sitekit Router Library
//!
//! Matches concrete paths against route templates such as `/users/:id`.
//!
//! # Modules
//!
//! - [`pattern`] - Pattern compilation, matching and typed parameters
//! - [`table`] - Ordered route tables for navigation
//!
//! # Example
//!
//! ```
//! use sitekit_router::{ParamValue, match_route};
//!
//! let params = match_route("/:view/:id", "/users/20").unwrap().unwrap();
//! assert_eq!(params.get("view"), Some(&ParamValue::from("users")));
//! assert_eq!(params.get("id"), Some(&ParamValue::Int(20)));
//!
//! assert!(match_route("/users/:id/edit", "/users/20").unwrap().is_none());
//! ```

pub mod pattern;
pub mod table;

pub use pattern::{ParamValue, Params, RoutePattern, Segment};
pub use table::{RouteEntry, RouteMatch, RouteTable};
use thiserror::Error;

/// Route pattern compilation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The same parameter name appears twice.
    #[error("duplicate parameter `{name}` in route pattern `{pattern}`")]
    DuplicateParam { pattern: String, name: String },

    /// A `:` segment without a name.
    #[error("empty parameter name in route pattern `{pattern}`")]
    EmptyParamName { pattern: String },
}

/// Result type for pattern compilation.
pub type Result<T> = std::result::Result<T, PatternError>;

/// Compile `pattern` and match `path` against it in one step.
///
/// Returns `Ok(None)` when the path does not match. Use
/// [`RoutePattern::parse`] to compile once when matching repeatedly.
pub fn match_route(pattern: &str, path: &str) -> Result<Option<Params>> {
    Ok(RoutePattern::parse(pattern)?.matches(path))
}
