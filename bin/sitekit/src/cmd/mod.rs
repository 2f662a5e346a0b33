//! Command implementations.

pub mod css;
pub mod engines;
pub mod page;
pub mod parts;
pub mod route;
