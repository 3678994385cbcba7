//! Core domain entities.
//!
//! - [`Link`] - A persisted short code to URL mapping
//! - [`NewLink`] - Insert request for a freshly minted code

pub mod link;

pub use link::{Link, NewLink};
