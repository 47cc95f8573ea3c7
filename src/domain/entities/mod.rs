//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence logic.
//!
//! - [`Link`] - A short code mapped to a target URL, with its click counter
//! - [`NewLink`] - Input for creating a link

pub mod link;

pub use link::{Link, NewLink};
