//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code generation, code/URL validation and the
//!   reserved path segment list

pub mod code_generator;
