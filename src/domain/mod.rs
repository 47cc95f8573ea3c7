//! Domain layer containing business entities and repository contracts.
//!
//! The domain layer has no dependency on the HTTP or database layers.
//! Repository traits defined here are implemented in
//! [`crate::infrastructure::persistence`], and business rules live in
//! [`crate::application::services`].
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
