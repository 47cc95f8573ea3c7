//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! - [`PgLinkRepository`] - Link storage, lookup and atomic click counting
//! - [`pool`] - Pool construction and schema migrations

pub mod db_error;
pub mod pg_link_repository;
pub mod pool;

pub use pg_link_repository::PgLinkRepository;
