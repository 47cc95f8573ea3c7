//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use async_trait::async_trait;

/// Typed outcome of a failed store operation.
///
/// Implementations translate driver-specific errors into these variants so
/// callers never match on vendor error codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// A uniqueness or check constraint rejected the write.
    #[error("constraint violation: {}", constraint.as_deref().unwrap_or("unknown"))]
    ConstraintViolation { constraint: Option<String> },

    /// The store could not be reached in time (pool exhausted, connection
    /// dropped, statement timeout). The operation had no effect.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(String),
}

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with a zeroed counter.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::ConstraintViolation`] if the code is taken.
    async fn insert(&self, new_link: NewLink) -> Result<Link, RepositoryError>;

    /// Returns whether a link with this code currently exists.
    async fn exists(&self, code: &str) -> Result<bool, RepositoryError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, RepositoryError>;

    /// Lists every link, newest first.
    async fn list(&self) -> Result<Vec<Link>, RepositoryError>;

    /// Deletes a link and returns the removed code, or `None` if absent.
    async fn delete_by_code(&self, code: &str) -> Result<Option<String>, RepositoryError>;

    /// Counts a click in a single atomic statement.
    ///
    /// Increments `total_clicks`, stamps `last_clicked` with the current time
    /// and returns the target URL. Returns `Ok(None)` if no link matches.
    async fn record_click(&self, code: &str) -> Result<Option<String>, RepositoryError>;
}
