//! Redirect resolution with atomic click counting.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{is_reserved, validate_code};

/// Resolves short codes to their target URL and counts the click.
pub struct RedirectService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> RedirectService<L> {
    /// Creates a new redirect service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Counts a click for `code` and returns the URL to redirect to.
    ///
    /// The increment, the `last_clicked` stamp and the URL lookup happen in
    /// one store statement, so the click is committed by the time the target
    /// is returned. Reserved path segments and strings that are not a valid
    /// code are rejected without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for reserved segments and unknown codes.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        if is_reserved(code) || !validate_code(code) {
            return Err(AppError::NotFound(code.to_string()));
        }

        match self.link_repository.record_click(code).await? {
            Some(target_url) => Ok(target_url),
            None => {
                tracing::debug!(code, "Redirect miss");
                Err(AppError::NotFound(code.to_string()))
            }
        }
    }
}
