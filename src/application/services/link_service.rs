//! Link creation, lookup, listing and deletion.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, RepositoryError};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_code, validate_url};

/// Maximum number of generated candidates checked before inserting anyway.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating and managing short links.
///
/// Validation happens before any store access. Code uniqueness is
/// pre-checked for generated codes, but the store's unique constraint is the
/// final authority for every insert.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// # Code Selection
    ///
    /// - If `custom_code` is provided it must be 6-8 alphanumeric characters
    /// - Otherwise up to [`MAX_GENERATION_ATTEMPTS`] random codes are checked
    ///   against the store, stopping at the first free one. When every
    ///   candidate is taken, the last one is inserted regardless and the
    ///   unique constraint decides.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if `target_url` is not an absolute URL
    /// - [`AppError::InvalidCodeFormat`] if `custom_code` is malformed
    /// - [`AppError::CodeConflict`] if the insert hits the unique constraint
    pub async fn create_link(
        &self,
        target_url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        if !validate_url(&target_url) {
            return Err(AppError::InvalidUrl(target_url));
        }

        let code = match custom_code {
            Some(custom) => {
                if !validate_code(&custom) {
                    return Err(AppError::InvalidCodeFormat(custom));
                }
                custom
            }
            None => self.pick_generated_code().await?,
        };

        let new_link = NewLink {
            code: code.clone(),
            target_url,
        };

        match self.link_repository.insert(new_link).await {
            Ok(link) => {
                tracing::info!(code = %link.code, "Link created");
                Ok(link)
            }
            Err(RepositoryError::ConstraintViolation { .. }) => Err(AppError::CodeConflict(code)),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns every link, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.link_repository.list().await?)
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code. Codes that
    /// could never have been stored are answered without a store round trip.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        if !validate_code(code) {
            return Err(AppError::NotFound(code.to_string()));
        }

        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(code.to_string()))
    }

    /// Deletes a link and returns its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn delete_link(&self, code: &str) -> Result<String, AppError> {
        if !validate_code(code) {
            return Err(AppError::NotFound(code.to_string()));
        }

        let deleted = self
            .link_repository
            .delete_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(code.to_string()))?;

        tracing::info!(code = %deleted, "Link deleted");
        Ok(deleted)
    }

    /// Draws random codes until one is free or the attempt budget runs out.
    ///
    /// Exhausting the budget is not an error: the last candidate is returned
    /// and the insert settles it.
    async fn pick_generated_code(&self) -> Result<String, AppError> {
        let mut candidate = generate_code();

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            if !self.link_repository.exists(&candidate).await? {
                return Ok(candidate);
            }

            tracing::debug!(attempt, code = %candidate, "Generated code already taken");

            if attempt < MAX_GENERATION_ATTEMPTS {
                candidate = generate_code();
            }
        }

        tracing::warn!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "No free code found, inserting last candidate"
        );
        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn create_test_link(id: i64, code: &str, url: &str) -> Link {
        Link::new(id, code.to_string(), url.to_string(), 0, None, Utc::now())
    }

    fn echo_insert(repo: &mut MockLinkRepository) {
        repo.expect_insert()
            .times(1)
            .returning(|new_link| Ok(create_test_link(1, &new_link.code, &new_link.target_url)));
    }

    #[tokio::test]
    async fn test_create_link_generated_code() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_exists()
            .times(1)
            .returning(|_| Ok(false));
        echo_insert(&mut mock_repo);

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .create_link("https://example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(link.code.len(), 6);
        assert!(link.code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(link.target_url, "https://example.com");
        assert_eq!(link.total_clicks, 0);
        assert!(link.last_clicked.is_none());
    }

    #[tokio::test]
    async fn test_create_link_with_custom_code() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_exists().times(0);
        mock_repo
            .expect_insert()
            .withf(|new_link| new_link.code == "MyCode12")
            .times(1)
            .returning(|new_link| Ok(create_test_link(7, &new_link.code, &new_link.target_url)));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .create_link(
                "https://example.com".to_string(),
                Some("MyCode12".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(link.code, "MyCode12");
    }

    #[tokio::test]
    async fn test_create_link_invalid_url() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_exists().times(0);
        mock_repo.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_link("not-a-url".to_string(), None).await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_create_link_invalid_url_checked_before_code() {
        let service = LinkService::new(Arc::new(MockLinkRepository::new()));

        let result = service
            .create_link("example.com".to_string(), Some("ab".to_string()))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_create_link_invalid_custom_codes() {
        for bad in ["ab", "toolongcode123", "my-code", "abc 12", ""] {
            let mut mock_repo = MockLinkRepository::new();
            mock_repo.expect_insert().times(0);

            let service = LinkService::new(Arc::new(mock_repo));

            let result = service
                .create_link("https://example.com".to_string(), Some(bad.to_string()))
                .await;

            assert!(
                matches!(result, Err(AppError::InvalidCodeFormat(_))),
                "code {bad:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_create_link_custom_code_conflict() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_insert().times(1).returning(|_| {
            Err(RepositoryError::ConstraintViolation {
                constraint: Some("links_code_key".to_string()),
            })
        });

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link(
                "https://example.com".to_string(),
                Some("taken123".to_string()),
            )
            .await;

        match result {
            Err(AppError::CodeConflict(code)) => assert_eq!(code, "taken123"),
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_link_retries_on_collision() {
        let mut mock_repo = MockLinkRepository::new();
        let mut calls = 0;
        mock_repo.expect_exists().times(3).returning(move |_| {
            calls += 1;
            Ok(calls < 3)
        });
        echo_insert(&mut mock_repo);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link("https://example.com".to_string(), None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_link_inserts_after_exhausting_attempts() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_exists()
            .times(MAX_GENERATION_ATTEMPTS)
            .returning(|_| Ok(true));
        echo_insert(&mut mock_repo);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link("https://example.com".to_string(), None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_link_exhausted_attempts_then_conflict() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_exists()
            .times(MAX_GENERATION_ATTEMPTS)
            .returning(|_| Ok(true));
        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(RepositoryError::ConstraintViolation { constraint: None }));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link("https://example.com".to_string(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::CodeConflict(_)));
    }

    #[tokio::test]
    async fn test_create_link_store_unavailable() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_exists()
            .times(1)
            .returning(|_| Err(RepositoryError::Unavailable("pool timed out".to_string())));
        mock_repo.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link("https://example.com".to_string(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_get_link_by_code_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|code| Ok(Some(create_test_link(3, code, "https://example.com"))));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service.get_link_by_code("abc123").await.unwrap();
        assert_eq!(link.id, 3);
        assert_eq!(link.code, "abc123");
    }

    #[tokio::test]
    async fn test_get_link_by_code_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.get_link_by_code("nothere").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_links_passes_through_order() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_list().times(1).returning(|| {
            Ok(vec![
                create_test_link(2, "bbbbbb", "https://b.example.com"),
                create_test_link(1, "aaaaaa", "https://a.example.com"),
            ])
        });

        let service = LinkService::new(Arc::new(mock_repo));

        let links = service.list_links().await.unwrap();
        let codes: Vec<_> = links.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, ["bbbbbb", "aaaaaa"]);
    }

    #[tokio::test]
    async fn test_delete_link_success() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_delete_by_code()
            .times(1)
            .returning(|code| Ok(Some(code.to_string())));

        let service = LinkService::new(Arc::new(mock_repo));

        assert_eq!(service.delete_link("abc123").await.unwrap(), "abc123");
    }

    #[tokio::test]
    async fn test_delete_link_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_delete_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.delete_link("abc123").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_malformed_codes_skip_store() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_find_by_code().times(0);
        mock_repo.expect_delete_by_code().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        for code in ["abc\0de", "ab", "toolongcode123", "my-code"] {
            let result = service.get_link_by_code(code).await;
            assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));

            let result = service.delete_link(code).await;
            assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
        }
    }
}
