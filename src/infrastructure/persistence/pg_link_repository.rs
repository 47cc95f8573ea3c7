//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::db_error::map_sqlx_error;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, RepositoryError};

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    target_url: String,
    total_clicks: i64,
    last_clicked: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(
            r.id,
            r.code,
            r.target_url,
            r.total_clicks,
            r.last_clicked,
            r.created_at,
        )
    }
}

/// PostgreSQL repository for link storage and click counting.
///
/// Uses bound parameters for every query. Click counting is a single
/// `UPDATE ... RETURNING` statement, so concurrent redirects never lose an
/// increment.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, RepositoryError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, target_url)
            VALUES ($1, $2)
            RETURNING id, code, target_url, total_clicks, last_clicked, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.target_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn exists(&self, code: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM links WHERE code = $1)")
            .bind(code)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, RepositoryError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, target_url, total_clicks, last_clicked, created_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Link::from))
    }

    async fn list(&self) -> Result<Vec<Link>, RepositoryError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, target_url, total_clicks, last_clicked, created_at
            FROM links
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn delete_by_code(&self, code: &str) -> Result<Option<String>, RepositoryError> {
        sqlx::query_scalar::<_, String>("DELETE FROM links WHERE code = $1 RETURNING code")
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }

    async fn record_click(&self, code: &str) -> Result<Option<String>, RepositoryError> {
        sqlx::query_scalar::<_, String>(
            r#"
            UPDATE links
            SET total_clicks = total_clicks + 1,
                last_clicked = NOW()
            WHERE code = $1
            RETURNING target_url
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }
}
