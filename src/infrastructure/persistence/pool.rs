//! Connection pool construction.

use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

use crate::config::Config;

/// Builds the PostgreSQL pool from configuration.
///
/// Every connection carries a server-side `statement_timeout`, and pool
/// checkout is bounded by `db_acquire_timeout`, so a stalled store surfaces
/// as an error instead of a hung request.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let options = connect_options(config)?;

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_with(options)
        .await
        .context("Failed to connect to database")
}

/// Parses the connection string and applies TLS and timeout settings.
pub fn connect_options(config: &Config) -> Result<PgConnectOptions> {
    let ssl_mode = if config.db_ssl {
        PgSslMode::Require
    } else {
        PgSslMode::Prefer
    };

    let options = config
        .database_url
        .parse::<PgConnectOptions>()
        .context("Invalid DATABASE_URL")?
        .ssl_mode(ssl_mode)
        .options([(
            "statement_timeout",
            config.db_statement_timeout_ms.to_string(),
        )]);

    Ok(options)
}

/// Applies embedded schema migrations.
///
/// Every statement is idempotent, so running this at each startup is safe.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply migrations")?;

    Ok(())
}
