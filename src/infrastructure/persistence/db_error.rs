//! Translation of SQLx errors into [`RepositoryError`].

use crate::domain::repositories::RepositoryError;

/// SQLSTATE raised when `statement_timeout` cancels a query.
const QUERY_CANCELED: &str = "57014";

/// SQLSTATE class for connection exceptions (`08xxx`).
const CONNECTION_EXCEPTION_CLASS: &str = "08";

/// SQLSTATE class for operator intervention, e.g. admin shutdown (`57Pxx`).
const OPERATOR_INTERVENTION_CLASS: &str = "57P";

pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() || db.is_check_violation() {
            return RepositoryError::ConstraintViolation {
                constraint: db.constraint().map(str::to_owned),
            };
        }

        let transient = db.code().is_some_and(|code| {
            code == QUERY_CANCELED
                || code.starts_with(CONNECTION_EXCEPTION_CLASS)
                || code.starts_with(OPERATOR_INTERVENTION_CLASS)
        });

        if transient {
            return RepositoryError::Unavailable(db.message().to_string());
        }

        return RepositoryError::Database(db.message().to_string());
    }

    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => RepositoryError::Unavailable(e.to_string()),
        other => RepositoryError::Database(other.to_string()),
    }
}
