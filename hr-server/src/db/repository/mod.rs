//! Repository Module
//!
//! Free async functions over `&SqlitePool` (or an open transaction) per
//! table. Repositories only read and write rows; business rules live in
//! `services`.

pub mod attendance;
pub mod employee;
pub mod shift;

use shared::models::FilterValue;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// `WHERE` fragment for one closed-table filter
///
/// Text columns are compared lower-cased on both sides.
pub(crate) fn filter_clause(column: &'static str, value: &FilterValue) -> String {
    match value {
        FilterValue::Text(_) => format!("LOWER({column}) = ?"),
        _ => format!("{column} = ?"),
    }
}

/// Bind a filter value onto a query built from [`filter_clause`]
pub(crate) fn bind_filter<'q, O>(
    query: sqlx::query::QueryAs<'q, sqlx::Sqlite, O, sqlx::sqlite::SqliteArguments<'q>>,
    value: &FilterValue,
) -> sqlx::query::QueryAs<'q, sqlx::Sqlite, O, sqlx::sqlite::SqliteArguments<'q>> {
    match value {
        FilterValue::Text(text) => query.bind(text.clone()),
        FilterValue::Integer(n) => query.bind(*n),
        FilterValue::Boolean(b) => query.bind(*b),
        FilterValue::Date(d) => query.bind(*d),
        FilterValue::Time(t) => query.bind(t.to_string()),
    }
}
