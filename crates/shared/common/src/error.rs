//! Unified application error.
//!
//! Domain errors and database errors both convert into [`AppError`], so
//! service code can propagate either with `?`. Unique-constraint failures
//! reported by the store become [`AppError::UniquenessViolation`].

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Input
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0} already exists")]
    UniquenessViolation(String),

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[source] sea_orm::DbErr),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(msg) => AppError::InvalidInput(msg),
            DomainError::UniquenessViolation(field) => AppError::UniquenessViolation(field),
            DomainError::Password(msg) => AppError::Internal(msg),
            DomainError::NotFound(_) => AppError::NotFound,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

// =============================================================================
// Database Error Conversion
// =============================================================================

#[cfg(feature = "database")]
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => {
                AppError::UniquenessViolation(unique_field(&msg).to_string())
            }
            _ => AppError::Database(err),
        }
    }
}

/// Name the account field behind a unique-constraint message.
///
/// Works with both SQLite (`UNIQUE constraint failed: accounts.email`) and
/// PostgreSQL (`... unique constraint "idx-accounts-email"`) wording.
pub fn unique_field(message: &str) -> &'static str {
    let message = message.to_lowercase();
    if message.contains("username") {
        "Username"
    } else if message.contains("email") {
        "Email"
    } else {
        "Account"
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn uniqueness(field: impl Into<String>) -> Self {
        AppError::UniquenessViolation(field.into())
    }
}
