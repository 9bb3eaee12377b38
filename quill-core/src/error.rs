//! Error types for Quill

use thiserror::Error;

/// The main error type for Quill operations
#[derive(Error, Debug)]
pub enum Error {
    /// Builder invariant violated before the statement reached the store
    #[error("invalid statement: {message}")]
    InvalidStatement { message: String },

    /// The store rejected the statement (uniqueness, NOT NULL, foreign key, ...)
    #[error("constraint violation ({kind}): {message}")]
    ConstraintViolation {
        kind: ConstraintKind,
        message: String,
    },

    /// Any other database or transport failure
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

/// The class of constraint the store reported as violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    NotNull,
    Check,
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConstraintKind::Unique => "unique",
            ConstraintKind::ForeignKey => "foreign key",
            ConstraintKind::NotNull => "not null",
            ConstraintKind::Check => "check",
        };
        write!(f, "{}", name)
    }
}

/// Convenience Result type for Quill operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new invalid statement error
    pub fn invalid_statement(message: impl Into<String>) -> Self {
        Self::InvalidStatement {
            message: message.into(),
        }
    }

    /// Whether this error is a constraint violation of the given kind
    pub fn is_constraint_violation(&self, kind: ConstraintKind) -> bool {
        matches!(self, Error::ConstraintViolation { kind: k, .. } if *k == kind)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        // Constraint rejections get their own variant so callers can match on
        // them (duplicate-key handling in a consumer layer); everything else
        // propagates unmodified.
        if let sqlx::Error::Database(db) = &err {
            let kind = match db.kind() {
                sqlx::error::ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
                sqlx::error::ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
                sqlx::error::ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
                sqlx::error::ErrorKind::CheckViolation => Some(ConstraintKind::Check),
                _ => None,
            };
            if let Some(kind) = kind {
                return Error::ConstraintViolation {
                    kind,
                    message: db.message().to_string(),
                };
            }
        }
        Error::Database(err)
    }
}
