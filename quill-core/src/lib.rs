//! Quill Core - a fluent SQL statement builder
//!
//! This crate provides SELECT/INSERT/UPDATE/DELETE statement builders that
//! accumulate clause state through chained calls, bind leaf values as
//! positional parameters, and execute against a connection pool.
//!
//! ```no_run
//! use quill_core::{executor::sqlite::SqlitePool, QueryBuilder};
//!
//! # async fn demo() -> quill_core::Result<()> {
//! let pool = SqlitePool::in_memory().await?;
//! let qb = QueryBuilder::new(pool);
//!
//! let id = qb
//!     .insert("users")
//!     .set("name", "Ada")
//!     .set("email", "ada@example.com")
//!     .execute()
//!     .await?;
//!
//! let row = qb
//!     .select("users")
//!     .fields(("name", "email"))
//!     .where_("id = ?", (id,))
//!     .fetch_one()
//!     .await?;
//! # let _ = row;
//! # Ok(())
//! # }
//! ```
//!
//! Condition fragments are raw caller-authored SQL; only the parameter values
//! passed alongside them are bound out-of-band. Keeping fragment text free of
//! untrusted input is the caller's responsibility.

pub mod builder;
pub mod error;
pub mod executor;
pub mod params;
pub mod value;

// Re-export main types
pub use builder::{
    DeleteBuilder, Filter, InsertBuilder, IntoColumns, SelectBuilder, Statement, UpdateBuilder,
};
pub use error::{ConstraintKind, Error, Result};
pub use executor::{ConnectionPool, StatementOutcome};
pub use params::IntoParams;
pub use value::{Row, Value};

/// Entry point binding a connection pool to fresh statement builders
///
/// Each construction call hands an independent builder a clone of the pool;
/// builders created from the same factory share no mutable state.
#[derive(Debug, Clone)]
pub struct QueryBuilder<P: ConnectionPool> {
    pool: P,
}

impl<P: ConnectionPool> QueryBuilder<P> {
    /// Create a factory over the given pool
    pub fn new(pool: P) -> Self {
        Self { pool }
    }

    /// Start a SELECT statement against the given table
    pub fn select(&self, table: &str) -> SelectBuilder<P> {
        SelectBuilder::new(self.pool.clone(), table)
    }

    /// Start an INSERT statement against the given table
    pub fn insert(&self, table: &str) -> InsertBuilder<P> {
        InsertBuilder::new(self.pool.clone(), table)
    }

    /// Start an UPDATE statement against the given table
    pub fn update(&self, table: &str) -> UpdateBuilder<P> {
        UpdateBuilder::new(self.pool.clone(), table)
    }

    /// Start a DELETE statement against the given table
    pub fn delete(&self, table: &str) -> DeleteBuilder<P> {
        DeleteBuilder::new(self.pool.clone(), table)
    }
}
