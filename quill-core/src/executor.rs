//! Statement execution and connection pool interface

use crate::{Result, Row, Value};
use std::future::Future;

/// Outcome of a modification statement (INSERT, UPDATE, DELETE)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementOutcome {
    /// Number of rows the statement actually modified
    pub rows_affected: u64,
    /// Row identifier assigned by the store for the most recent INSERT
    pub last_insert_id: i64,
}

/// Trait for database connection pools
///
/// This is the store boundary: one parameterized statement in, a row set or a
/// [`StatementOutcome`] out. Statements auto-commit; the pool owns connection
/// lifetimes, and any handle it acquires for a call is released before the
/// call returns, on error paths included. The core never retries.
pub trait ConnectionPool: Send + Sync + Clone {
    /// Execute a statement that returns rows (SELECT)
    fn fetch_rows(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl Future<Output = Result<Vec<Row>>> + Send;

    /// Execute a statement that modifies rows (INSERT, UPDATE, DELETE)
    fn execute(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl Future<Output = Result<StatementOutcome>> + Send;
}

/// SQLite connection pool wrapper
#[cfg(feature = "sqlite")]
pub mod sqlite {
    use super::*;
    use crate::Error;
    use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
    use sqlx::{Row as _, TypeInfo, ValueRef as _};

    /// SQLite connection pool
    #[derive(Debug, Clone)]
    pub struct SqlitePool {
        inner: sqlx::SqlitePool,
    }

    impl SqlitePool {
        /// Create a new SQLite pool from a connection string
        pub async fn new(database_url: &str) -> Result<Self> {
            let pool = sqlx::SqlitePool::connect(database_url)
                .await
                .map_err(Error::from)?;
            Ok(Self { inner: pool })
        }

        /// Create a pool over a private in-memory database
        ///
        /// Capped at one connection so every statement sees the same
        /// in-memory database.
        pub async fn in_memory() -> Result<Self> {
            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .connect("sqlite::memory:")
                .await
                .map_err(Error::from)?;
            Ok(Self { inner: pool })
        }

        /// Create from an existing sqlx pool
        pub fn from_pool(pool: sqlx::SqlitePool) -> Self {
            Self { inner: pool }
        }
    }

    impl ConnectionPool for SqlitePool {
        async fn fetch_rows(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
            let query = bind_values(sqlx::query(sql), params);
            let rows = query.fetch_all(&self.inner).await.map_err(Error::from)?;

            let mut results = Vec::with_capacity(rows.len());
            for row in &rows {
                results.push(decode_row(row)?);
            }
            Ok(results)
        }

        async fn execute(&self, sql: &str, params: &[Value]) -> Result<StatementOutcome> {
            let query = bind_values(sqlx::query(sql), params);
            let result = query.execute(&self.inner).await.map_err(Error::from)?;
            Ok(StatementOutcome {
                rows_affected: result.rows_affected(),
                last_insert_id: result.last_insert_rowid(),
            })
        }
    }

    /// Bind Quill values to a sqlx query, in parameter-list order
    fn bind_values<'q>(
        mut query: sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>,
        params: &'q [Value],
    ) -> sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>> {
        for param in params {
            query = match param {
                Value::Null => query.bind(None::<i32>),
                Value::Bool(b) => query.bind(*b),
                Value::I32(i) => query.bind(*i),
                Value::I64(i) => query.bind(*i),
                Value::F32(f) => query.bind(*f),
                Value::F64(f) => query.bind(*f),
                Value::String(s) => query.bind(s.as_str()),
                Value::Bytes(b) => query.bind(b.as_slice()),
                Value::Json(j) => query.bind(j),
            };
        }
        query
    }

    /// Decode one SQLite row into values by storage class
    fn decode_row(row: &SqliteRow) -> Result<Row> {
        let mut values = Vec::with_capacity(row.len());
        for i in 0..row.len() {
            let raw = row.try_get_raw(i).map_err(Error::from)?;
            let value = if raw.is_null() {
                Value::Null
            } else {
                match raw.type_info().name() {
                    "INTEGER" => Value::I64(row.try_get(i).map_err(Error::from)?),
                    "REAL" | "NUMERIC" => Value::F64(row.try_get(i).map_err(Error::from)?),
                    "BOOLEAN" => Value::Bool(row.try_get(i).map_err(Error::from)?),
                    "BLOB" => Value::Bytes(row.try_get(i).map_err(Error::from)?),
                    _ => Value::String(row.try_get(i).map_err(Error::from)?),
                }
            };
            values.push(value);
        }
        Ok(Row::new(values))
    }

}
