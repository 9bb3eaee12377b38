//! DELETE statement builder

use super::{push_where, Filter, Statement};
use crate::{ConnectionPool, IntoParams, Result, Value};

/// DELETE statement builder
///
/// Omitting `where_` deletes every row in the table. That is the documented
/// destructive default, not a validation error.
#[derive(Debug, Clone)]
pub struct DeleteBuilder<P: ConnectionPool> {
    pool: P,
    table: String,
    filter: Option<Filter>,
}

impl<P: ConnectionPool> DeleteBuilder<P> {
    /// Create a new DELETE builder with no condition
    pub fn new(pool: P, table: &str) -> Self {
        Self {
            pool,
            table: table.to_string(),
            filter: None,
        }
    }

    /// Set the condition fragment and its positional parameters
    ///
    /// Same semantics as the SELECT builder: verbatim fragment, last call
    /// wins, never AND-combined.
    pub fn where_<A>(mut self, fragment: &str, params: A) -> Self
    where
        A: IntoParams,
    {
        self.filter = Some(Filter::new(fragment, params));
        self
    }

    /// Execute and return the number of rows removed
    ///
    /// A count of 0 is a valid "no match" outcome. Consumes the builder; a
    /// statement cannot be executed twice.
    pub async fn execute(self) -> Result<u64> {
        let sql = self.to_sql()?;
        let params = self.parameters();
        let outcome = self.pool.execute(&sql, &params).await?;
        Ok(outcome.rows_affected)
    }
}

impl<P: ConnectionPool> Statement for DeleteBuilder<P> {
    fn to_sql(&self) -> Result<String> {
        let mut sql = format!("DELETE FROM {}", self.table);
        push_where(&mut sql, self.filter.as_ref());
        Ok(sql)
    }

    fn parameters(&self) -> Vec<Value> {
        self.filter
            .as_ref()
            .map(|f| f.params().to_vec())
            .unwrap_or_default()
    }
}
