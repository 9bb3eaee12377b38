//! UPDATE statement builder

use super::{push_where, upsert_assignment, Filter, Statement};
use crate::{ConnectionPool, Error, IntoParams, Result, Value};

/// UPDATE statement builder
///
/// The SET assignments and the condition fragment carry independent parameter
/// lists; at execution the SET values are bound first, in assignment order,
/// followed by the WHERE parameters in call order.
///
/// Omitting `where_` updates every row in the table. That is the documented
/// destructive default, not a validation error.
#[derive(Debug, Clone)]
pub struct UpdateBuilder<P: ConnectionPool> {
    pool: P,
    table: String,
    assignments: Vec<(String, Value)>,
    filter: Option<Filter>,
}

impl<P: ConnectionPool> UpdateBuilder<P> {
    /// Create a new UPDATE builder with no pending assignments
    pub fn new(pool: P, table: &str) -> Self {
        Self {
            pool,
            table: table.to_string(),
            assignments: Vec::new(),
            filter: None,
        }
    }

    /// Set one column assignment; overwrites a pending value for the same column
    pub fn set<V>(mut self, column: &str, value: V) -> Self
    where
        V: Into<Value>,
    {
        upsert_assignment(&mut self.assignments, column, value.into());
        self
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

    /// Execute and return the number of rows actually modified
    ///
    /// Fails with [`Error::InvalidStatement`] before any store call when no
    /// assignments are set. A count of 0 is a valid "no match" outcome.
    /// Consumes the builder; a statement cannot be executed twice.
    pub async fn execute(self) -> Result<u64> {
        let sql = self.to_sql()?;
        let params = self.parameters();
        let outcome = self.pool.execute(&sql, &params).await?;
        Ok(outcome.rows_affected)
    }
}

impl<P: ConnectionPool> Statement for UpdateBuilder<P> {
    fn to_sql(&self) -> Result<String> {
        if self.assignments.is_empty() {
            return Err(Error::invalid_statement("UPDATE requires at least one SET"));
        }

        let set_parts: Vec<String> = self
            .assignments
            .iter()
            .map(|(column, _)| format!("{} = ?", column))
            .collect();

        let mut sql = format!("UPDATE {} SET {}", self.table, set_parts.join(", "));
        push_where(&mut sql, self.filter.as_ref());
        Ok(sql)
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params: Vec<Value> = self.assignments.iter().map(|(_, v)| v.clone()).collect();
        if let Some(filter) = &self.filter {
            params.extend_from_slice(filter.params());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::StatementOutcome;

    #[derive(Clone)]
    struct NullPool;

    impl ConnectionPool for NullPool {
        async fn fetch_rows(&self, _sql: &str, _params: &[Value]) -> Result<Vec<crate::Row>> {
            Ok(Vec::new())
        }

        async fn execute(&self, _sql: &str, _params: &[Value]) -> Result<StatementOutcome> {
            Ok(StatementOutcome {
                rows_affected: 0,
                last_insert_id: 0,
            })
        }
    }

    fn update(table: &str) -> UpdateBuilder<NullPool> {
        UpdateBuilder::new(NullPool, table)
    }

    #[test]
    fn test_update_sql() {
        let query = update("users")
            .set("name", "Grace")
            .set("age", 45)
            .where_("id = ?", (1,));
        assert_eq!(
            query.to_sql().unwrap(),
            "UPDATE users SET name = ?, age = ? WHERE id = ?"
        );
    }

    #[test]
    fn test_set_values_bind_before_where_params() {
        let query = update("t").set("x", 1).set("y", 2).where_("z = ?", (9,));
        assert_eq!(query.parameters(), vec![
            Value::I32(1),
            Value::I32(2),
            Value::I32(9),
        ]);
    }

    #[test]
    fn test_update_without_where_targets_all_rows() {
        let query = update("users").set("active", false);
        assert_eq!(query.to_sql().unwrap(), "UPDATE users SET active = ?");
    }

    #[test]
    fn test_same_column_set_overwrites() {
        let query = update("users").set("age", 30).set("age", 31);
        assert_eq!(query.to_sql().unwrap(), "UPDATE users SET age = ?");
        assert_eq!(query.parameters(), vec![Value::I32(31)]);
    }

    #[test]
    fn test_second_where_replaces_first() {
        let query = update("users")
            .set("age", 30)
            .where_("id = ?", (1,))
            .where_("email = ?", ("ada@example.com",));
        assert_eq!(
            query.to_sql().unwrap(),
            "UPDATE users SET age = ? WHERE email = ?"
        );
        assert_eq!(query.parameters(), vec![
            Value::I32(30),
            Value::String("ada@example.com".to_string()),
        ]);
    }

    #[test]
    fn test_update_without_set_fails() {
        let result = update("users").where_("id = ?", (1,)).to_sql();
        assert!(matches!(result, Err(Error::InvalidStatement { .. })));
    }
}
