//! INSERT statement builder

use super::{upsert_assignment, Statement};
use crate::{ConnectionPool, Error, Result, Value};

/// INSERT statement builder
///
/// Accumulates column assignments; the column list and the placeholder list
/// are derived from the same assignment order, so they always line up. A
/// later write to the same column overwrites the pending value.
#[derive(Debug, Clone)]
pub struct InsertBuilder<P: ConnectionPool> {
    pool: P,
    table: String,
    assignments: Vec<(String, Value)>,
}

impl<P: ConnectionPool> InsertBuilder<P> {
    /// Create a new INSERT builder with no pending values
    pub fn new(pool: P, table: &str) -> Self {
        Self {
            pool,
            table: table.to_string(),
            assignments: Vec::new(),
        }
    }

    /// Set one column value; overwrites a pending value for the same column
    pub fn set<V>(mut self, column: &str, value: V) -> Self
    where
        V: Into<Value>,
    {
        upsert_assignment(&mut self.assignments, column, value.into());
        self
    }

    /// Merge a batch of column values
    ///
    /// Accepts any iterator of pairs (a map, a vec of tuples, an array);
    /// later entries overwrite earlier ones for the same column.
    pub fn values<K, V, I>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (column, value) in data {
            upsert_assignment(&mut self.assignments, column.as_ref(), value.into());
        }
        self
    }

    /// Execute and return the store-assigned row identifier
    ///
    /// Fails with [`Error::InvalidStatement`] before any store call when no
    /// values are set. The statement auto-commits. Consumes the builder; a
    /// statement cannot be executed twice.
    pub async fn execute(self) -> Result<i64> {
        let sql = self.to_sql()?;
        let params = self.parameters();
        let outcome = self.pool.execute(&sql, &params).await?;
        Ok(outcome.last_insert_id)
    }
}

impl<P: ConnectionPool> Statement for InsertBuilder<P> {
    fn to_sql(&self) -> Result<String> {
        if self.assignments.is_empty() {
            return Err(Error::invalid_statement("INSERT requires at least one value"));
        }

        let columns: Vec<&str> = self.assignments.iter().map(|(c, _)| c.as_str()).collect();
        let placeholders: Vec<&str> = self.assignments.iter().map(|_| "?").collect();

        Ok(format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            columns.join(", "),
            placeholders.join(", ")
        ))
    }

    fn parameters(&self) -> Vec<Value> {
        self.assignments.iter().map(|(_, v)| v.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::StatementOutcome;
    use std::collections::BTreeMap;

    #[derive(Clone)]
    struct NullPool;

    impl ConnectionPool for NullPool {
        async fn fetch_rows(&self, _sql: &str, _params: &[Value]) -> Result<Vec<crate::Row>> {
            Ok(Vec::new())
        }

        async fn execute(&self, _sql: &str, _params: &[Value]) -> Result<StatementOutcome> {
            Ok(StatementOutcome {
                rows_affected: 1,
                last_insert_id: 1,
            })
        }
    }

    fn insert(table: &str) -> InsertBuilder<NullPool> {
        InsertBuilder::new(NullPool, table)
    }

    #[test]
    fn test_insert_sql_and_params_share_order() {
        let query = insert("users")
            .set("name", "Ada")
            .set("email", "ada@example.com")
            .set("age", 36);
        assert_eq!(
            query.to_sql().unwrap(),
            "INSERT INTO users (name, email, age) VALUES (?, ?, ?)"
        );
        assert_eq!(query.parameters(), vec![
            Value::String("Ada".to_string()),
            Value::String("ada@example.com".to_string()),
            Value::I32(36),
        ]);
    }

    #[test]
    fn test_later_set_overwrites_value_not_order() {
        let query = insert("users")
            .set("name", "Ada")
            .set("age", 36)
            .set("name", "Grace");
        assert_eq!(
            query.to_sql().unwrap(),
            "INSERT INTO users (name, age) VALUES (?, ?)"
        );
        assert_eq!(query.parameters(), vec![
            Value::String("Grace".to_string()),
            Value::I32(36),
        ]);
    }

    #[test]
    fn test_values_accepts_a_map() {
        let mut data = BTreeMap::new();
        data.insert("a", Value::I32(1));
        data.insert("b", Value::I32(2));

        let query = insert("t").values(data);
        assert_eq!(query.to_sql().unwrap(), "INSERT INTO t (a, b) VALUES (?, ?)");
        assert_eq!(query.parameters(), vec![Value::I32(1), Value::I32(2)]);
    }

    #[test]
    fn test_values_merges_with_set() {
        let query = insert("t")
            .set("a", 1)
            .values([("a", Value::I32(10)), ("b", Value::I32(2))]);
        assert_eq!(query.parameters(), vec![Value::I32(10), Value::I32(2)]);
    }

    #[test]
    fn test_empty_insert_fails() {
        let result = insert("users").to_sql();
        assert!(matches!(result, Err(Error::InvalidStatement { .. })));
    }
}
