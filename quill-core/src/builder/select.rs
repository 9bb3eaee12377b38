//! SELECT statement builder

use super::{push_where, Filter, IntoColumns, Statement};
use crate::{ConnectionPool, IntoParams, Result, Row, Value};

/// SELECT statement builder
///
/// Accumulates clause state through chained calls; [`fetch`](Self::fetch) and
/// [`fetch_one`](Self::fetch_one) consume the builder, assemble the SQL text
/// and submit it to the pool. Clause order in the generated statement is
/// always `SELECT .. FROM .. [WHERE ..] [ORDER BY ..] [LIMIT ..]`.
#[derive(Debug, Clone)]
pub struct SelectBuilder<P: ConnectionPool> {
    pool: P,
    table: String,
    columns: Vec<String>,
    filter: Option<Filter>,
    order: Option<String>,
    limit: Option<u64>,
}

impl<P: ConnectionPool> SelectBuilder<P> {
    /// Create a new SELECT builder projecting all columns
    pub fn new(pool: P, table: &str) -> Self {
        Self {
            pool,
            table: table.to_string(),
            columns: vec!["*".to_string()],
            filter: None,
            order: None,
            limit: None,
        }
    }

    /// Replace the projection list
    ///
    /// Column names are caller-supplied and not validated against the schema.
    /// An empty list leaves the `*` default in place.
    pub fn fields<C>(mut self, columns: C) -> Self
    where
        C: IntoColumns,
    {
        let columns = columns.into_columns();
        if !columns.is_empty() {
            self.columns = columns;
        }
        self
    }

    /// Set the condition fragment and its positional parameters
    ///
    /// The fragment is applied verbatim. A second call replaces the first
    /// entirely, parameters included; conditions are never AND-combined.
    pub fn where_<A>(mut self, fragment: &str, params: A) -> Self
    where
        A: IntoParams,
    {
        self.filter = Some(Filter::new(fragment, params));
        self
    }

    /// Set the ordering as a comma-joined column list, applied verbatim
    pub fn order_by<C>(mut self, columns: C) -> Self
    where
        C: IntoColumns,
    {
        self.order = Some(columns.into_columns().join(", "));
        self
    }

    /// Set the row limit
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Execute and return all matching rows, in store order
    ///
    /// An empty result is an empty `Vec`, never an error. Consumes the
    /// builder; a statement cannot be executed twice.
    pub async fn fetch(self) -> Result<Vec<Row>> {
        let sql = self.to_sql()?;
        let params = self.parameters();
        self.pool.fetch_rows(&sql, &params).await
    }

    /// Execute with `LIMIT 1` (overriding any prior limit) and return the
    /// first row, or `None` when nothing matches
    pub async fn fetch_one(self) -> Result<Option<Row>> {
        let rows = self.limit(1).fetch().await?;
        Ok(rows.into_iter().next())
    }
}

impl<P: ConnectionPool> Statement for SelectBuilder<P> {
    fn to_sql(&self) -> Result<String> {
        let mut sql = String::new();

        sql.push_str("SELECT ");
        sql.push_str(&self.columns.join(", "));
        sql.push_str(" FROM ");
        sql.push_str(&self.table);

        push_where(&mut sql, self.filter.as_ref());

        if let Some(order) = &self.order {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        Ok(sql)
    }

    fn parameters(&self) -> Vec<Value> {
        self.filter
            .as_ref()
            .map(|f| f.params().to_vec())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::StatementOutcome;

    #[derive(Clone)]
    struct NullPool;

    impl ConnectionPool for NullPool {
        async fn fetch_rows(&self, _sql: &str, _params: &[Value]) -> Result<Vec<Row>> {
            Ok(Vec::new())
        }

        async fn execute(&self, _sql: &str, _params: &[Value]) -> Result<StatementOutcome> {
            Ok(StatementOutcome {
                rows_affected: 0,
                last_insert_id: 0,
            })
        }
    }

    fn select(table: &str) -> SelectBuilder<NullPool> {
        SelectBuilder::new(NullPool, table)
    }

    #[test]
    fn test_basic_select() {
        let query = select("users");
        assert_eq!(query.to_sql().unwrap(), "SELECT * FROM users");
        assert!(query.parameters().is_empty());
    }

    #[test]
    fn test_fields_replace_projection() {
        let query = select("users").fields(("id", "name"));
        assert_eq!(query.to_sql().unwrap(), "SELECT id, name FROM users");
    }

    #[test]
    fn test_empty_fields_keep_default() {
        let query = select("users").fields(Vec::<String>::new());
        assert_eq!(query.to_sql().unwrap(), "SELECT * FROM users");
    }

    #[test]
    fn test_where_fragment_and_params() {
        let query = select("users").where_("age >= ? AND city = ?", (18, "York"));
        assert_eq!(
            query.to_sql().unwrap(),
            "SELECT * FROM users WHERE age >= ? AND city = ?"
        );
        assert_eq!(query.parameters(), vec![
            Value::I32(18),
            Value::String("York".to_string())
        ]);
    }

    #[test]
    fn test_second_where_replaces_first() {
        let query = select("users")
            .where_("age >= ?", (18,))
            .where_("name = ?", ("Ada",));
        assert_eq!(query.to_sql().unwrap(), "SELECT * FROM users WHERE name = ?");
        assert_eq!(query.parameters(), vec![Value::String("Ada".to_string())]);
    }

    #[test]
    fn test_order_by_is_comma_joined() {
        let query = select("users").order_by(("age", "name"));
        assert_eq!(
            query.to_sql().unwrap(),
            "SELECT * FROM users ORDER BY age, name"
        );
    }

    #[test]
    fn test_clause_order_is_fixed() {
        let query = select("users")
            .limit(10)
            .order_by("age")
            .fields("name")
            .where_("age >= ?", (18,));
        assert_eq!(
            query.to_sql().unwrap(),
            "SELECT name FROM users WHERE age >= ? ORDER BY age LIMIT 10"
        );
    }

    #[test]
    fn test_later_limit_wins() {
        let query = select("users").limit(10).limit(3);
        assert_eq!(query.to_sql().unwrap(), "SELECT * FROM users LIMIT 3");
    }
}
