//! Statement builder module

pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

pub use delete::DeleteBuilder;
pub use insert::InsertBuilder;
pub use select::SelectBuilder;
pub use update::UpdateBuilder;

use crate::{IntoParams, Result, Value};

/// Core trait for all statement builders
///
/// `to_sql` is the single point at which SQL text is generated; it also
/// performs the pre-store validation, so an invalid builder fails here
/// before the store is ever touched.
pub trait Statement {
    /// Generate the SQL text for the accumulated state
    fn to_sql(&self) -> Result<String>;

    /// Get the ordered parameter list, matching the `?` placeholders in the
    /// generated SQL left to right
    fn parameters(&self) -> Vec<Value>;
}

/// A raw condition fragment with its ordered bound parameters
///
/// The fragment text is caller-authored and applied verbatim; only the leaf
/// values are bound out-of-band. The caller is responsible for the fragment
/// being well-formed SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    fragment: String,
    params: Vec<Value>,
}

impl Filter {
    pub fn new<P>(fragment: &str, params: P) -> Self
    where
        P: IntoParams,
    {
        Self {
            fragment: fragment.to_string(),
            params: params.into_params(),
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

/// Append ` WHERE <fragment>` when a filter is present
pub(crate) fn push_where(sql: &mut String, filter: Option<&Filter>) {
    if let Some(filter) = filter {
        sql.push_str(" WHERE ");
        sql.push_str(filter.fragment());
    }
}

/// Insert or overwrite one column assignment, keeping first-write order stable
pub(crate) fn upsert_assignment(assignments: &mut Vec<(String, Value)>, column: &str, value: Value) {
    match assignments.iter_mut().find(|(name, _)| name == column) {
        Some((_, existing)) => *existing = value,
        None => assignments.push((column.to_string(), value)),
    }
}

/// Trait for types that can be converted to column lists
pub trait IntoColumns {
    fn into_columns(self) -> Vec<String>;
}

impl IntoColumns for &str {
    fn into_columns(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoColumns for Vec<&str> {
    fn into_columns(self) -> Vec<String> {
        self.into_iter().map(|s| s.to_string()).collect()
    }
}

impl IntoColumns for Vec<String> {
    fn into_columns(self) -> Vec<String> {
        self
    }
}

// Implement for tuples of up to 4 columns (common use case)
impl IntoColumns for (&str,) {
    fn into_columns(self) -> Vec<String> {
        vec![self.0.to_string()]
    }
}

impl IntoColumns for (&str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string()]
    }
}

impl IntoColumns for (&str, &str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string(), self.2.to_string()]
    }
}

impl IntoColumns for (&str, &str, &str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![
            self.0.to_string(),
            self.1.to_string(),
            self.2.to_string(),
            self.3.to_string(),
        ]
    }
}
