//! SQL Builder for generating parameterized PostgreSQL statements.
//!
//! Conditions are accumulated as SQL fragments that reference numbered
//! placeholders (`$1`, `$2`, ...). Each `add_*_param` call pushes a value and
//! returns the placeholder number bound to it, so the Nth pushed value is
//! always `$N`. No user input is ever interpolated into SQL text.

use std::fmt;
use thiserror::Error;

/// Errors that can occur during SQL building.
#[derive(Debug, Error)]
pub enum SqlBuilderError {
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

/// Validate an identifier (table name, column name).
///
/// Only allows ASCII alphanumerics, underscores, and a single `.` separating
/// a table qualifier from a column.
fn validate_identifier(name: &str) -> Result<(), SqlBuilderError> {
    if name.is_empty() {
        return Err(SqlBuilderError::InvalidIdentifier(
            "Empty identifier".to_string(),
        ));
    }

    let valid_parts = name.split('.').count() <= 2
        && name
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));

    if !valid_parts {
        return Err(SqlBuilderError::InvalidIdentifier(name.to_string()));
    }

    Ok(())
}

// ============================================================================
// Condition Types
// ============================================================================

/// Comparison operators for conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    /// Equal (=)
    Eq,
    /// Greater than (>)
    Gt,
    /// Less than (<)
    Lt,
    /// Case-sensitive LIKE pattern match
    Like,
}

impl Operator {
    /// Get the SQL operator string.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Like => "LIKE",
        }
    }
}

/// SQL value types for parameterized queries.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl SqlValue {
    /// Get the value as a string for display/debugging.
    pub fn as_display_str(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
        }
    }
}

/// A built SQL query with parameters.
#[derive(Debug, Clone)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl fmt::Display for BuiltQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql)
    }
}

/// A builder for constructing SQL WHERE clauses with parameterized values.
///
/// The builder accumulates conditions and parameters, then generates
/// a complete WHERE clause with numbered parameter placeholders ($1, $2, etc.).
/// Placeholders pushed after the WHERE clause (HAVING, LIMIT) keep counting
/// from the same sequence.
#[derive(Debug, Default)]
pub struct SqlBuilder {
    conditions: Vec<String>,
    params: Vec<SqlValue>,
}

impl SqlBuilder {
    /// Create a new, empty SQL builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw SQL condition that already references its placeholders.
    pub fn add_condition(&mut self, condition: impl Into<String>) {
        self.conditions.push(condition.into());
    }

    /// Push `value` and add `column op $N` as a condition.
    ///
    /// Returns the placeholder number.
    pub fn add_comparison(
        &mut self,
        column: &str,
        op: Operator,
        value: SqlValue,
    ) -> Result<usize, SqlBuilderError> {
        validate_identifier(column)?;
        let placeholder = self.push_param(value);
        self.add_condition(format!("{column} {} ${placeholder}", op.as_sql()));
        Ok(placeholder)
    }

    /// Add a text parameter and return its placeholder number.
    pub fn add_text_param(&mut self, value: impl Into<String>) -> usize {
        self.push_param(SqlValue::Text(value.into()))
    }

    /// Add an integer parameter and return its placeholder number.
    pub fn add_integer_param(&mut self, value: i64) -> usize {
        self.push_param(SqlValue::Integer(value))
    }

    /// Add a float parameter and return its placeholder number.
    pub fn add_float_param(&mut self, value: f64) -> usize {
        self.push_param(SqlValue::Float(value))
    }

    fn push_param(&mut self, value: SqlValue) -> usize {
        self.params.push(value);
        self.params.len()
    }

    /// Get the current parameter count.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Get all parameters.
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Get all conditions.
    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    /// Build the final WHERE clause by joining conditions with AND.
    ///
    /// Returns `None` if there are no conditions.
    pub fn build_where_clause(&self) -> Option<String> {
        if self.conditions.is_empty() {
            return None;
        }

        Some(self.conditions.join(" AND "))
    }

    /// Consume the builder, pairing `sql` with the accumulated parameters.
    pub fn finish(self, sql: String) -> BuiltQuery {
        BuiltQuery {
            sql,
            params: self.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_builder_basic() {
        let mut builder = SqlBuilder::new();

        let p1 = builder.add_text_param("%Van%");
        builder.add_condition(format!("properties.city LIKE ${p1}"));

        assert_eq!(builder.param_count(), 1);
        let clause = builder.build_where_clause();
        assert_eq!(clause.as_deref(), Some("properties.city LIKE $1"));
    }

    #[test]
    fn test_sql_builder_multiple_conditions() {
        let mut builder = SqlBuilder::new();

        builder
            .add_comparison("owner_id", Operator::Eq, SqlValue::Integer(3))
            .unwrap();
        builder
            .add_comparison("cost_per_night", Operator::Lt, SqlValue::Integer(500))
            .unwrap();

        let clause = builder.build_where_clause().unwrap();
        assert_eq!(clause, "owner_id = $1 AND cost_per_night < $2");
        assert_eq!(
            builder.params(),
            &[SqlValue::Integer(3), SqlValue::Integer(500)]
        );
    }

    #[test]
    fn test_placeholders_continue_past_conditions() {
        let mut builder = SqlBuilder::new();
        builder
            .add_comparison("cost_per_night", Operator::Gt, SqlValue::Integer(100))
            .unwrap();

        // Parameters pushed without a WHERE condition still take the next slot.
        assert_eq!(builder.add_float_param(4.0), 2);
        assert_eq!(builder.add_integer_param(5), 3);
        assert_eq!(builder.conditions().len(), 1);
    }

    #[test]
    fn test_sql_builder_empty() {
        let builder = SqlBuilder::new();
        assert!(builder.build_where_clause().is_none());
    }

    #[test]
    fn test_comparison_rejects_bad_identifier() {
        let mut builder = SqlBuilder::new();
        let result = builder.add_comparison(
            "city; DROP TABLE users",
            Operator::Eq,
            SqlValue::Text("x".into()),
        );
        assert!(matches!(result, Err(SqlBuilderError::InvalidIdentifier(_))));
        assert_eq!(builder.param_count(), 0);
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("properties.owner_id").is_ok());
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("a.b.c").is_err());
        assert!(validate_identifier("properties.").is_err());
    }

    #[test]
    fn test_finish() {
        let mut builder = SqlBuilder::new();
        let p = builder.add_integer_param(10);
        let built = builder.finish(format!("SELECT 1 LIMIT ${p}"));
        assert_eq!(built.to_string(), "SELECT 1 LIMIT $1");
        assert_eq!(built.params, vec![SqlValue::Integer(10)]);
        assert_eq!(built.params[0].as_display_str(), "10");
    }
}
