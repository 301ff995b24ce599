//! Property search query construction.
//!
//! Turns [`PropertySearchOptions`] and a row limit into one parameterized
//! statement over `properties` joined to `property_reviews`:
//!
//! ```text
//! SELECT properties.*, avg(rating) AS average_rating
//! FROM properties JOIN property_reviews ...
//! [WHERE <row filters joined by AND>]
//! GROUP BY properties.id
//! [HAVING avg(rating) >= $n]
//! ORDER BY properties.cost_per_night
//! LIMIT $m
//! ```
//!
//! Row filters are an ordered list of predicate builders. Each one either
//! contributes a fragment (after pushing its parameter) or nothing, and
//! `WHERE` is only written when at least one fragment exists.

use lightbnb_storage::PropertySearchOptions;
use tracing::trace;

use crate::sql_builder::{BuiltQuery, Operator, SqlBuilder, SqlBuilderError, SqlValue};

const SELECT_CLAUSE: &str = "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating \
     FROM properties \
     JOIN property_reviews ON properties.id = property_reviews.property_id";

const AVERAGE_RATING: &str = "avg(property_reviews.rating)::float8";

/// A row-level filter: pushes its parameter and condition when the option is set.
type Predicate = fn(&PropertySearchOptions, &mut SqlBuilder) -> Result<(), SqlBuilderError>;

/// Row filters in placeholder order.
const ROW_PREDICATES: [Predicate; 4] = [city, owner, minimum_price, maximum_price];

fn city(options: &PropertySearchOptions, builder: &mut SqlBuilder) -> Result<(), SqlBuilderError> {
    if let Some(city) = options.city_filter() {
        builder.add_comparison(
            "properties.city",
            Operator::Like,
            SqlValue::Text(format!("%{city}%")),
        )?;
    }
    Ok(())
}

fn owner(options: &PropertySearchOptions, builder: &mut SqlBuilder) -> Result<(), SqlBuilderError> {
    if let Some(owner_id) = options.owner_filter() {
        builder.add_comparison(
            "properties.owner_id",
            Operator::Eq,
            SqlValue::Integer(i64::from(owner_id)),
        )?;
    }
    Ok(())
}

fn minimum_price(
    options: &PropertySearchOptions,
    builder: &mut SqlBuilder,
) -> Result<(), SqlBuilderError> {
    if let Some(price) = options.minimum_price_filter() {
        builder.add_comparison(
            "properties.cost_per_night",
            Operator::Gt,
            SqlValue::Integer(price),
        )?;
    }
    Ok(())
}

fn maximum_price(
    options: &PropertySearchOptions,
    builder: &mut SqlBuilder,
) -> Result<(), SqlBuilderError> {
    if let Some(price) = options.maximum_price_filter() {
        builder.add_comparison(
            "properties.cost_per_night",
            Operator::Lt,
            SqlValue::Integer(price),
        )?;
    }
    Ok(())
}

/// Builder for the property search statement.
///
/// # Example
///
/// ```
/// use lightbnb_search::PropertyQuery;
/// use lightbnb_storage::PropertySearchOptions;
///
/// let options = PropertySearchOptions::new()
///     .with_minimum_price_per_night(100)
///     .with_minimum_rating(4.0);
///
/// let query = PropertyQuery::new(&options, 5).build().unwrap();
/// assert_eq!(query.params.len(), 3);
/// assert!(query.sql.contains("properties.cost_per_night > $1"));
/// assert!(query.sql.ends_with("LIMIT $3"));
/// ```
#[derive(Debug, Clone)]
pub struct PropertyQuery<'a> {
    options: &'a PropertySearchOptions,
    limit: u32,
}

impl<'a> PropertyQuery<'a> {
    /// Create a query for `options` returning at most `limit` rows.
    pub fn new(options: &'a PropertySearchOptions, limit: u32) -> Self {
        Self { options, limit }
    }

    /// Build the SQL statement and its parameters.
    ///
    /// # Errors
    ///
    /// Returns `SqlBuilderError::InvalidLimit` when the limit is zero.
    pub fn build(&self) -> Result<BuiltQuery, SqlBuilderError> {
        if self.limit == 0 {
            return Err(SqlBuilderError::InvalidLimit(
                "limit must be greater than zero".to_string(),
            ));
        }

        let mut builder = SqlBuilder::new();
        for predicate in ROW_PREDICATES {
            predicate(self.options, &mut builder)?;
        }

        let mut sql = String::from(SELECT_CLAUSE);

        if let Some(where_sql) = builder.build_where_clause() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }

        sql.push_str(" GROUP BY properties.id");

        if let Some(rating) = self.options.minimum_rating_filter() {
            let p = builder.add_float_param(rating);
            sql.push_str(&format!(" HAVING {AVERAGE_RATING} >= ${p}"));
        }

        let p = builder.add_integer_param(i64::from(self.limit));
        sql.push_str(&format!(" ORDER BY properties.cost_per_night LIMIT ${p}"));

        trace!(
            filters = self.options.active_filter_count(),
            params = builder.param_count(),
            "Built property search query"
        );

        Ok(builder.finish(sql))
    }
}
