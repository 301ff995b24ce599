//! SQL construction for LightBnB.
//!
//! - [`sql_builder`]: generic placeholder-numbering builder and value types
//! - [`property_query`]: the property search statement built from
//!   [`PropertySearchOptions`](lightbnb_storage::PropertySearchOptions)
//!
//! Nothing here performs I/O; backends execute the resulting [`BuiltQuery`].

pub mod property_query;
pub mod sql_builder;

pub use property_query::PropertyQuery;
pub use sql_builder::{BuiltQuery, Operator, SqlBuilder, SqlBuilderError, SqlValue};
