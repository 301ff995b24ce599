//! SQL query implementations, one module per table group.

pub mod properties;
pub mod reservations;
pub mod users;
