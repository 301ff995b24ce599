//! Reservation queries.

use lightbnb_storage::{Property, StorageError};
use sqlx_core::query::query;
use sqlx_postgres::PgPool;
use tracing::debug;

use super::properties::property_from_row;
use crate::error::PostgresError;

/// List the properties reserved by `guest_id`, at most `limit` rows.
pub async fn properties_for_guest(
    pool: &PgPool,
    guest_id: i32,
    limit: u32,
) -> Result<Vec<Property>, StorageError> {
    if limit == 0 {
        return Err(StorageError::invalid_input("limit must be greater than zero"));
    }

    debug!(guest_id, limit, "Fetching reservations for guest");

    let rows = query(
        r#"
        SELECT properties.*
        FROM reservations
        JOIN properties ON reservations.property_id = properties.id
        WHERE reservations.guest_id = $1
        LIMIT $2
        "#,
    )
    .bind(guest_id)
    .bind(i64::from(limit))
    .fetch_all(pool)
    .await
    .map_err(PostgresError::from)?;

    rows.iter()
        .map(property_from_row)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| PostgresError::from(e).into())
}
