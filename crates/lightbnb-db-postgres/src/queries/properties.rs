//! Property queries: search and insert.

use lightbnb_search::{BuiltQuery, PropertyQuery, SqlValue};
use lightbnb_storage::{NewProperty, Property, PropertyListing, PropertySearchOptions, StorageError};
use sqlx_core::error::Error as SqlxError;
use sqlx_core::query::query;
use sqlx_core::row::Row;
use sqlx_postgres::{PgPool, PgRow};
use tracing::{debug, warn};

use crate::error::PostgresError;

/// Convert a `properties` row to a [`Property`].
pub(crate) fn property_from_row(row: &PgRow) -> Result<Property, SqlxError> {
    Ok(Property {
        id: row.try_get("id")?,
        owner_id: row.try_get("owner_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        thumbnail_photo_url: row.try_get("thumbnail_photo_url")?,
        cover_photo_url: row.try_get("cover_photo_url")?,
        cost_per_night: row.try_get("cost_per_night")?,
        parking_spaces: row.try_get("parking_spaces")?,
        number_of_bathrooms: row.try_get("number_of_bathrooms")?,
        number_of_bedrooms: row.try_get("number_of_bedrooms")?,
        country: row.try_get("country")?,
        street: row.try_get("street")?,
        city: row.try_get("city")?,
        province: row.try_get("province")?,
        post_code: row.try_get("post_code")?,
        active: row.try_get("active")?,
    })
}

fn listing_from_row(row: &PgRow) -> Result<PropertyListing, SqlxError> {
    Ok(PropertyListing {
        property: property_from_row(row)?,
        average_rating: row.try_get("average_rating")?,
    })
}

/// Search properties with optional filters.
pub async fn search(
    pool: &PgPool,
    options: &PropertySearchOptions,
    limit: u32,
) -> Result<Vec<PropertyListing>, StorageError> {
    let built = PropertyQuery::new(options, limit)
        .build()
        .map_err(PostgresError::from)?;

    debug!(
        sql = %built.sql,
        params_count = built.params.len(),
        "Executing property search"
    );

    let rows = execute(pool, &built).await.map_err(|e| {
        warn!(error = %e, sql = %built.sql, "Property search failed");
        PostgresError::from(e)
    })?;

    rows.iter()
        .map(listing_from_row)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| PostgresError::from(e).into())
}

async fn execute(pool: &PgPool, built: &BuiltQuery) -> Result<Vec<PgRow>, SqlxError> {
    let mut sqlx_query = query::<sqlx_postgres::Postgres>(&built.sql);

    for param in &built.params {
        sqlx_query = match param {
            SqlValue::Text(s) => sqlx_query.bind(s.clone()),
            SqlValue::Integer(i) => sqlx_query.bind(*i),
            SqlValue::Float(f) => sqlx_query.bind(*f),
        };
    }

    sqlx_query.fetch_all(pool).await
}

/// Insert a property and return the stored row.
pub async fn create(pool: &PgPool, property: &NewProperty) -> Result<Property, StorageError> {
    let row = query(
        r#"
        INSERT INTO properties (
            owner_id, title, description, thumbnail_photo_url, cover_photo_url,
            cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
            country, street, city, province, post_code, active
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING *
        "#,
    )
    .bind(property.owner_id)
    .bind(&property.title)
    .bind(&property.description)
    .bind(&property.thumbnail_photo_url)
    .bind(&property.cover_photo_url)
    .bind(property.cost_per_night)
    .bind(property.parking_spaces)
    .bind(property.number_of_bathrooms)
    .bind(property.number_of_bedrooms)
    .bind(&property.country)
    .bind(&property.street)
    .bind(&property.city)
    .bind(&property.province)
    .bind(&property.post_code)
    .bind(property.active)
    .fetch_one(pool)
    .await
    .map_err(PostgresError::from)?;

    let created = property_from_row(&row).map_err(PostgresError::from)?;

    debug!(property_id = created.id, owner_id = created.owner_id, "Created property");

    Ok(created)
}
