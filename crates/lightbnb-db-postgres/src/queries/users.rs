//! User queries.

use lightbnb_storage::{NewUser, StorageError, User};
use sqlx_core::query_as::query_as;
use sqlx_postgres::PgPool;
use tracing::debug;

use crate::error::PostgresError;

type UserTuple = (i32, String, String, String);

fn user_from_tuple((id, name, email, password): UserTuple) -> User {
    User {
        id,
        name,
        email,
        password,
    }
}

/// Find a user by email.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, StorageError> {
    debug!("Fetching user by email");

    let row: Option<UserTuple> = query_as(
        r#"
        SELECT id, name, email, password
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(PostgresError::from)?;

    Ok(row.map(user_from_tuple))
}

/// Find a user by primary key.
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<User>, StorageError> {
    debug!(user_id = id, "Fetching user by id");

    let row: Option<UserTuple> = query_as(
        r#"
        SELECT id, name, email, password
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(PostgresError::from)?;

    Ok(row.map(user_from_tuple))
}

/// Insert a user and return the stored row.
///
/// A taken email violates the unique index and surfaces as
/// `StorageError::AlreadyExists`.
pub async fn create(pool: &PgPool, user: &NewUser) -> Result<User, StorageError> {
    let row: UserTuple = query_as(
        r#"
        INSERT INTO users (name, email, password)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, password
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password)
    .fetch_one(pool)
    .await
    .map_err(PostgresError::from)?;

    debug!(user_id = row.0, "Created user");

    Ok(user_from_tuple(row))
}
