//! PostgreSQL implementation of the LightbnbStorage trait.

use async_trait::async_trait;
use sqlx_postgres::PgPool;

use lightbnb_storage::{
    LightbnbStorage, NewProperty, NewUser, Property, PropertyListing, PropertySearchOptions,
    StorageError, User,
};

use crate::config::PostgresConfig;
use crate::pool;
use crate::queries::{properties, reservations, users};

/// PostgreSQL storage backend for LightBnB.
///
/// Holds a pool handle created by the process's composition root. Cloning is
/// cheap and every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    /// Creates a new `PostgresStorage` with the given configuration.
    ///
    /// This will:
    /// 1. Create a connection pool
    /// 2. Verify the connection with `SELECT 1`
    ///
    /// # Errors
    ///
    /// Returns an error if the connection pool cannot be created
    /// or the database is unreachable.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, StorageError> {
        let pool = pool::create_pool(config).await?;
        pool::test_connection(&pool).await?;
        Ok(Self { pool })
    }

    /// Creates a new `PostgresStorage` from an existing connection pool.
    ///
    /// This allows sharing a connection pool between multiple components.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Checks that the database answers.
    ///
    /// # Errors
    ///
    /// Returns an error if the round trip fails.
    pub async fn ping(&self) -> Result<(), StorageError> {
        pool::test_connection(&self.pool).await?;
        Ok(())
    }

    /// Drains and closes the pool. Further operations fail with a connection error.
    pub async fn close(&self) {
        pool::close_pool(&self.pool).await;
    }
}

#[async_trait]
impl LightbnbStorage for PostgresStorage {
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        users::find_by_email(&self.pool, email).await
    }

    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>, StorageError> {
        users::find_by_id(&self.pool, id).await
    }

    async fn add_user(&self, user: &NewUser) -> Result<User, StorageError> {
        users::create(&self.pool, user).await
    }

    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: u32,
    ) -> Result<Vec<Property>, StorageError> {
        reservations::properties_for_guest(&self.pool, guest_id, limit).await
    }

    async fn get_all_properties(
        &self,
        options: &PropertySearchOptions,
        limit: u32,
    ) -> Result<Vec<PropertyListing>, StorageError> {
        properties::search(&self.pool, options, limit).await
    }

    async fn add_property(&self, property: &NewProperty) -> Result<Property, StorageError> {
        properties::create(&self.pool, property).await
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
