//! Storage traits for the LightBnB storage abstraction layer.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::types::{NewProperty, NewUser, Property, PropertyListing, PropertySearchOptions, User};

/// The storage trait every LightBnB backend implements.
///
/// All reads and writes go through this one trait, so a process holds a
/// single handle to a single store. Implementations must be thread-safe
/// (`Send + Sync`).
///
/// # Example
///
/// ```ignore
/// use lightbnb_storage::{LightbnbStorage, StorageError};
///
/// async fn email_taken(storage: &dyn LightbnbStorage, email: &str) -> Result<bool, StorageError> {
///     Ok(storage.get_user_with_email(email).await?.is_some())
/// }
/// ```
#[async_trait]
pub trait LightbnbStorage: Send + Sync {
    // ==================== Users ====================

    /// Fetches a user by email address.
    ///
    /// Returns `None` if no user has that email.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure or statement failures.
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    /// Fetches a user by primary key.
    ///
    /// Returns `None` if the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure or statement failures.
    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>, StorageError>;

    /// Inserts a user and returns the persisted row, including its id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::AlreadyExists` if the email is already taken.
    async fn add_user(&self, user: &NewUser) -> Result<User, StorageError>;

    // ==================== Reservations ====================

    /// Lists the properties a guest holds reservations for, at most `limit` rows.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidInput` for a zero limit.
    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: u32,
    ) -> Result<Vec<Property>, StorageError>;

    // ==================== Properties ====================

    /// Searches properties with optional filters.
    ///
    /// Results carry their average rating, are ordered by ascending nightly
    /// cost and hold at most `limit` rows.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidInput` for a zero limit.
    async fn get_all_properties(
        &self,
        options: &PropertySearchOptions,
        limit: u32,
    ) -> Result<Vec<PropertyListing>, StorageError>;

    /// Inserts a property and returns the persisted row, including its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the row (e.g. unknown owner).
    async fn add_property(&self, property: &NewProperty) -> Result<Property, StorageError>;

    // ==================== Metadata ====================

    /// Returns the name of this storage backend for logging/debugging.
    fn backend_name(&self) -> &'static str;
}
