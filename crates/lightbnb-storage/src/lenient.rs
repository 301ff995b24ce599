//! LenientStorage - a wrapper that logs failures and resolves them as absent.
//!
//! The typed [`LightbnbStorage`] channel is the default. This wrapper exists
//! for callers that depend on the older contract where no operation ever
//! fails: each error is logged at `error` level and the call yields `None`.
//! A caller of this wrapper cannot tell "no match" from "query failed".
//!
//! # Example
//!
//! ```ignore
//! use lightbnb_storage::LenientStorage;
//!
//! let storage = LenientStorage::new(postgres_storage);
//!
//! // `None` both when the user is missing and when the store is down
//! let user = storage.get_user_with_email("a@b.c").await.flatten();
//! ```

use tracing::error;

use crate::error::StorageError;
use crate::traits::LightbnbStorage;
use crate::types::{NewProperty, NewUser, Property, PropertyListing, PropertySearchOptions, User};

/// A storage wrapper that swallows errors after logging them.
///
/// Lookups return `Option<Option<T>>` so the inner "no row" stays visible to
/// callers that care; the outer `None` means the operation failed.
pub struct LenientStorage<S: LightbnbStorage> {
    inner: S,
}

impl<S: LightbnbStorage> LenientStorage<S> {
    /// Create a new lenient wrapper.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Get a reference to the inner storage.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap into the inner storage.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn swallow<T>(&self, operation: &'static str, result: Result<T, StorageError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                error!(
                    backend = self.inner.backend_name(),
                    operation,
                    category = %err.category(),
                    error = %err,
                    "Storage operation failed"
                );
                None
            }
        }
    }

    /// See [`LightbnbStorage::get_user_with_email`].
    pub async fn get_user_with_email(&self, email: &str) -> Option<Option<User>> {
        let result = self.inner.get_user_with_email(email).await;
        self.swallow("get_user_with_email", result)
    }

    /// See [`LightbnbStorage::get_user_with_id`].
    pub async fn get_user_with_id(&self, id: i32) -> Option<Option<User>> {
        let result = self.inner.get_user_with_id(id).await;
        self.swallow("get_user_with_id", result)
    }

    /// See [`LightbnbStorage::add_user`].
    pub async fn add_user(&self, user: &NewUser) -> Option<User> {
        let result = self.inner.add_user(user).await;
        self.swallow("add_user", result)
    }

    /// See [`LightbnbStorage::get_all_reservations`].
    pub async fn get_all_reservations(&self, guest_id: i32, limit: u32) -> Option<Vec<Property>> {
        let result = self.inner.get_all_reservations(guest_id, limit).await;
        self.swallow("get_all_reservations", result)
    }

    /// See [`LightbnbStorage::get_all_properties`].
    pub async fn get_all_properties(
        &self,
        options: &PropertySearchOptions,
        limit: u32,
    ) -> Option<Vec<PropertyListing>> {
        let result = self.inner.get_all_properties(options, limit).await;
        self.swallow("get_all_properties", result)
    }

    /// See [`LightbnbStorage::add_property`].
    pub async fn add_property(&self, property: &NewProperty) -> Option<Property> {
        let result = self.inner.add_property(property).await;
        self.swallow("add_property", result)
    }
}
