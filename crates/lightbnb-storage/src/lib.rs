//! # lightbnb-storage
//!
//! Storage abstraction layer for LightBnB.
//!
//! This crate defines the trait and types every storage backend implements.
//! It contains no database code; the PostgreSQL backend lives in
//! `lightbnb-db-postgres`.
//!
//! ## Overview
//!
//! The main trait is [`LightbnbStorage`], which covers:
//! - User lookup by email or id, and user creation
//! - Listing the properties a guest has reserved
//! - Property search with optional filters
//! - Property creation
//!
//! Every operation returns a [`StorageResult`]. [`LenientStorage`] wraps any
//! backend for callers that want failures logged and flattened to `None`.
//!
//! ## Example
//!
//! ```ignore
//! use lightbnb_storage::{LightbnbStorage, PropertySearchOptions, StorageError};
//!
//! async fn cheap_in(
//!     storage: &dyn LightbnbStorage,
//!     city: &str,
//! ) -> Result<usize, StorageError> {
//!     let options = PropertySearchOptions::new()
//!         .with_city(city)
//!         .with_maximum_price_per_night(10_000);
//!
//!     Ok(storage.get_all_properties(&options, 20).await?.len())
//! }
//! ```

mod error;
pub mod lenient;
mod traits;
mod types;

pub use error::{ErrorCategory, StorageError};
pub use lenient::LenientStorage;
pub use traits::LightbnbStorage;
pub use types::{
    DEFAULT_LIMIT, NewProperty, NewUser, Property, PropertyListing, PropertySearchOptions, User,
};

/// Type alias for a storage result.
pub type StorageResult<T> = Result<T, StorageError>;

/// Type alias for a shared storage trait object.
pub type DynStorage = std::sync::Arc<dyn LightbnbStorage>;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use lightbnb_storage::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ErrorCategory, StorageError};
    pub use crate::lenient::LenientStorage;
    pub use crate::traits::LightbnbStorage;
    pub use crate::types::{
        DEFAULT_LIMIT, NewProperty, NewUser, Property, PropertyListing, PropertySearchOptions,
        User,
    };
    pub use crate::{DynStorage, StorageResult};
}
