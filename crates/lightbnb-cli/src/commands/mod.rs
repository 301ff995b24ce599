pub mod properties;
pub mod reservations;
pub mod server;
pub mod users;

use anyhow::Result;
use lightbnb_db_postgres::PostgresStorage;
use lightbnb_storage::{
    LenientStorage, LightbnbStorage, NewProperty, NewUser, Property, PropertyListing,
    PropertySearchOptions, User,
};

/// Storage handle used by the commands.
///
/// In strict mode errors propagate to `main` and end the process with a
/// non-zero status. In lenient mode they are logged and surface as `None`.
pub enum Store {
    Strict(PostgresStorage),
    Lenient(LenientStorage<PostgresStorage>),
}

impl Store {
    pub fn new(storage: PostgresStorage, lenient: bool) -> Self {
        if lenient {
            Self::Lenient(LenientStorage::new(storage))
        } else {
            Self::Strict(storage)
        }
    }

    pub fn backend(&self) -> &PostgresStorage {
        match self {
            Self::Strict(storage) => storage,
            Self::Lenient(wrapper) => wrapper.inner(),
        }
    }

    pub async fn user_with_email(&self, email: &str) -> Result<Option<User>> {
        Ok(match self {
            Self::Strict(s) => s.get_user_with_email(email).await?,
            Self::Lenient(l) => l.get_user_with_email(email).await.flatten(),
        })
    }

    pub async fn user_with_id(&self, id: i32) -> Result<Option<User>> {
        Ok(match self {
            Self::Strict(s) => s.get_user_with_id(id).await?,
            Self::Lenient(l) => l.get_user_with_id(id).await.flatten(),
        })
    }

    pub async fn add_user(&self, user: &NewUser) -> Result<Option<User>> {
        Ok(match self {
            Self::Strict(s) => Some(s.add_user(user).await?),
            Self::Lenient(l) => l.add_user(user).await,
        })
    }

    pub async fn reservations(&self, guest_id: i32, limit: u32) -> Result<Option<Vec<Property>>> {
        Ok(match self {
            Self::Strict(s) => Some(s.get_all_reservations(guest_id, limit).await?),
            Self::Lenient(l) => l.get_all_reservations(guest_id, limit).await,
        })
    }

    pub async fn properties(
        &self,
        options: &PropertySearchOptions,
        limit: u32,
    ) -> Result<Option<Vec<PropertyListing>>> {
        Ok(match self {
            Self::Strict(s) => Some(s.get_all_properties(options, limit).await?),
            Self::Lenient(l) => l.get_all_properties(options, limit).await,
        })
    }

    pub async fn add_property(&self, property: &NewProperty) -> Result<Option<Property>> {
        Ok(match self {
            Self::Strict(s) => Some(s.add_property(property).await?),
            Self::Lenient(l) => l.add_property(property).await,
        })
    }
}
