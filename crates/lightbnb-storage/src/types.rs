//! Storage types for the LightBnB storage abstraction layer.
//!
//! These mirror the `users`, `properties` and `property_reviews` tables the
//! backends read from and write to.

use serde::{Deserialize, Serialize};

/// Default number of rows returned by list operations.
pub const DEFAULT_LIMIT: u32 = 10;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Primary key assigned by the store.
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Stored password hash, as supplied at sign-up. Never serialized.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    /// Creates a new user payload.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// A rentable property as persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Primary key assigned by the store.
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly cost in the store's smallest currency unit.
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// Payload for creating a property. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_photo_url: String,
    #[serde(default)]
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// A property search hit: the property plus its mean review rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    /// Mean of all review ratings for the property.
    pub average_rating: Option<f64>,
}

/// Optional filters for property search.
///
/// A filter narrows the result set only when it is set to a non-empty,
/// non-zero value; `None`, `""`, `0` and `0.0` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySearchOptions {
    /// Case-sensitive substring of the property's city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Exact owner id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i32>,
    /// Exclusive lower bound on `cost_per_night`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_price_per_night: Option<i64>,
    /// Exclusive upper bound on `cost_per_night`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_price_per_night: Option<i64>,
    /// Inclusive lower bound on the average review rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_rating: Option<f64>,
}

impl PropertySearchOptions {
    /// Creates options with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the city substring filter.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the owner filter.
    #[must_use]
    pub fn with_owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Sets the exclusive minimum nightly price.
    #[must_use]
    pub fn with_minimum_price_per_night(mut self, price: i64) -> Self {
        self.minimum_price_per_night = Some(price);
        self
    }

    /// Sets the exclusive maximum nightly price.
    #[must_use]
    pub fn with_maximum_price_per_night(mut self, price: i64) -> Self {
        self.maximum_price_per_night = Some(price);
        self
    }

    /// Sets the minimum average rating.
    #[must_use]
    pub fn with_minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// Returns the city filter, treating an empty string as absent.
    #[must_use]
    pub fn city_filter(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.is_empty())
    }

    /// Returns the owner filter. Zero is treated as absent.
    #[must_use]
    pub fn owner_filter(&self) -> Option<i32> {
        self.owner_id.filter(|id| *id != 0)
    }

    /// Returns the minimum price filter. Zero is treated as absent.
    #[must_use]
    pub fn minimum_price_filter(&self) -> Option<i64> {
        self.minimum_price_per_night.filter(|price| *price != 0)
    }

    /// Returns the maximum price filter. Zero is treated as absent.
    #[must_use]
    pub fn maximum_price_filter(&self) -> Option<i64> {
        self.maximum_price_per_night.filter(|price| *price != 0)
    }

    /// Returns the minimum rating filter. Zero and NaN are treated as absent.
    #[must_use]
    pub fn minimum_rating_filter(&self) -> Option<f64> {
        self.minimum_rating
            .filter(|rating| *rating != 0.0 && !rating.is_nan())
    }

    /// Number of filters that will constrain the search.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        [
            self.city_filter().is_some(),
            self.owner_filter().is_some(),
            self.minimum_price_filter().is_some(),
            self.maximum_price_filter().is_some(),
            self.minimum_rating_filter().is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}
