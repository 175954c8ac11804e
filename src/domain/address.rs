use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Domain representation of a shipping address owned by a user.
///
/// Ownership is one-directional: the address carries the owning `user_id`
/// and "addresses of a user" is answered by a repository query, so there is
/// no in-memory collection to keep in sync on deletion.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Address {
    pub id: i32,
    /// Owning user identifier.
    pub user_id: i32,
    pub street: String,
    pub building_name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new address.
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub user_id: i32,
    pub street: String,
    pub building_name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
    pub updated_at: NaiveDateTime,
}

impl NewAddress {
    pub fn new(
        user_id: i32,
        street: impl Into<String>,
        building_name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        pincode: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            street: street.into(),
            building_name: building_name.into(),
            city: city.into(),
            state: state.into(),
            country: country.into(),
            pincode: pincode.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Patch data applied when updating an existing address.
///
/// All six address fields are overwritten in place.
#[derive(Debug, Clone)]
pub struct UpdateAddress {
    pub street: String,
    pub building_name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
    pub updated_at: NaiveDateTime,
}

impl UpdateAddress {
    pub fn new(
        street: impl Into<String>,
        building_name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        pincode: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            building_name: building_name.into(),
            city: city.into(),
            state: state.into(),
            country: country.into(),
            pincode: pincode.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}
