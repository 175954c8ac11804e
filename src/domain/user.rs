use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a registered user.
///
/// Account provisioning happens outside this service; users are only looked
/// up here to resolve sessions and to own addresses, carts and listings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new user record.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}
