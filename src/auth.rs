use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::{FromRequest, HttpRequest, dev::Payload};

use crate::services::ServiceError;

/// The logged-in user resolved from the identity session.
///
/// Only the id travels in the cookie; handlers that need the full record
/// look it up through `UserReader`.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: i32,
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let user_id = Identity::from_request(req, payload)
            .into_inner()
            .ok()
            .and_then(|identity| identity.id().ok())
            .and_then(|raw| raw.parse::<i32>().ok());

        match user_id {
            Some(user_id) => ready(Ok(Self { user_id })),
            None => ready(Err(ServiceError::Unauthorized.into())),
        }
    }
}
