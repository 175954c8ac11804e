use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, post, web};
use serde::Deserialize;

use crate::dto::user::UserDto;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, users};

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
}

#[post("/auth/login")]
pub async fn login(
    req: HttpRequest,
    payload: web::Json<LoginPayload>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let user = users::resolve_login(repo.get_ref(), &payload.email)?;

    Identity::login(&req.extensions(), user.id.to_string())
        .map_err(|err| ServiceError::Internal(err.to_string()))?;

    Ok(HttpResponse::Ok().json(UserDto::from(user)))
}

#[post("/auth/logout")]
pub async fn logout(identity: Option<Identity>) -> HttpResponse {
    if let Some(identity) = identity {
        identity.logout();
    }
    HttpResponse::NoContent().finish()
}
