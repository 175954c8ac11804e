use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::auth::AuthenticatedUser;
use crate::dto::address::AddressPayload;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, addresses};

#[post("/addresses")]
pub async fn create_address(
    payload: web::Json<AddressPayload>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let created = addresses::create_address(repo.get_ref(), &user, payload.into_inner())?;
    Ok(HttpResponse::Created().json(created))
}

#[get("/admin/addresses")]
pub async fn get_addresses(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let listed = addresses::list_addresses(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(listed))
}

#[get("/addresses/{address_id}")]
pub async fn get_address(
    path: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let address = addresses::get_address(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(address))
}

#[get("/users/addresses")]
pub async fn get_user_addresses(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let listed = addresses::list_user_addresses(repo.get_ref(), &user)?;
    Ok(HttpResponse::Ok().json(listed))
}

#[put("/addresses/{address_id}")]
pub async fn update_address(
    path: web::Path<i32>,
    payload: web::Json<AddressPayload>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let updated =
        addresses::update_address(repo.get_ref(), path.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/admin/addresses/{address_id}")]
pub async fn delete_address(
    path: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let deleted = addresses::delete_address(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(deleted))
}
