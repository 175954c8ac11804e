use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::config::ServerConfig;
use crate::dto::ListParams;
use crate::dto::category::CategoryPayload;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, categories};

#[get("/public/categories")]
pub async fn get_categories(
    params: web::Query<ListParams>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    let response = categories::list_categories(
        repo.get_ref(),
        params.into_inner(),
        config.default_page_size,
    )?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/public/categories")]
pub async fn create_category(
    payload: web::Json<CategoryPayload>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let created = categories::create_category(repo.get_ref(), payload.into_inner())?;
    Ok(HttpResponse::Created().json(created))
}

#[put("/public/categories/{category_id}")]
pub async fn update_category(
    path: web::Path<i32>,
    payload: web::Json<CategoryPayload>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let updated =
        categories::update_category(repo.get_ref(), path.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/admin/categories/{category_id}")]
pub async fn delete_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let deleted = categories::delete_category(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(deleted))
}
