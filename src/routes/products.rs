use actix_multipart::form::MultipartForm;
use actix_multipart::form::bytes::Bytes;
use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::auth::AuthenticatedUser;
use crate::config::ServerConfig;
use crate::dto::ListParams;
use crate::dto::product::ProductPayload;
use crate::repository::DieselRepository;
use crate::services::files::FileStorage;
use crate::services::{ServiceError, products};

#[post("/admin/categories/{category_id}/products")]
pub async fn add_product(
    path: web::Path<i32>,
    payload: web::Json<ProductPayload>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let created = products::add_product(
        repo.get_ref(),
        path.into_inner(),
        payload.into_inner(),
        Some(user.user_id),
    )?;
    Ok(HttpResponse::Created().json(created))
}

#[get("/public/products")]
pub async fn get_products(
    params: web::Query<ListParams>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    let response = products::list_products(
        repo.get_ref(),
        params.into_inner(),
        config.default_page_size,
    )?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/public/categories/{category_id}/products")]
pub async fn get_products_by_category(
    path: web::Path<i32>,
    params: web::Query<ListParams>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    let response = products::search_by_category(
        repo.get_ref(),
        path.into_inner(),
        params.into_inner(),
        config.default_page_size,
    )?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/public/products/keyword/{keyword}")]
pub async fn search_products(
    path: web::Path<String>,
    params: web::Query<ListParams>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    let response = products::search_by_keyword(
        repo.get_ref(),
        &path.into_inner(),
        params.into_inner(),
        config.default_page_size,
    )?;
    Ok(HttpResponse::Ok().json(response))
}

#[put("/admin/products/{product_id}")]
pub async fn update_product(
    path: web::Path<i32>,
    payload: web::Json<ProductPayload>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let updated =
        products::update_product(repo.get_ref(), path.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/admin/products/{product_id}")]
pub async fn delete_product(
    path: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let deleted = products::delete_product(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(deleted))
}

/// Multipart payload carrying the uploaded product image.
#[derive(Debug, MultipartForm)]
pub struct UploadImageForm {
    #[multipart(limit = "10MB")]
    pub image: Bytes,
}

#[put("/admin/products/{product_id}/image")]
pub async fn update_product_image(
    path: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    storage: web::Data<FileStorage>,
    MultipartForm(form): MultipartForm<UploadImageForm>,
) -> Result<HttpResponse, ServiceError> {
    let updated = products::update_product_image(
        repo.get_ref(),
        storage.get_ref(),
        path.into_inner(),
        form.image.file_name.as_deref(),
        &form.image.data,
    )?;
    Ok(HttpResponse::Ok().json(updated))
}
