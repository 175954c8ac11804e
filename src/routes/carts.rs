use actix_web::{HttpResponse, get, post, web};

use crate::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, carts};

#[get("/carts/users/cart")]
pub async fn get_user_cart(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let cart = carts::get_user_cart(repo.get_ref(), &user)?;
    Ok(HttpResponse::Ok().json(cart))
}

#[post("/carts/products/{product_id}/quantity/{quantity}")]
pub async fn add_product_to_cart(
    path: web::Path<(i32, i32)>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let (product_id, quantity) = path.into_inner();
    let cart = carts::add_product_to_cart(repo.get_ref(), &user, product_id, quantity)?;
    Ok(HttpResponse::Created().json(cart))
}
