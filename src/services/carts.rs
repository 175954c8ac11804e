use crate::auth::AuthenticatedUser;
use crate::domain::cart::{NewCart, NewCartItem};
use crate::dto::cart::CartDto;
use crate::repository::{CartReader, CartWriter, ProductReader};
use crate::services::{ServiceError, ServiceResult};

/// Returns the logged-in user's cart with its lines.
pub fn get_user_cart<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<CartDto>
where
    R: CartReader + ?Sized,
{
    let cart = repo
        .get_cart_by_user(user.user_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound("no cart found for this user".to_string()))?;

    let lines = repo.list_cart_items(cart.id).map_err(ServiceError::from)?;

    Ok(CartDto::from_cart(cart, lines))
}

/// Adds a product to the logged-in user's cart, creating the cart on first
/// use.
///
/// Both unit prices are captured at this moment, and the discounted line
/// total is added to the cart's running total.
pub fn add_product_to_cart<R>(
    repo: &R,
    user: &AuthenticatedUser,
    product_id: i32,
    quantity: i32,
) -> ServiceResult<CartDto>
where
    R: CartReader + CartWriter + ProductReader + ?Sized,
{
    if quantity < 1 {
        return Err(ServiceError::Validation(
            "quantity must be at least 1".to_string(),
        ));
    }

    let product = repo
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(format!("product {product_id} not found")))?;

    if product.quantity == 0 {
        return Err(ServiceError::Conflict(format!(
            "`{}` is not available",
            product.name
        )));
    }

    if quantity > product.quantity {
        return Err(ServiceError::Conflict(format!(
            "only {} unit(s) of `{}` are in stock",
            product.quantity, product.name
        )));
    }

    let cart = match repo
        .get_cart_by_user(user.user_id)
        .map_err(ServiceError::from)?
    {
        Some(cart) => cart,
        None => repo
            .create_cart(&NewCart::new(user.user_id))
            .map_err(ServiceError::from)?,
    };

    if repo
        .get_cart_item(cart.id, product_id)
        .map_err(ServiceError::from)?
        .is_some()
    {
        return Err(ServiceError::Conflict(format!(
            "`{}` is already in the cart",
            product.name
        )));
    }

    let new_item = NewCartItem::new(
        cart.id,
        product_id,
        quantity,
        product.price,
        product.special_price,
    );

    repo.add_cart_item(&new_item).map_err(ServiceError::from)?;

    // Re-read so the returned totals reflect the insert.
    let cart = repo
        .get_cart_by_user(user.user_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound("no cart found for this user".to_string()))?;
    let lines = repo.list_cart_items(cart.id).map_err(ServiceError::from)?;

    Ok(CartDto::from_cart(cart, lines))
}
