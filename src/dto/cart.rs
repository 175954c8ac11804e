use serde::{Deserialize, Serialize};

use crate::domain::cart::{Cart, CartItem};
use crate::domain::product::Product;
use crate::dto::product::ProductDto;

/// Transport representation of a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub cart_item_id: i32,
    pub product: ProductDto,
    pub quantity: i32,
    /// Base unit price captured when the item was added.
    pub product_price: f64,
    /// Discount-adjusted unit price captured when the item was added.
    pub discounted_price: f64,
}

impl CartItemDto {
    pub fn from_line(item: CartItem, product: Product) -> Self {
        Self {
            cart_item_id: item.id,
            product: ProductDto::from(product),
            quantity: item.quantity,
            product_price: item.product_price,
            discounted_price: item.discounted_price,
        }
    }
}

/// Transport representation of a cart with its lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDto {
    pub cart_id: i32,
    pub total_price: f64,
    pub items: Vec<CartItemDto>,
}

impl CartDto {
    pub fn from_cart(cart: Cart, lines: Vec<(CartItem, Product)>) -> Self {
        Self {
            cart_id: cart.id,
            total_price: cart.total_price,
            items: lines
                .into_iter()
                .map(|(item, product)| CartItemDto::from_line(item, product))
                .collect(),
        }
    }
}
