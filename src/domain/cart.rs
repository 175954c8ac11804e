use serde::{Deserialize, Serialize};

/// Domain representation of a user's shopping cart.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cart {
    pub id: i32,
    /// Owning user identifier; one cart per user.
    pub user_id: i32,
    /// Running total of `discounted_price * quantity` across the items.
    pub total_price: f64,
}

/// Payload required to insert a new cart.
#[derive(Debug, Clone)]
pub struct NewCart {
    pub user_id: i32,
}

impl NewCart {
    pub fn new(user_id: i32) -> Self {
        Self { user_id }
    }
}

/// A product line inside a cart.
///
/// Both unit prices are captured at the time the product is added, so later
/// price changes do not rewrite existing carts.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CartItem {
    pub id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    /// Base unit price when the item was added.
    pub product_price: f64,
    /// Discount-adjusted unit price when the item was added.
    pub discounted_price: f64,
}

/// Payload required to insert a new cart line.
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub product_price: f64,
    pub discounted_price: f64,
}

impl NewCartItem {
    pub fn new(
        cart_id: i32,
        product_id: i32,
        quantity: i32,
        product_price: f64,
        discounted_price: f64,
    ) -> Self {
        Self {
            cart_id,
            product_id,
            quantity,
            product_price,
            discounted_price,
        }
    }

    /// Total this line contributes to the cart's running total.
    pub fn line_total(&self) -> f64 {
        self.discounted_price * self.quantity as f64
    }
}
