use diesel::prelude::*;

use crate::domain::cart::{
    Cart as DomainCart, CartItem as DomainCartItem, NewCart as DomainNewCart,
    NewCartItem as DomainNewCartItem,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::carts)]
pub struct Cart {
    pub id: i32,
    pub user_id: i32,
    pub total_price: f64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::carts)]
pub struct NewCart {
    pub user_id: i32,
    pub total_price: f64,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::cart_items)]
pub struct CartItem {
    pub id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub product_price: f64,
    pub discounted_price: f64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::cart_items)]
pub struct NewCartItem {
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub product_price: f64,
    pub discounted_price: f64,
}

impl From<Cart> for DomainCart {
    fn from(value: Cart) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            total_price: value.total_price,
        }
    }
}

impl From<&DomainNewCart> for NewCart {
    fn from(value: &DomainNewCart) -> Self {
        Self {
            user_id: value.user_id,
            total_price: 0.0,
        }
    }
}

impl From<CartItem> for DomainCartItem {
    fn from(value: CartItem) -> Self {
        Self {
            id: value.id,
            cart_id: value.cart_id,
            product_id: value.product_id,
            quantity: value.quantity,
            product_price: value.product_price,
            discounted_price: value.discounted_price,
        }
    }
}

impl From<&DomainNewCartItem> for NewCartItem {
    fn from(value: &DomainNewCartItem) -> Self {
        Self {
            cart_id: value.cart_id,
            product_id: value.product_id,
            quantity: value.quantity,
            product_price: value.product_price,
            discounted_price: value.discounted_price,
        }
    }
}
