pub mod addresses;
pub mod auth;
pub mod carts;
pub mod categories;
pub mod products;
