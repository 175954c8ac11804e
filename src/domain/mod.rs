pub mod address;
pub mod cart;
pub mod category;
pub mod product;
pub mod user;
