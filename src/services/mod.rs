pub mod addresses;
pub mod carts;
pub mod categories;
pub mod errors;
pub mod files;
pub mod products;
pub mod users;

pub use errors::{ServiceError, ServiceResult};
