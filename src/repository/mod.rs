use crate::db::{DbConnection, DbPool};
use crate::domain::address::{Address, NewAddress, UpdateAddress};
use crate::domain::cart::{Cart, CartItem, NewCart, NewCartItem};
use crate::domain::category::{Category, CategoryListQuery, NewCategory, UpdateCategory};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::domain::user::{NewUser, User};

pub mod address;
pub mod cart;
pub mod category;
pub mod errors;
pub mod product;
pub mod user;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

/// Diesel-backed repository implementation that wraps an r2d2 pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over category records.
pub trait CategoryReader {
    fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<Category>>;
    fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;
    fn list_categories(&self, query: CategoryListQuery)
    -> RepositoryResult<(usize, Vec<Category>)>;
}

/// Write operations over category records.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    /// Removes the category together with its products and their cart items,
    /// in that dependency order, inside one transaction.
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, product_id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn update_product_image(&self, product_id: i32, image_url: &str) -> RepositoryResult<Product>;
    /// Removes the product and its cart items, deducting each removed line
    /// from the owning cart's running total, inside one transaction.
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over address records.
pub trait AddressReader {
    fn get_address_by_id(&self, address_id: i32) -> RepositoryResult<Option<Address>>;
    fn list_addresses(&self) -> RepositoryResult<Vec<Address>>;
    fn list_addresses_by_user(&self, user_id: i32) -> RepositoryResult<Vec<Address>>;
}

/// Write operations over address records.
pub trait AddressWriter {
    fn create_address(&self, new_address: &NewAddress) -> RepositoryResult<Address>;
    fn update_address(&self, address_id: i32, updates: &UpdateAddress)
    -> RepositoryResult<Address>;
    fn delete_address(&self, address_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over user records.
pub trait UserReader {
    fn get_user_by_id(&self, user_id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
}

/// Write operations over user records.
pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}

/// Read-only operations over carts and their lines.
pub trait CartReader {
    fn get_cart_by_user(&self, user_id: i32) -> RepositoryResult<Option<Cart>>;
    fn get_cart_item(&self, cart_id: i32, product_id: i32)
    -> RepositoryResult<Option<CartItem>>;
    /// Cart lines joined with the product they reference.
    fn list_cart_items(&self, cart_id: i32) -> RepositoryResult<Vec<(CartItem, Product)>>;
}

/// Write operations over carts and their lines.
pub trait CartWriter {
    fn create_cart(&self, new_cart: &NewCart) -> RepositoryResult<Cart>;
    /// Inserts the line and adds its total to the cart within one transaction.
    fn add_cart_item(&self, new_item: &NewCartItem) -> RepositoryResult<CartItem>;
}
