use mockall::mock;

use super::{
    AddressReader, AddressWriter, CartReader, CartWriter, CategoryReader, CategoryWriter,
    ProductReader, ProductWriter, RepositoryResult, UserReader, UserWriter,
};
use crate::domain::{
    address::{Address, NewAddress, UpdateAddress},
    cart::{Cart, CartItem, NewCart, NewCartItem},
    category::{Category, CategoryListQuery, NewCategory, UpdateCategory},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
    user::{NewUser, User},
};

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<Category>>;
        fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;
        fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<(usize, Vec<Category>)>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, product_id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn update_product_image(&self, product_id: i32, image_url: &str) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub AddressReader {}

    impl AddressReader for AddressReader {
        fn get_address_by_id(&self, address_id: i32) -> RepositoryResult<Option<Address>>;
        fn list_addresses(&self) -> RepositoryResult<Vec<Address>>;
        fn list_addresses_by_user(&self, user_id: i32) -> RepositoryResult<Vec<Address>>;
    }
}

mock! {
    pub AddressWriter {}

    impl AddressWriter for AddressWriter {
        fn create_address(&self, new_address: &NewAddress) -> RepositoryResult<Address>;
        fn update_address(&self, address_id: i32, updates: &UpdateAddress) -> RepositoryResult<Address>;
        fn delete_address(&self, address_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub UserReader {}

    impl UserReader for UserReader {
        fn get_user_by_id(&self, user_id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    }
}

mock! {
    pub UserWriter {}

    impl UserWriter for UserWriter {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    }
}

mock! {
    pub CartReader {}

    impl CartReader for CartReader {
        fn get_cart_by_user(&self, user_id: i32) -> RepositoryResult<Option<Cart>>;
        fn get_cart_item(&self, cart_id: i32, product_id: i32) -> RepositoryResult<Option<CartItem>>;
        fn list_cart_items(&self, cart_id: i32) -> RepositoryResult<Vec<(CartItem, Product)>>;
    }
}

mock! {
    pub CartWriter {}

    impl CartWriter for CartWriter {
        fn create_cart(&self, new_cart: &NewCart) -> RepositoryResult<Cart>;
        fn add_cart_item(&self, new_item: &NewCartItem) -> RepositoryResult<CartItem>;
    }
}
