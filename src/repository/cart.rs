use diesel::prelude::*;

use crate::domain::cart::{
    Cart as DomainCart, CartItem as DomainCartItem, NewCart as DomainNewCart,
    NewCartItem as DomainNewCartItem,
};
use crate::domain::product::Product as DomainProduct;
use crate::models::cart::{
    Cart as DbCart, CartItem as DbCartItem, NewCart as DbNewCart, NewCartItem as DbNewCartItem,
};
use crate::models::product::Product as DbProduct;
use crate::repository::{
    CartReader, CartWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl CartReader for DieselRepository {
    fn get_cart_by_user(&self, user_id: i32) -> RepositoryResult<Option<DomainCart>> {
        use crate::schema::carts;

        let mut conn = self.conn()?;

        let cart = carts::table
            .filter(carts::user_id.eq(user_id))
            .first::<DbCart>(&mut conn)
            .optional()?;

        Ok(cart.map(DomainCart::from))
    }

    fn get_cart_item(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> RepositoryResult<Option<DomainCartItem>> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;

        let item = cart_items::table
            .filter(cart_items::cart_id.eq(cart_id))
            .filter(cart_items::product_id.eq(product_id))
            .first::<DbCartItem>(&mut conn)
            .optional()?;

        Ok(item.map(DomainCartItem::from))
    }

    fn list_cart_items(
        &self,
        cart_id: i32,
    ) -> RepositoryResult<Vec<(DomainCartItem, DomainProduct)>> {
        use crate::schema::{cart_items, products};

        let mut conn = self.conn()?;

        let rows = cart_items::table
            .inner_join(products::table)
            .filter(cart_items::cart_id.eq(cart_id))
            .order(cart_items::id.asc())
            .load::<(DbCartItem, DbProduct)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(item, product)| (item.into(), product.into()))
            .collect())
    }
}

impl CartWriter for DieselRepository {
    fn create_cart(&self, new_cart: &DomainNewCart) -> RepositoryResult<DomainCart> {
        use crate::schema::carts;

        let mut conn = self.conn()?;

        let insertable = DbNewCart::from(new_cart);

        let created = diesel::insert_into(carts::table)
            .values(&insertable)
            .get_result::<DbCart>(&mut conn)?;

        Ok(created.into())
    }

    fn add_cart_item(&self, new_item: &DomainNewCartItem) -> RepositoryResult<DomainCartItem> {
        use crate::schema::{cart_items, carts};

        let mut conn = self.conn()?;

        conn.transaction::<DomainCartItem, RepositoryError, _>(|conn| {
            let insertable = DbNewCartItem::from(new_item);

            let created = diesel::insert_into(cart_items::table)
                .values(&insertable)
                .get_result::<DbCartItem>(conn)?;

            diesel::update(carts::table.filter(carts::id.eq(new_item.cart_id)))
                .set(carts::total_price.eq(carts::total_price + new_item.line_total()))
                .execute(conn)?;

            Ok(created.into())
        })
    }
}
