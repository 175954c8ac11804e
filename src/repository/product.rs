use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery, ProductSortBy,
    UpdateProduct as DomainUpdateProduct,
};
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::pagination::SortOrder;
use crate::repository::{
    DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult,
};

type BoxedProductsQuery<'a> =
    crate::schema::products::BoxedQuery<'a, diesel::sqlite::Sqlite>;

fn filtered(query: &ProductListQuery) -> BoxedProductsQuery<'_> {
    use crate::schema::products;

    let mut filtered = products::table.into_boxed::<diesel::sqlite::Sqlite>();

    if let Some(category_id) = query.category_id {
        filtered = filtered.filter(products::category_id.eq(category_id));
    }

    if let Some(keyword) = query.keyword.as_ref() {
        // SQLite LIKE is case-insensitive for ASCII, which gives the
        // substring search its case-insensitive contract.
        let pattern = format!("%{keyword}%");
        filtered = filtered.filter(products::name.like(pattern));
    }

    filtered
}

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, product_id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(product_id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(DomainProduct::from))
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let total = filtered(&query).count().get_result::<i64>(&mut conn)? as usize;

        let mut items_query = filtered(&query);

        items_query = match (query.sort_by, query.sort_order) {
            (ProductSortBy::Id, SortOrder::Asc) => items_query.order(products::id.asc()),
            (ProductSortBy::Id, SortOrder::Desc) => items_query.order(products::id.desc()),
            (ProductSortBy::Name, SortOrder::Asc) => items_query.order(products::name.asc()),
            (ProductSortBy::Name, SortOrder::Desc) => items_query.order(products::name.desc()),
            (ProductSortBy::Price, SortOrder::Asc) => items_query.order(products::price.asc()),
            (ProductSortBy::Price, SortOrder::Desc) => items_query.order(products::price.desc()),
            (ProductSortBy::Quantity, SortOrder::Asc) => {
                items_query.order(products::quantity.asc())
            }
            (ProductSortBy::Quantity, SortOrder::Desc) => {
                items_query.order(products::quantity.desc())
            }
            (ProductSortBy::Discount, SortOrder::Asc) => {
                items_query.order(products::discount.asc())
            }
            (ProductSortBy::Discount, SortOrder::Desc) => {
                items_query.order(products::discount.desc())
            }
            (ProductSortBy::SpecialPrice, SortOrder::Asc) => {
                items_query.order(products::special_price.asc())
            }
            (ProductSortBy::SpecialPrice, SortOrder::Desc) => {
                items_query.order(products::special_price.desc())
            }
        };

        if let Some(page) = &query.pagination {
            items_query = items_query.offset(page.offset()).limit(page.limit());
        }

        let items = items_query.load::<DbProduct>(&mut conn)?;
        let items = items.into_iter().map(DomainProduct::from).collect();

        Ok((total, items))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let insertable = DbNewProduct::from(new_product);

        let created = diesel::insert_into(products::table)
            .values(&insertable)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateProduct::from(updates);

        let updated = diesel::update(products::table.filter(products::id.eq(product_id)))
            .set(&db_updates)
            .get_result::<DbProduct>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        Ok(updated.into())
    }

    fn update_product_image(
        &self,
        product_id: i32,
        image_url: &str,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let updated = diesel::update(products::table.filter(products::id.eq(product_id)))
            .set(products::image_url.eq(image_url))
            .get_result::<DbProduct>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        Ok(updated.into())
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::{cart_items, carts, products};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            let lines = cart_items::table
                .filter(cart_items::product_id.eq(product_id))
                .load::<crate::models::cart::CartItem>(conn)?;

            for line in &lines {
                let deduction = line.discounted_price * f64::from(line.quantity);
                diesel::update(carts::table.filter(carts::id.eq(line.cart_id)))
                    .set(carts::total_price.eq(carts::total_price - deduction))
                    .execute(conn)?;
            }

            diesel::delete(cart_items::table.filter(cart_items::product_id.eq(product_id)))
                .execute(conn)?;

            let deleted = diesel::delete(products::table.filter(products::id.eq(product_id)))
                .execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}
