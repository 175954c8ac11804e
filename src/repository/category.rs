use diesel::prelude::*;

use crate::domain::category::{
    Category as DomainCategory, CategoryListQuery, CategorySortBy,
    NewCategory as DomainNewCategory, UpdateCategory as DomainUpdateCategory,
};
use crate::models::category::{
    Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
};
use crate::pagination::SortOrder;
use crate::repository::{
    CategoryReader, CategoryWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(category_id))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(DomainCategory::from))
    }

    fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::name.eq(name))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(DomainCategory::from))
    }

    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainCategory>)> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let total = categories::table.count().get_result::<i64>(&mut conn)? as usize;

        let mut items_query = categories::table.into_boxed::<diesel::sqlite::Sqlite>();

        items_query = match (query.sort_by, query.sort_order) {
            (CategorySortBy::Id, SortOrder::Asc) => items_query.order(categories::id.asc()),
            (CategorySortBy::Id, SortOrder::Desc) => items_query.order(categories::id.desc()),
            (CategorySortBy::Name, SortOrder::Asc) => items_query.order(categories::name.asc()),
            (CategorySortBy::Name, SortOrder::Desc) => items_query.order(categories::name.desc()),
        };

        if let Some(page) = &query.pagination {
            items_query = items_query.offset(page.offset()).limit(page.limit());
        }

        let items = items_query.load::<DbCategory>(&mut conn)?;
        let items = items.into_iter().map(DomainCategory::from).collect();

        Ok((total, items))
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, new_category: &DomainNewCategory) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let insertable = DbNewCategory::from(new_category);

        let created = diesel::insert_into(categories::table)
            .values(&insertable)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &DomainUpdateCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateCategory::from(updates);

        let updated = diesel::update(categories::table.filter(categories::id.eq(category_id)))
            .set(&db_updates)
            .get_result::<DbCategory>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        Ok(updated.into())
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
        use crate::schema::{cart_items, carts, categories, products};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            let product_ids = products::table
                .filter(products::category_id.eq(category_id))
                .select(products::id)
                .load::<i32>(conn)?;

            if !product_ids.is_empty() {
                // Deduct soon-to-be-removed lines from their carts before
                // dropping the rows, so running totals stay consistent.
                let lines = cart_items::table
                    .filter(cart_items::product_id.eq_any(&product_ids))
                    .load::<crate::models::cart::CartItem>(conn)?;

                for line in &lines {
                    let deduction = line.discounted_price * f64::from(line.quantity);
                    diesel::update(carts::table.filter(carts::id.eq(line.cart_id)))
                        .set(carts::total_price.eq(carts::total_price - deduction))
                        .execute(conn)?;
                }

                diesel::delete(
                    cart_items::table.filter(cart_items::product_id.eq_any(&product_ids)),
                )
                .execute(conn)?;

                diesel::delete(products::table.filter(products::category_id.eq(category_id)))
                    .execute(conn)?;
            }

            let deleted =
                diesel::delete(categories::table.filter(categories::id.eq(category_id)))
                    .execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}
