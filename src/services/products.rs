use crate::domain::product::{ProductListQuery, ProductSortBy};
use crate::dto::ListParams;
use crate::dto::product::{ProductDto, ProductPayload, ProductResponse};
use crate::pagination::Page;
use crate::repository::{CategoryReader, ProductReader, ProductWriter, RepositoryError};
use crate::services::files::FileStorage;
use crate::services::{ServiceError, ServiceResult};

/// Creates a product under a category.
///
/// The duplicate check is a linear scan over the category's products; the
/// unique (category, name) index backs it up at the storage level.
pub fn add_product<R>(
    repo: &R,
    category_id: i32,
    payload: ProductPayload,
    seller_id: Option<i32>,
) -> ServiceResult<ProductDto>
where
    R: CategoryReader + ProductReader + ProductWriter + ?Sized,
{
    let category = repo
        .get_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(format!("category {category_id} not found")))?;

    let mut new_product = payload.into_new_product(category_id)?;
    if let Some(seller_id) = seller_id {
        new_product = new_product.with_seller(seller_id);
    }

    let (_, existing) = repo
        .list_products(ProductListQuery::new().category(category_id))
        .map_err(ServiceError::from)?;

    if existing.iter().any(|product| product.name == new_product.name) {
        return Err(ServiceError::Conflict(format!(
            "product `{}` already exists in category `{}`",
            new_product.name, category.name
        )));
    }

    let created = repo
        .create_product(&new_product)
        .map_err(ServiceError::from)?;

    Ok(created.into())
}

/// Returns one sorted page over all products.
pub fn list_products<R>(
    repo: &R,
    params: ListParams,
    default_page_size: usize,
) -> ServiceResult<ProductResponse>
where
    R: ProductReader + ?Sized,
{
    let page = run_product_query(repo, ProductListQuery::new(), &params, default_page_size)?;

    if page.is_empty() {
        return Err(ServiceError::EmptyPage("no products found".to_string()));
    }

    Ok(page.into())
}

/// Returns one sorted page of the given category's products.
pub fn search_by_category<R>(
    repo: &R,
    category_id: i32,
    params: ListParams,
    default_page_size: usize,
) -> ServiceResult<ProductResponse>
where
    R: CategoryReader + ProductReader + ?Sized,
{
    let category = repo
        .get_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(format!("category {category_id} not found")))?;

    let page = run_product_query(
        repo,
        ProductListQuery::new().category(category_id),
        &params,
        default_page_size,
    )?;

    if page.is_empty() {
        return Err(ServiceError::EmptyPage(format!(
            "`{}` category does not have any products",
            category.name
        )));
    }

    Ok(page.into())
}

/// Returns one sorted page of products whose name contains the keyword,
/// matched case-insensitively.
pub fn search_by_keyword<R>(
    repo: &R,
    keyword: &str,
    params: ListParams,
    default_page_size: usize,
) -> ServiceResult<ProductResponse>
where
    R: ProductReader + ?Sized,
{
    let page = run_product_query(
        repo,
        ProductListQuery::new().keyword(keyword),
        &params,
        default_page_size,
    )?;

    if page.is_empty() {
        return Err(ServiceError::EmptyPage(format!(
            "no products found with keyword `{keyword}`"
        )));
    }

    Ok(page.into())
}

fn run_product_query<R>(
    repo: &R,
    query: ProductListQuery,
    params: &ListParams,
    default_page_size: usize,
) -> ServiceResult<Page<crate::domain::product::Product>>
where
    R: ProductReader + ?Sized,
{
    let sort_by = params.parse_sort_by::<ProductSortBy>()?;
    let sort_order = params.parse_sort_order()?;
    let page_request = params.page_request(default_page_size);

    let query = query.sort(sort_by, sort_order).paginate(page_request);
    let (total, items) = repo.list_products(query).map_err(ServiceError::from)?;

    Ok(Page::new(items, page_request, total))
}

/// Overwrites a product's fields, re-deriving the special price.
pub fn update_product<R>(
    repo: &R,
    product_id: i32,
    payload: ProductPayload,
) -> ServiceResult<ProductDto>
where
    R: ProductWriter + ?Sized,
{
    let update = payload.into_update_product()?;

    let updated = repo
        .update_product(product_id, &update)
        .map_err(|err| match err {
            RepositoryError::NotFound => {
                ServiceError::NotFound(format!("product {product_id} not found"))
            }
            other => ServiceError::from(other),
        })?;

    Ok(updated.into())
}

/// Deletes a product and its cart lines, returning its prior state.
pub fn delete_product<R>(repo: &R, product_id: i32) -> ServiceResult<ProductDto>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    let product = repo
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(format!("product {product_id} not found")))?;

    repo.delete_product(product_id).map_err(ServiceError::from)?;

    Ok(product.into())
}

/// Stores an uploaded image and records its reference on the product.
pub fn update_product_image<R>(
    repo: &R,
    storage: &FileStorage,
    product_id: i32,
    file_name: Option<&str>,
    bytes: &[u8],
) -> ServiceResult<ProductDto>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(format!("product {product_id} not found")))?;

    let stored_name = storage
        .save_image(file_name, bytes)
        .map_err(|err| ServiceError::Internal(format!("failed to store image: {err}")))?;

    let updated = repo
        .update_product_image(product_id, &stored_name)
        .map_err(ServiceError::from)?;

    Ok(updated.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::DEFAULT_PRODUCT_IMAGE;
    use crate::domain::category::Category;
    use crate::domain::product::Product;
    use crate::repository::RepositoryResult;
    use crate::repository::mock::{MockCategoryReader, MockProductReader, MockProductWriter};

    struct MockProductRepo {
        categories: MockCategoryReader,
        reader: MockProductReader,
        writer: MockProductWriter,
    }

    impl MockProductRepo {
        fn new() -> Self {
            Self {
                categories: MockCategoryReader::new(),
                reader: MockProductReader::new(),
                writer: MockProductWriter::new(),
            }
        }
    }

    impl CategoryReader for MockProductRepo {
        fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<Category>> {
            self.categories.get_category_by_id(category_id)
        }

        fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>> {
            self.categories.get_category_by_name(name)
        }

        fn list_categories(
            &self,
            query: crate::domain::category::CategoryListQuery,
        ) -> RepositoryResult<(usize, Vec<Category>)> {
            self.categories.list_categories(query)
        }
    }

    impl ProductReader for MockProductRepo {
        fn get_product_by_id(&self, product_id: i32) -> RepositoryResult<Option<Product>> {
            self.reader.get_product_by_id(product_id)
        }

        fn list_products(
            &self,
            query: ProductListQuery,
        ) -> RepositoryResult<(usize, Vec<Product>)> {
            self.reader.list_products(query)
        }
    }

    impl ProductWriter for MockProductRepo {
        fn create_product(
            &self,
            new_product: &crate::domain::product::NewProduct,
        ) -> RepositoryResult<Product> {
            self.writer.create_product(new_product)
        }

        fn update_product(
            &self,
            product_id: i32,
            updates: &crate::domain::product::UpdateProduct,
        ) -> RepositoryResult<Product> {
            self.writer.update_product(product_id, updates)
        }

        fn update_product_image(
            &self,
            product_id: i32,
            image_url: &str,
        ) -> RepositoryResult<Product> {
            self.writer.update_product_image(product_id, image_url)
        }

        fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
            self.writer.delete_product(product_id)
        }
    }

    fn fixed_timestamp() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_category(id: i32, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            created_at: fixed_timestamp(),
            updated_at: fixed_timestamp(),
        }
    }

    fn sample_product(id: i32, category_id: i32, name: &str, price: f64, discount: f64) -> Product {
        Product {
            id,
            category_id,
            seller_id: None,
            name: name.to_string(),
            description: String::new(),
            image_url: DEFAULT_PRODUCT_IMAGE.to_string(),
            quantity: 10,
            price,
            discount,
            special_price: crate::domain::product::special_price(price, discount),
            created_at: fixed_timestamp(),
            updated_at: fixed_timestamp(),
        }
    }

    fn payload(name: &str, price: f64, discount: f64) -> ProductPayload {
        ProductPayload {
            product_name: name.to_string(),
            product_description: "a product".to_string(),
            quantity: 10,
            price,
            discount,
        }
    }

    #[test]
    fn add_product_fails_when_category_is_missing() {
        let mut repo = MockProductRepo::new();
        repo.categories
            .expect_get_category_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = add_product(&repo, 9, payload("Desk", 100.0, 0.0), None);
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn add_product_rejects_duplicate_names_within_the_category() {
        let mut repo = MockProductRepo::new();
        repo.categories
            .expect_get_category_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_category(id, "Furniture"))));
        repo.reader
            .expect_list_products()
            .times(1)
            .returning(|_| Ok((1, vec![sample_product(1, 9, "Desk", 100.0, 0.0)])));

        let result = add_product(&repo, 9, payload("Desk", 120.0, 0.0), None);
        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn add_product_derives_special_price_and_placeholder_image() {
        let mut repo = MockProductRepo::new();
        repo.categories
            .expect_get_category_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_category(id, "Furniture"))));
        repo.reader
            .expect_list_products()
            .times(1)
            .returning(|_| Ok((0, Vec::new())));
        repo.writer
            .expect_create_product()
            .times(1)
            .withf(|new_product| {
                assert_eq!(new_product.special_price, 90.0);
                assert_eq!(new_product.image_url, DEFAULT_PRODUCT_IMAGE);
                assert_eq!(new_product.seller_id, Some(4));
                true
            })
            .returning(|new_product| {
                let mut product = sample_product(1, new_product.category_id, &new_product.name, new_product.price, new_product.discount);
                product.seller_id = new_product.seller_id;
                Ok(product)
            });

        let created =
            add_product(&repo, 9, payload("Desk", 100.0, 10.0), Some(4)).expect("expected success");

        assert_eq!(created.special_price, 90.0);
    }

    #[test]
    fn search_by_category_reports_empty_categories() {
        let mut repo = MockProductRepo::new();
        repo.categories
            .expect_get_category_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_category(id, "Furniture"))));
        repo.reader
            .expect_list_products()
            .times(1)
            .returning(|_| Ok((0, Vec::new())));

        let result = search_by_category(&repo, 9, ListParams::default(), 10);
        assert!(
            matches!(result, Err(ServiceError::EmptyPage(message)) if message.contains("Furniture"))
        );
    }

    #[test]
    fn search_by_keyword_passes_the_keyword_to_the_query() {
        let mut repo = MockProductReader::new();
        repo.expect_list_products()
            .times(1)
            .returning(|query| {
                assert_eq!(query.keyword.as_deref(), Some("shoe"));
                Ok((1, vec![sample_product(1, 2, "Running Shoes", 50.0, 0.0)]))
            });

        let response =
            search_by_keyword(&repo, "shoe", ListParams::default(), 10).expect("expected success");

        assert_eq!(response.products.len(), 1);
        assert_eq!(response.products[0].product_name, "Running Shoes");
    }

    #[test]
    fn search_by_keyword_fails_when_nothing_matches() {
        let mut repo = MockProductReader::new();
        repo.expect_list_products()
            .times(1)
            .returning(|_| Ok((0, Vec::new())));

        let result = search_by_keyword(&repo, "submarine", ListParams::default(), 10);
        assert!(
            matches!(result, Err(ServiceError::EmptyPage(message)) if message.contains("submarine"))
        );
    }

    #[test]
    fn update_product_recomputes_the_special_price() {
        let mut repo = MockProductWriter::new();
        repo.expect_update_product()
            .times(1)
            .withf(|product_id, updates| {
                assert_eq!(*product_id, 7);
                assert_eq!(updates.special_price, 75.0);
                true
            })
            .returning(|id, updates| {
                let mut product = sample_product(id, 1, &updates.name, updates.price, updates.discount);
                product.quantity = updates.quantity;
                Ok(product)
            });

        let updated =
            update_product(&repo, 7, payload("Desk", 100.0, 25.0)).expect("expected success");

        assert_eq!(updated.special_price, 75.0);
    }

    #[test]
    fn delete_product_returns_the_prior_state() {
        let mut repo = MockProductRepo::new();
        repo.reader
            .expect_get_product_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_product(id, 1, "Desk", 100.0, 0.0))));
        repo.writer
            .expect_delete_product()
            .times(1)
            .returning(|_| Ok(()));

        let deleted = delete_product(&repo, 7).expect("expected success");
        assert_eq!(deleted.product_id, 7);
        assert_eq!(deleted.product_name, "Desk");
    }

    #[test]
    fn update_product_image_stores_the_file_and_reference() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path());

        let mut repo = MockProductRepo::new();
        repo.reader
            .expect_get_product_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_product(id, 1, "Desk", 100.0, 0.0))));
        repo.writer
            .expect_update_product_image()
            .times(1)
            .withf(|_, image_url| image_url.ends_with(".png"))
            .returning(|id, image_url| {
                let mut product = sample_product(id, 1, "Desk", 100.0, 0.0);
                product.image_url = image_url.to_string();
                Ok(product)
            });

        let updated = update_product_image(&repo, &storage, 7, Some("photo.png"), b"fake image")
            .expect("expected success");

        assert!(updated.image_url.ends_with(".png"));
        assert_ne!(updated.image_url, DEFAULT_PRODUCT_IMAGE);
    }
}
