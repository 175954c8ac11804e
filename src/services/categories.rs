use crate::domain::category::{CategoryListQuery, CategorySortBy};
use crate::dto::ListParams;
use crate::dto::category::{CategoryDto, CategoryPayload, CategoryResponse};
use crate::pagination::Page;
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns one sorted page of categories.
///
/// An empty page, including a page number beyond the last, is reported as
/// `EmptyPage` rather than a valid empty result.
pub fn list_categories<R>(
    repo: &R,
    params: ListParams,
    default_page_size: usize,
) -> ServiceResult<CategoryResponse>
where
    R: CategoryReader + ?Sized,
{
    let sort_by = params.parse_sort_by::<CategorySortBy>()?;
    let sort_order = params.parse_sort_order()?;
    let page_request = params.page_request(default_page_size);

    let query = CategoryListQuery::new()
        .sort(sort_by, sort_order)
        .paginate(page_request);

    let (total, items) = repo.list_categories(query).map_err(ServiceError::from)?;

    let page = Page::new(items, page_request, total);
    if page.is_empty() {
        return Err(ServiceError::EmptyPage("no categories found".to_string()));
    }

    Ok(page.into())
}

/// Creates a new category, rejecting duplicate names.
pub fn create_category<R>(repo: &R, payload: CategoryPayload) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + CategoryWriter + ?Sized,
{
    let new_category = payload.into_new_category()?;

    // Pre-check for a friendlier message; the unique index on the name
    // column closes the remaining race window.
    if repo
        .get_category_by_name(&new_category.name)
        .map_err(ServiceError::from)?
        .is_some()
    {
        return Err(ServiceError::Conflict(format!(
            "category `{}` already exists",
            new_category.name
        )));
    }

    let created = repo
        .create_category(&new_category)
        .map_err(ServiceError::from)?;

    Ok(created.into())
}

/// Updates the name of an existing category.
pub fn update_category<R>(
    repo: &R,
    category_id: i32,
    payload: CategoryPayload,
) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter + ?Sized,
{
    let update = payload.into_update_category()?;

    let updated = repo
        .update_category(category_id, &update)
        .map_err(|err| match err {
            crate::repository::RepositoryError::NotFound => {
                ServiceError::NotFound(format!("category {category_id} not found"))
            }
            other => ServiceError::from(other),
        })?;

    Ok(updated.into())
}

/// Deletes a category and everything beneath it, returning its prior state.
pub fn delete_category<R>(repo: &R, category_id: i32) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + CategoryWriter + ?Sized,
{
    let category = repo
        .get_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(format!("category {category_id} not found")))?;

    repo.delete_category(category_id)
        .map_err(ServiceError::from)?;

    Ok(category.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::category::Category;
    use crate::pagination::SortOrder;
    use crate::repository::mock::{MockCategoryReader, MockCategoryWriter};

    struct MockCategoryRepo {
        reader: MockCategoryReader,
        writer: MockCategoryWriter,
    }

    impl MockCategoryRepo {
        fn new() -> Self {
            Self {
                reader: MockCategoryReader::new(),
                writer: MockCategoryWriter::new(),
            }
        }
    }

    impl CategoryReader for MockCategoryRepo {
        fn get_category_by_id(
            &self,
            category_id: i32,
        ) -> crate::repository::RepositoryResult<Option<Category>> {
            self.reader.get_category_by_id(category_id)
        }

        fn get_category_by_name(
            &self,
            name: &str,
        ) -> crate::repository::RepositoryResult<Option<Category>> {
            self.reader.get_category_by_name(name)
        }

        fn list_categories(
            &self,
            query: CategoryListQuery,
        ) -> crate::repository::RepositoryResult<(usize, Vec<Category>)> {
            self.reader.list_categories(query)
        }
    }

    impl CategoryWriter for MockCategoryRepo {
        fn create_category(
            &self,
            new_category: &crate::domain::category::NewCategory,
        ) -> crate::repository::RepositoryResult<Category> {
            self.writer.create_category(new_category)
        }

        fn update_category(
            &self,
            category_id: i32,
            updates: &crate::domain::category::UpdateCategory,
        ) -> crate::repository::RepositoryResult<Category> {
            self.writer.update_category(category_id, updates)
        }

        fn delete_category(&self, category_id: i32) -> crate::repository::RepositoryResult<()> {
            self.writer.delete_category(category_id)
        }
    }

    fn sample_category(id: i32, name: &str) -> Category {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        Category {
            id,
            name: name.to_string(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    #[test]
    fn list_categories_builds_the_page_envelope() {
        let mut repo = MockCategoryReader::new();

        repo.expect_list_categories()
            .times(1)
            .returning(|query| {
                assert_eq!(query.sort_by, CategorySortBy::Name);
                assert_eq!(query.sort_order, SortOrder::Desc);
                let page = query.pagination.expect("expected pagination");
                assert_eq!(page.page_number, 0);
                assert_eq!(page.page_size, 2);
                Ok((3, vec![sample_category(2, "Tools"), sample_category(1, "Toys")]))
            });

        let params = ListParams {
            page_size: Some(2),
            sort_by: Some("name".to_string()),
            sort_order: Some("desc".to_string()),
            ..Default::default()
        };

        let response = list_categories(&repo, params, 10).expect("expected success");

        assert_eq!(response.categories.len(), 2);
        assert_eq!(response.total_elements, 3);
        assert_eq!(response.total_pages, 2);
        assert!(!response.last_page);
    }

    #[test]
    fn list_categories_fails_on_an_empty_page() {
        let mut repo = MockCategoryReader::new();
        repo.expect_list_categories()
            .times(1)
            .returning(|_| Ok((5, Vec::new())));

        let params = ListParams {
            page_number: Some(99),
            ..Default::default()
        };

        let result = list_categories(&repo, params, 10);
        assert!(matches!(result, Err(ServiceError::EmptyPage(_))));
    }

    #[test]
    fn list_categories_rejects_malformed_sort_order() {
        let repo = MockCategoryReader::new();
        let params = ListParams {
            sort_order: Some("sideways".to_string()),
            ..Default::default()
        };

        let result = list_categories(&repo, params, 10);
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn create_category_rejects_duplicate_names() {
        let mut repo = MockCategoryRepo::new();
        repo.reader
            .expect_get_category_by_name()
            .times(1)
            .returning(|name| Ok(Some(sample_category(1, name))));

        let payload = CategoryPayload {
            category_name: "Electronics".to_string(),
        };

        let result = create_category(&repo, payload);
        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn create_category_persists_a_new_entry() {
        let mut repo = MockCategoryRepo::new();
        repo.reader
            .expect_get_category_by_name()
            .times(1)
            .returning(|_| Ok(None));
        repo.writer
            .expect_create_category()
            .times(1)
            .withf(|new_category| new_category.name == "Electronics")
            .returning(|_| Ok(sample_category(5, "Electronics")));

        let payload = CategoryPayload {
            category_name: " Electronics ".to_string(),
        };

        let created = create_category(&repo, payload).expect("expected success");
        assert_eq!(created.category_id, 5);
        assert_eq!(created.category_name, "Electronics");
    }

    #[test]
    fn update_category_maps_missing_ids_to_not_found() {
        let mut repo = MockCategoryWriter::new();
        repo.expect_update_category()
            .times(1)
            .returning(|_, _| Err(crate::repository::RepositoryError::NotFound));

        let payload = CategoryPayload {
            category_name: "Garden".to_string(),
        };

        let result = update_category(&repo, 42, payload);
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn delete_category_returns_the_prior_state() {
        let mut repo = MockCategoryRepo::new();
        repo.reader
            .expect_get_category_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_category(id, "Garden"))));
        repo.writer
            .expect_delete_category()
            .times(1)
            .returning(|_| Ok(()));

        let deleted = delete_category(&repo, 3).expect("expected success");
        assert_eq!(deleted.category_id, 3);
        assert_eq!(deleted.category_name, "Garden");
    }

    #[test]
    fn delete_category_fails_when_absent() {
        let mut repo = MockCategoryRepo::new();
        repo.reader
            .expect_get_category_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = delete_category(&repo, 3);
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}
