use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::category::{Category, NewCategory, UpdateCategory};
use crate::dto::sanitize_inline_text;
use crate::pagination::Page;
use crate::services::{ServiceError, ServiceResult};

/// Maximum length allowed for a category name.
const NAME_MAX_LEN: u64 = 128;

/// Transport representation of a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub category_id: i32,
    pub category_name: String,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            category_id: value.id,
            category_name: value.name,
        }
    }
}

/// Request body for creating or updating a category.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub category_name: String,
}

impl CategoryPayload {
    fn sanitized_name(&self) -> ServiceResult<String> {
        self.validate().map_err(ServiceError::from)?;

        let name = sanitize_inline_text(&self.category_name);
        if name.is_empty() {
            return Err(ServiceError::Validation(
                "category name cannot be blank".to_string(),
            ));
        }

        Ok(name)
    }

    pub fn into_new_category(self) -> ServiceResult<NewCategory> {
        Ok(NewCategory::new(self.sanitized_name()?))
    }

    pub fn into_update_category(self) -> ServiceResult<UpdateCategory> {
        Ok(UpdateCategory::new(self.sanitized_name()?))
    }
}

/// Paginated response envelope for category listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub categories: Vec<CategoryDto>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
    pub last_page: bool,
}

impl From<Page<Category>> for CategoryResponse {
    fn from(page: Page<Category>) -> Self {
        let total_pages = page.total_pages();
        let last_page = page.is_last();
        Self {
            categories: page.items.into_iter().map(CategoryDto::from).collect(),
            page_number: page.page_number,
            page_size: page.page_size,
            total_elements: page.total_elements,
            total_pages,
            last_page,
        }
    }
}
