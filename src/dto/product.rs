use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::dto::sanitize_inline_text;
use crate::pagination::Page;
use crate::services::{ServiceError, ServiceResult};

/// Maximum length allowed for a product name.
const NAME_MAX_LEN: u64 = 128;
/// Maximum length allowed for a product description.
const DESCRIPTION_MAX_LEN: u64 = 2048;

/// Transport representation of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub product_id: i32,
    pub product_name: String,
    pub image_url: String,
    pub product_description: String,
    pub quantity: i32,
    pub price: f64,
    pub discount: f64,
    pub special_price: f64,
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            product_id: value.id,
            product_name: value.name,
            image_url: value.image_url,
            product_description: value.description,
            quantity: value.quantity,
            price: value.price,
            discount: value.discount,
            special_price: value.special_price,
        }
    }
}

/// Request body for creating or updating a product.
///
/// The special price never appears here; it is always derived from `price`
/// and `discount`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub product_name: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub product_description: String,
    #[validate(range(min = 0))]
    pub quantity: i32,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub discount: f64,
}

impl ProductPayload {
    fn sanitized(self) -> ServiceResult<Self> {
        self.validate().map_err(ServiceError::from)?;

        let name = sanitize_inline_text(&self.product_name);
        if name.is_empty() {
            return Err(ServiceError::Validation(
                "product name cannot be blank".to_string(),
            ));
        }

        Ok(Self {
            product_name: name,
            product_description: sanitize_inline_text(&self.product_description),
            ..self
        })
    }

    pub fn into_new_product(self, category_id: i32) -> ServiceResult<NewProduct> {
        let payload = self.sanitized()?;
        Ok(NewProduct::new(
            category_id,
            payload.product_name,
            payload.product_description,
            payload.quantity,
            payload.price,
            payload.discount,
        ))
    }

    pub fn into_update_product(self) -> ServiceResult<UpdateProduct> {
        let payload = self.sanitized()?;
        Ok(UpdateProduct::new(
            payload.product_name,
            payload.product_description,
            payload.quantity,
            payload.price,
            payload.discount,
        ))
    }
}

/// Paginated response envelope for product listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub products: Vec<ProductDto>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
    pub last_page: bool,
}

impl From<Page<Product>> for ProductResponse {
    fn from(page: Page<Product>) -> Self {
        let total_pages = page.total_pages();
        let last_page = page.is_last();
        Self {
            products: page.items.into_iter().map(ProductDto::from).collect(),
            page_number: page.page_number,
            page_size: page.page_size,
            total_elements: page.total_elements,
            total_pages,
            last_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, price: f64, discount: f64) -> ProductPayload {
        ProductPayload {
            product_name: name.to_string(),
            product_description: "desc".to_string(),
            quantity: 3,
            price,
            discount,
        }
    }

    #[test]
    fn new_product_carries_the_derived_special_price() {
        let new_product = payload("Monitor", 300.0, 10.0)
            .into_new_product(7)
            .expect("expected success");

        assert_eq!(new_product.category_id, 7);
        assert_eq!(new_product.special_price, 270.0);
    }

    #[test]
    fn discount_above_one_hundred_percent_is_rejected() {
        let result = payload("Monitor", 300.0, 101.0).into_new_product(7);
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn negative_price_is_rejected() {
        let result = payload("Monitor", -1.0, 0.0).into_update_product();
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
