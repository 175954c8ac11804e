use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::DEFAULT_PRODUCT_IMAGE;
use crate::pagination::{PageRequest, SortOrder, SortParseError};

/// Special price derived from the base price and a percentage discount.
///
/// This is the only place the discount arithmetic lives; both create and
/// update paths go through it so the stored value can never drift from the
/// base price.
pub fn special_price(price: f64, discount: f64) -> f64 {
    price - (discount / 100.0) * price
}

/// Domain representation of a product offered under a category.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Category the product belongs to.
    pub category_id: i32,
    /// User who listed the product, when known.
    pub seller_id: Option<i32>,
    /// Human-readable name, unique within its category.
    pub name: String,
    /// Longer description shown to buyers.
    pub description: String,
    /// Reference to the stored product image.
    pub image_url: String,
    /// Units currently in stock.
    pub quantity: i32,
    /// Base price before any discount.
    pub price: f64,
    /// Percentage discount between 0 and 100.
    pub discount: f64,
    /// Price after applying the discount; always derived, never set directly.
    pub special_price: f64,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub category_id: i32,
    pub seller_id: Option<i32>,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub quantity: i32,
    pub price: f64,
    pub discount: f64,
    pub special_price: f64,
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload, deriving the special price and assigning
    /// the placeholder image.
    pub fn new(
        category_id: i32,
        name: impl Into<String>,
        description: impl Into<String>,
        quantity: i32,
        price: f64,
        discount: f64,
    ) -> Self {
        Self {
            category_id,
            seller_id: None,
            name: name.into(),
            description: description.into(),
            image_url: DEFAULT_PRODUCT_IMAGE.to_string(),
            quantity,
            price,
            discount,
            special_price: special_price(price, discount),
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Attach the listing user to the product payload.
    pub fn with_seller(mut self, seller_id: i32) -> Self {
        self.seller_id = Some(seller_id);
        self
    }
}

/// Patch data applied when updating an existing product.
///
/// Every field is overwritten; the special price is re-derived from the
/// incoming price and discount.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
    pub discount: f64,
    pub special_price: f64,
    pub updated_at: NaiveDateTime,
}

impl UpdateProduct {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        quantity: i32,
        price: f64,
        discount: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            quantity,
            price,
            discount,
            special_price: special_price(price, discount),
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Fields a product listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSortBy {
    #[default]
    Id,
    Name,
    Price,
    Quantity,
    Discount,
    SpecialPrice,
}

impl FromStr for ProductSortBy {
    type Err = SortParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "id" | "productId" => Ok(Self::Id),
            "name" | "productName" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "quantity" => Ok(Self::Quantity),
            "discount" => Ok(Self::Discount),
            "specialPrice" | "special_price" => Ok(Self::SpecialPrice),
            other => Err(SortParseError::Field(other.to_string())),
        }
    }
}

/// Query definition used to retrieve a filtered, sorted page of products.
#[derive(Debug, Clone)]
pub struct ProductListQuery {
    /// Restrict the results to one category.
    pub category_id: Option<i32>,
    /// Case-insensitive substring match applied to the product name.
    pub keyword: Option<String>,
    pub sort_by: ProductSortBy,
    pub sort_order: SortOrder,
    pub pagination: Option<PageRequest>,
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductListQuery {
    pub fn new() -> Self {
        Self {
            category_id: None,
            keyword: None,
            sort_by: ProductSortBy::default(),
            sort_order: SortOrder::default(),
            pagination: None,
        }
    }

    /// Restrict the results to products of one category.
    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Filter the results by a name keyword.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Sort the results by the given field and direction.
    pub fn sort(mut self, sort_by: ProductSortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    /// Apply pagination to the query.
    pub fn paginate(mut self, page: PageRequest) -> Self {
        self.pagination = Some(page);
        self
    }
}
