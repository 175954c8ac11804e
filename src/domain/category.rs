use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::pagination::{PageRequest, SortOrder, SortParseError};

/// Domain representation of a product category.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name, unique across all categories.
    pub name: String,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub name: String,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Patch data applied when updating an existing category.
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    /// Updated name for the category.
    pub name: String,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Fields a category listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySortBy {
    #[default]
    Id,
    Name,
}

impl FromStr for CategorySortBy {
    type Err = SortParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "id" | "categoryId" => Ok(Self::Id),
            "name" | "categoryName" => Ok(Self::Name),
            other => Err(SortParseError::Field(other.to_string())),
        }
    }
}

/// Query definition used to retrieve a sorted page of categories.
#[derive(Debug, Clone)]
pub struct CategoryListQuery {
    pub sort_by: CategorySortBy,
    pub sort_order: SortOrder,
    pub pagination: Option<PageRequest>,
}

impl Default for CategoryListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryListQuery {
    pub fn new() -> Self {
        Self {
            sort_by: CategorySortBy::default(),
            sort_order: SortOrder::default(),
            pagination: None,
        }
    }

    /// Sort the results by the given field and direction.
    pub fn sort(mut self, sort_by: CategorySortBy, sort_order: SortOrder) -> Self {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_accepts_dto_and_column_spellings() {
        assert_eq!("categoryId".parse::<CategorySortBy>(), Ok(CategorySortBy::Id));
        assert_eq!("name".parse::<CategorySortBy>(), Ok(CategorySortBy::Name));
    }

    #[test]
    fn sort_field_rejects_arbitrary_strings() {
        let err = "created_at; DROP TABLE".parse::<CategorySortBy>().unwrap_err();
        assert!(matches!(err, SortParseError::Field(_)));
    }
}
