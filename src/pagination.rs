use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page size applied when a listing request does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Error raised when a sort parameter cannot be interpreted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortParseError {
    #[error("unrecognized sort order `{0}`, expected `asc` or `desc`")]
    Order(String),
    #[error("unrecognized sort field `{0}`")]
    Field(String),
}

/// Direction applied to a sorted listing.
///
/// Parsing is strict: anything other than `asc`/`desc` (case-insensitive) is
/// rejected instead of silently falling back to descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Asc
    }
}

impl FromStr for SortOrder {
    type Err = SortParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(SortParseError::Order(value.to_string())),
        }
    }
}

/// Zero-based page request forwarded to the repository layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number,
            page_size: page_size.max(1),
        }
    }

    /// Row offset for the page, saturating instead of wrapping so an absurd
    /// page number stays far past the end rather than landing back on page 0.
    pub fn offset(&self) -> i64 {
        let offset = self.page_number.saturating_mul(self.page_size);
        i64::try_from(offset).unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        i64::try_from(self.page_size).unwrap_or(i64::MAX)
    }
}

/// One bounded, sorted slice of a larger result set plus paging metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_elements: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_elements: usize) -> Self {
        Self {
            items,
            page_number: request.page_number,
            page_size: request.page_size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_elements.div_ceil(self.page_size)
    }

    pub fn is_last(&self) -> bool {
        self.page_number + 1 >= self.total_pages()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Converts the page contents while keeping the metadata intact.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
        }
    }
}
