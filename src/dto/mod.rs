use std::str::FromStr;

use serde::Deserialize;

use crate::pagination::{PageRequest, SortOrder, SortParseError};

pub mod address;
pub mod cart;
pub mod category;
pub mod product;
pub mod user;

/// Listing parameters shared by every paginated endpoint.
///
/// Parameter names follow the public API contract (`PageNumber`, `PageSize`,
/// `sortBy`, `sortOrder`); all are optional and fall back to the configured
/// defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListParams {
    #[serde(rename = "PageNumber")]
    pub page_number: Option<usize>,
    #[serde(rename = "PageSize")]
    pub page_size: Option<usize>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

impl ListParams {
    /// Resolve the requested page, defaulting to page 0 of the configured size.
    pub fn page_request(&self, default_page_size: usize) -> PageRequest {
        PageRequest::new(
            self.page_number.unwrap_or(0),
            self.page_size.unwrap_or(default_page_size),
        )
    }

    /// Parse the sort field into the entity's allowed enumeration.
    pub fn parse_sort_by<F>(&self) -> Result<F, SortParseError>
    where
        F: FromStr<Err = SortParseError> + Default,
    {
        match self.sort_by.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(F::default()),
        }
    }

    /// Parse the sort order, rejecting anything other than `asc`/`desc`.
    pub fn parse_sort_order(&self) -> Result<SortOrder, SortParseError> {
        match self.sort_order.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(SortOrder::default()),
        }
    }
}

/// Collapses runs of whitespace and strips control characters from
/// user-entered single-line text.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::CategorySortBy;

    #[test]
    fn list_params_default_to_first_page_and_ascending_id() {
        let params = ListParams::default();

        let page = params.page_request(10);
        assert_eq!(page.page_number, 0);
        assert_eq!(page.page_size, 10);
        assert_eq!(params.parse_sort_by::<CategorySortBy>(), Ok(CategorySortBy::Id));
        assert_eq!(params.parse_sort_order(), Ok(SortOrder::Asc));
    }

    #[test]
    fn list_params_reject_malformed_sort_order() {
        let params = ListParams {
            sort_order: Some("descending".to_string()),
            ..Default::default()
        };

        assert!(params.parse_sort_order().is_err());
    }

    #[test]
    fn sanitize_collapses_inner_whitespace() {
        assert_eq!(sanitize_inline_text("  Fresh \t Produce "), "Fresh Produce");
    }
}
