//! Pagination query parameters.

use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};
use utoipa::IntoParams;

use crate::domain::entities::{PAGE_SIZE, Page};
use crate::error::AppError;

/// `?page=N` query parameter shared by listing endpoints.
///
/// Uses `serde_with` to parse the page number from the query string.
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-indexed page number (10 records per page). Omit to list everything.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,
}

impl PaginationParams {
    /// Converts the raw query value into a domain [`Page`].
    ///
    /// - absent → `Ok(None)`, no pagination applied
    /// - `0` → validation error
    pub fn to_page(&self) -> Result<Option<Page>, AppError> {
        match self.page {
            None => Ok(None),
            Some(number) => Page::new(number).map(Some).ok_or_else(|| {
                AppError::bad_request(
                    "Page must be greater than 0",
                    json!({ "page": number, "page_size": PAGE_SIZE }),
                )
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>) -> PaginationParams {
        PaginationParams { page }
    }

    #[test]
    fn test_absent_page_lists_everything() {
        assert_eq!(params(None).to_page().unwrap(), None);
    }

    #[test]
    fn test_page_2() {
        let page = params(Some(2)).to_page().unwrap().unwrap();
        assert_eq!(page.offset(), 10);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn test_page_zero_is_error() {
        let err = params(Some(0)).to_page().unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_parse_from_query_string_value() {
        let p: PaginationParams = serde_json::from_str(r#"{"page": "3"}"#).unwrap();
        assert_eq!(p.page, Some(3));
    }

    #[test]
    fn test_parse_missing_page() {
        let p: PaginationParams = serde_json::from_str("{}").unwrap();
        assert!(p.page.is_none());
    }

    #[test]
    fn test_parse_non_numeric_page_is_error() {
        assert!(serde_json::from_str::<PaginationParams>(r#"{"page": "abc"}"#).is_err());
    }
}
