//! Shared Types
//!
//! Query shapes used across handlers

use serde::Deserialize;

use crate::utils::{AppError, AppResult};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_RECORD_PER_PAGE: u64 = 10;

/// Raw query of `GET /food`
///
/// Values are kept as strings: malformed `page` / `recordPerPage` fall back
/// to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodListQuery {
    pub page: Option<String>,
    #[serde(rename = "recordPerPage")]
    pub record_per_page: Option<String>,
    #[serde(rename = "startIndex")]
    pub start_index: Option<String>,
}

/// Resolved pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u64,
    pub record_per_page: u64,
    /// Offset of the first record returned
    pub start_index: u64,
}

fn positive_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v >= 1)
        .unwrap_or(default)
}

impl PaginationParams {
    /// Resolve a raw listing query.
    ///
    /// `startIndex`, when supplied, overrides the page-derived offset and must
    /// be a non-negative integer.
    pub fn from_query(query: &FoodListQuery) -> AppResult<Self> {
        let page = positive_or(query.page.as_deref(), DEFAULT_PAGE);
        let record_per_page = positive_or(query.record_per_page.as_deref(), DEFAULT_RECORD_PER_PAGE);

        let start_index = match query.start_index.as_deref() {
            None => (page - 1).saturating_mul(record_per_page),
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::invalid_field(
                    "startIndex",
                    format!("startIndex must be a non-negative integer, got '{raw}'"),
                )
            })?,
        };

        Ok(Self {
            page,
            record_per_page,
            start_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, rpp: Option<&str>, start: Option<&str>) -> FoodListQuery {
        FoodListQuery {
            page: page.map(str::to_string),
            record_per_page: rpp.map(str::to_string),
            start_index: start.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults() {
        let p = PaginationParams::from_query(&FoodListQuery::default()).unwrap();
        assert_eq!(p, PaginationParams { page: 1, record_per_page: 10, start_index: 0 });
    }

    #[test]
    fn test_page_derived_offset() {
        let p = PaginationParams::from_query(&query(Some("2"), Some("5"), None)).unwrap();
        assert_eq!(p.start_index, 5);
        assert_eq!(p.record_per_page, 5);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let p = PaginationParams::from_query(&query(Some("abc"), Some("0"), None)).unwrap();
        assert_eq!(p.page, 1);
        assert_eq!(p.record_per_page, 10);
        let p = PaginationParams::from_query(&query(Some("-3"), Some("x"), None)).unwrap();
        assert_eq!(p.start_index, 0);
    }

    #[test]
    fn test_start_index_overrides_page() {
        let p = PaginationParams::from_query(&query(Some("3"), Some("5"), Some("1"))).unwrap();
        assert_eq!(p.start_index, 1);
    }

    #[test]
    fn test_bad_start_index_rejected() {
        assert!(PaginationParams::from_query(&query(None, None, Some("-1"))).is_err());
        assert!(PaginationParams::from_query(&query(None, None, Some("abc"))).is_err());
        assert!(PaginationParams::from_query(&query(None, None, Some(""))).is_err());
    }
}
