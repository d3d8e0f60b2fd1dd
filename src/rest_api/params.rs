//! # List Query Parameters
//!
//! Parses the query string of `GET /api/clients` into a structured request.

use std::collections::HashMap;

use super::errors::{ApiError, ApiResult};

/// Parsed list parameters.
///
/// Name filtering takes precedence over paging when both are supplied.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Exact-match name filter
    pub name: Option<String>,

    /// Page request; `page` and `per_page` come and go together
    pub page: Option<Page>,
}

/// A 1-indexed page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub per_page: usize,
}

impl ListParams {
    /// Parse query parameters from a map
    pub fn parse(params: &HashMap<String, String>) -> ApiResult<Self> {
        let name = params.get("name").cloned();

        let page = match (params.get("page"), params.get("per_page")) {
            (None, None) => None,
            (Some(number), Some(per_page)) => Some(Page {
                number: parse_positive("page", number)?,
                per_page: parse_positive("per_page", per_page)?,
            }),
            _ => {
                return Err(ApiError::InvalidQueryParam(
                    "page and per_page must be supplied together".to_string(),
                ))
            }
        };

        Ok(Self { name, page })
    }
}

/// Parse a positive (>= 1) integer parameter.
///
/// There is no upper bound: an oversized per_page is passed through to the
/// store as given.
fn parse_positive(key: &str, value: &str) -> ApiResult<usize> {
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ApiError::InvalidQueryParam(format!(
            "{} must be a positive integer, got: {}",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_empty_query() {
        let parsed = ListParams::parse(&params(&[])).unwrap();
        assert_eq!(parsed, ListParams::default());
    }

    #[test]
    fn test_parse_name_filter() {
        let parsed = ListParams::parse(&params(&[("name", "Ace")])).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("Ace"));
        assert_eq!(parsed.page, None);
    }

    #[test]
    fn test_parse_page() {
        let parsed = ListParams::parse(&params(&[("page", "2"), ("per_page", "20")])).unwrap();
        assert_eq!(
            parsed.page,
            Some(Page {
                number: 2,
                per_page: 20
            })
        );
    }

    #[test]
    fn test_page_requires_both_parameters() {
        assert!(ListParams::parse(&params(&[("page", "2")])).is_err());
        assert!(ListParams::parse(&params(&[("per_page", "20")])).is_err());
    }

    #[test]
    fn test_page_must_be_positive() {
        assert!(ListParams::parse(&params(&[("page", "0"), ("per_page", "20")])).is_err());
        assert!(ListParams::parse(&params(&[("page", "1"), ("per_page", "0")])).is_err());
        assert!(ListParams::parse(&params(&[("page", "-1"), ("per_page", "20")])).is_err());
        assert!(ListParams::parse(&params(&[("page", "abc"), ("per_page", "20")])).is_err());
    }

    #[test]
    fn test_per_page_has_no_upper_bound() {
        let parsed =
            ListParams::parse(&params(&[("page", "1"), ("per_page", "18446744073709551615")]))
                .unwrap();
        assert_eq!(parsed.page.unwrap().per_page, usize::MAX);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let parsed = ListParams::parse(&params(&[("sort", "name.asc")])).unwrap();
        assert_eq!(parsed, ListParams::default());
    }
}
