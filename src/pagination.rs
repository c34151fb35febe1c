//! This module defines the common functionality for paging data.

use serde::Deserialize;

/// The number of transactions returned per page when the request does not say
/// otherwise.
pub const DEFAULT_PAGE_LIMIT: i64 = 5;

/// The raw `limit`/`offset` query parameters of a list request.
///
/// Both parameters are kept as strings so that a value that does not parse as
/// a number falls back to the default instead of rejecting the request.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageParams {
    /// The maximum number of rows to return. No upper bound is enforced, a
    /// caller may request the entire history in one call.
    pub limit: Option<String>,
    /// The number of rows to skip before the first returned row.
    pub offset: Option<String>,
}

impl PageParams {
    /// Resolve the raw parameters into a concrete `(limit, offset)` pair.
    ///
    /// Absent, non-numeric, or negative values fall back to the defaults
    /// (limit 5, offset 0).
    pub fn resolve(&self) -> (i64, i64) {
        (
            parse_non_negative(self.limit.as_deref()).unwrap_or(DEFAULT_PAGE_LIMIT),
            parse_non_negative(self.offset.as_deref()).unwrap_or(0),
        )
    }
}

fn parse_non_negative(value: Option<&str>) -> Option<i64> {
    value
        .and_then(|text| text.parse::<i64>().ok())
        .filter(|&number| number >= 0)
}
