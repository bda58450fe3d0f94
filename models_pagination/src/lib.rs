#![deny(missing_docs)]
//! Shared models for paginating list endpoints with a limit and an offset.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The page size applied when the caller does not provide one
pub const DEFAULT_LIMIT: i64 = 25;
/// The largest page size a caller may request
pub const MAX_LIMIT: i64 = 100;

/// Query parameters accepted by paginated list endpoints
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, IntoParams)]
pub struct PageParams {
    /// Maximum number of items to return, capped at [MAX_LIMIT]
    pub limit: Option<i64>,
    /// Number of items to skip from the start of the result set
    pub offset: Option<i64>,
}

impl PageParams {
    /// The effective limit: defaulted, floored at 1 and capped at [MAX_LIMIT]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// The effective offset: defaulted to 0 and never negative
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// A single page of items together with the size of the full result set
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Paginated<T> {
    /// The items on this page
    #[schema(inline)]
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total_count: i64,
    /// The limit this page was produced with
    pub limit: i64,
    /// The offset this page was produced with
    pub offset: i64,
}

impl<T> Paginated<T> {
    /// Assembles a page from the fetched items, the total count and the
    /// parameters the query ran with
    pub fn new(items: Vec<T>, total_count: i64, params: &PageParams) -> Self {
        Self {
            items,
            total_count,
            limit: params.limit(),
            offset: params.offset(),
        }
    }
}
