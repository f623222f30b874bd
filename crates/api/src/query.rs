//! Shared query parameter types for API handlers.

use serde::Deserialize;
use utoipa::IntoParams;

/// Generic pagination parameters (`?skip=&take=`).
///
/// Both are optional; absent values fall back to a zero offset and a page
/// of twenty. Negative values are clamped in the repository layer.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Number of records to skip from the start of the collection.
    pub skip: Option<i64>,
    /// Maximum number of records to return.
    pub take: Option<i64>,
}

impl PaginationParams {
    pub const DEFAULT_TAKE: i64 = 20;

    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(0)
    }

    pub fn take(&self) -> i64 {
        self.take.unwrap_or(Self::DEFAULT_TAKE)
    }
}
