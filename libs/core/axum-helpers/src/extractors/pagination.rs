use super::QueryParams;

/// Offset/limit window for listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Pagination {
    pub const DEFAULT_LIMIT: u64 = 10;
    pub const MAX_LIMIT: u64 = 100;

    /// Normalizes raw values: a missing or unparseable limit becomes
    /// [`Self::DEFAULT_LIMIT`], then the limit is clamped to
    /// `1..=MAX_LIMIT`. A missing or negative offset becomes 0.
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        let limit = limit
            .unwrap_or(Self::DEFAULT_LIMIT as i64)
            .clamp(1, Self::MAX_LIMIT as i64) as u64;
        let offset = offset.unwrap_or(0).max(0) as u64;
        Self { offset, limit }
    }

    /// Reads `offset` and `limit` from the query string.
    pub fn from_query(params: &QueryParams) -> Self {
        Self::new(params.parse("offset"), params.parse("limit"))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}
