//! Custom extractors for Axum handlers.

pub mod pagination;
pub mod query_params;
pub mod validated_json;

pub use pagination::Pagination;
pub use query_params::QueryParams;
pub use validated_json::ValidatedJson;
