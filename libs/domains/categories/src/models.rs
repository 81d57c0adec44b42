use axum_helpers::Pagination;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: Uuid,
    /// Unique, caller-chosen code such as `SHOES`
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// A new category with a fresh id and both timestamps set to now.
    pub fn new(input: CreateCategory) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            code: input.code,
            name: input.name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body of `POST /categories`. Missing or null fields deserialize as empty and fail validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "code is required"))]
    #[schema(example = "ELECTRONICS")]
    pub code: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Electronics")]
    pub name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Page window for listing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoriesFilter {
    pub offset: u64,
    pub limit: u64,
}

impl From<Pagination> for CategoriesFilter {
    fn from(page: Pagination) -> Self {
        Self {
            offset: page.offset,
            limit: page.limit,
        }
    }
}

/// Body of `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
    /// Number of categories before pagination
    pub total: u64,
}
