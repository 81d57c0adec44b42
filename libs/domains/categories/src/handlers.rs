use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use axum_helpers::{ErrorResponse, Pagination, QueryParams, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::CategoryResult;
use crate::models::{CategoriesFilter, CategoriesResponse, Category, CreateCategory};
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

/// OpenAPI documentation for the Categories API
#[derive(OpenApi)]
#[openapi(
    paths(list_categories, create_category),
    components(schemas(Category, CreateCategory, CategoriesResponse, ErrorResponse)),
    tags(
        (name = entity::Model::TAG, description = "Product categories")
    )
)]
pub struct ApiDoc;

/// `GET /categories` and `POST /categories`
pub fn router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .with_state(Arc::new(service))
}

/// List categories
///
/// Unparseable paging values fall back to their defaults instead of failing.
#[utoipa::path(
    get,
    path = "/categories",
    tag = entity::Model::TAG,
    params(
        ("offset" = Option<i64>, Query, description = "Rows to skip, default 0"),
        ("limit" = Option<i64>, Query, description = "Page size, default 10, clamped to 1..=100"),
    ),
    responses(
        (status = 200, description = "One page of categories", body = CategoriesResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn list_categories<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    params: QueryParams,
) -> CategoryResult<Json<CategoriesResponse>> {
    let filter = CategoriesFilter::from(Pagination::from_query(&params));
    let response = service.list_categories(filter).await?;
    Ok(Json(response))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    tag = entity::Model::TAG,
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Malformed body or missing field", body = ErrorResponse),
        (status = 500, description = "Store failure, e.g. duplicate code", body = ErrorResponse)
    )
)]
async fn create_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCategory>,
) -> CategoryResult<(StatusCode, Json<Category>)> {
    let category = service.create_category(input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
