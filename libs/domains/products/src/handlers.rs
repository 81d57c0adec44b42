use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use axum_helpers::{ErrorResponse, QueryParams};
use domain_categories::Category;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity::product;
use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductsFilter, ProductsResponse, Variant};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, get_product),
    components(schemas(Product, Variant, Category, ProductsResponse, ErrorResponse)),
    tags(
        (name = product::Model::TAG, description = "Product catalog")
    )
)]
pub struct ApiDoc;

/// `GET /catalog` and `GET /catalog/{code}`
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .route("/catalog", get(list_products))
        .route("/catalog/", get(missing_code))
        .route("/catalog/{code}", get(get_product))
        .with_state(Arc::new(service))
}

/// List products
///
/// Filters are optional and never rejected: an empty `category` or an
/// unusable `priceLessThan` is simply not applied.
#[utoipa::path(
    get,
    path = "/catalog",
    tag = product::Model::TAG,
    params(
        ("category" = Option<String>, Query, description = "Exact category code"),
        ("priceLessThan" = Option<String>, Query, description = "Inclusive upper price bound", example = "15.00"),
        ("offset" = Option<i64>, Query, description = "Rows to skip, default 0"),
        ("limit" = Option<i64>, Query, description = "Page size, default 10, clamped to 1..=100"),
    ),
    responses(
        (status = 200, description = "One page of products", body = ProductsResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    params: QueryParams,
) -> ProductResult<Json<ProductsResponse>> {
    let response = service
        .list_products(ProductsFilter::from_query(&params))
        .await?;
    Ok(Json(response))
}

/// Get a product by code
#[utoipa::path(
    get,
    path = "/catalog/{code}",
    tag = product::Model::TAG,
    params(
        ("code" = String, Path, description = "Product code", example = "PROD001")
    ),
    responses(
        (status = 200, description = "Product with category and variants", body = Product),
        (status = 400, description = "Empty code", body = ErrorResponse),
        (status = 404, description = "No product with this code", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(code): Path<String>,
) -> ProductResult<Json<Product>> {
    lookup(&service, &code).await.map(Json)
}

async fn missing_code<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Product>> {
    lookup(&service, "").await.map(Json)
}

/// Every lookup failure other than an empty code reads as not found.
async fn lookup<R: ProductRepository>(
    service: &ProductService<R>,
    code: &str,
) -> ProductResult<Product> {
    service
        .get_product_by_code(code)
        .await
        .map_err(|err| match err {
            ProductError::CodeRequired | ProductError::NotFound(_) => err,
            ProductError::Database(msg) => {
                tracing::warn!(code, error = %msg, "Product lookup failed");
                ProductError::NotFound(code.to_string())
            }
        })
}
