//! # Axum Helpers
//!
//! Shared plumbing for the catalog HTTP service.
//!
//! - **[`server`]**: router assembly with OpenAPI docs, health probes, graceful shutdown
//! - **[`http`]**: CORS and security-header middleware
//! - **[`errors`]**: `AppError` and the `{"error": ...}` response body
//! - **[`extractors`]**: lenient query params, pagination, validated JSON
//!
//! ```ignore
//! use axum_helpers::server::{create_router, health_router};
//! use core_config::app_info;
//!
//! let app = create_router::<ApiDoc>(routes)?.merge(health_router(app_info!()));
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};

pub use http::{cors_layer_from_env, create_cors_layer, create_permissive_cors_layer, security_headers};

pub use errors::{AppError, ErrorResponse};

pub use extractors::{Pagination, QueryParams, ValidatedJson};
