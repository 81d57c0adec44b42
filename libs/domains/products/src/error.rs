use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product code is required")]
    CodeRequired,

    #[error("Product not found: {0}")]
    NotFound(String),

    /// Store failure; the text is passed to the client as-is.
    #[error("{0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::CodeRequired => AppError::BadRequest(err.to_string()),
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_hides_the_code() {
        let app: AppError = ProductError::NotFound("PROD999".into()).into();
        assert_eq!(app.status(), StatusCode::NOT_FOUND);
        assert_eq!(app.to_string(), "Not Found: Product not found");
    }

    #[test]
    fn test_code_required_is_bad_request() {
        let app: AppError = ProductError::CodeRequired.into();
        assert_eq!(app.status(), StatusCode::BAD_REQUEST);
        assert_eq!(app.to_string(), "Bad Request: Product code is required");
    }

    #[test]
    fn test_db_error_is_internal_with_raw_text() {
        let app: AppError = ProductError::from(DbErr::Custom("boom".into())).into();
        assert_eq!(app.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(app.to_string(), "Internal Server Error: Custom Error: boom");
    }
}
