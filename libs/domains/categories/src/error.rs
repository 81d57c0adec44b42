use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Store failure; the text is passed to the client as-is.
    #[error("{0}")]
    Database(String),
}

pub type CategoryResult<T> = Result<T, CategoryError>;

impl From<DbErr> for CategoryError {
    fn from(err: DbErr) -> Self {
        CategoryError::Database(err.to_string())
    }
}

impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::Validation(_) => AppError::BadRequest(err.to_string()),
            CategoryError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
