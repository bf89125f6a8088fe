//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use catalog_domain::error::CatalogError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`CatalogError`] and extractor rejections to an HTTP response
/// with the appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    /// An error raised by the domain or application layer.
    Catalog(CatalogError),
    /// The request could not be decoded before reaching a handler.
    Rejected(StatusCode, String),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<catalog_domain::error::ValidationError> for ApiError {
    fn from(err: catalog_domain::error::ValidationError) -> Self {
        Self::Catalog(err.into())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Catalog(CatalogError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Catalog(CatalogError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Catalog(CatalogError::Conflict(err)) => (StatusCode::CONFLICT, err.to_string()),
            Self::Catalog(CatalogError::Storage(err)) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Rejected(status, message) => (status, message),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
