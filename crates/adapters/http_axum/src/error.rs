//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use ecosmart_domain::error::{EcoSmartError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`EcoSmartError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(EcoSmartError);

impl From<EcoSmartError> for ApiError {
    fn from(err: EcoSmartError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            EcoSmartError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            EcoSmartError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            EcoSmartError::Upstream(err) => {
                tracing::error!(error = %err, "upstream error");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream service unavailable".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
