use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::FetchError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for FetchError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            FetchError::Status(404) => (StatusCode::NOT_FOUND, "NotFound"),
            _ => (StatusCode::BAD_GATEWAY, "UpstreamError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
