use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ValidationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ValidationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("ValidationError", self.to_string())),
        )
    }
}
