use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::advice::errors::AdviceError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AdviceError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, detail) = match &self {
            AdviceError::PromptEmpty => (StatusCode::BAD_REQUEST, "Prompt is required"),
            AdviceError::NotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Gemini API not configured properly.",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                detail: detail.to_string(),
            }),
        )
    }
}
