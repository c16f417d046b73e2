use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body for hard failures, `{"detail": "..."}`.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub detail: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
