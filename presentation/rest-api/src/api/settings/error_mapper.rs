use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::settings::errors::SettingsError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SettingsError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            SettingsError::OrderHandleEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "settings.order_handle_empty",
            ),
            SettingsError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
