use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use melodex_audiodb::AudioDbError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error surface of the view handlers. Transport failures map onto
/// gateway status codes; a singular lookup that matched nothing becomes
/// a 404 here (the domain layer reports it as an absent result, not an
/// error).
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Upstream(AudioDbError),
}

impl From<AudioDbError> for ApiError {
    fn from(err: AudioDbError) -> Self {
        ApiError::Upstream(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, what),
            ApiError::Upstream(AudioDbError::Timeout) => (
                StatusCode::GATEWAY_TIMEOUT,
                "upstream request timed out".to_string(),
            ),
            ApiError::Upstream(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_maps_to_gateway_timeout() {
        let response = ApiError::Upstream(AudioDbError::Timeout).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_http_status_maps_to_bad_gateway() {
        let response = ApiError::Upstream(AudioDbError::HttpStatus { status: 500 }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::NotFound("no artist with id 7".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
