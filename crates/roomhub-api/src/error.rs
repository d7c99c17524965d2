//! Maps domain `AppError` to HTTP responses.
//!
//! `AppError` lives in `roomhub-core`, so responses are built from the
//! local [`ApiError`] wrapper. Handlers return [`ApiResult`] and `?`
//! converts any `AppError` on the way out.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use roomhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::BookingNotFound | ErrorKind::RoomNotFound => StatusCode::NOT_FOUND,
        ErrorKind::AlreadyBooked
        | ErrorKind::NotEligible
        | ErrorKind::RoomFull
        | ErrorKind::NotPermitted => StatusCode::FORBIDDEN,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Infrastructure | ErrorKind::Configuration | ErrorKind::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Result type returned by handlers and extractors.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        let message = if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, source = ?err.source, "Request failed");
            "Internal server error".to_string()
        } else {
            err.message
        };

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::BookingNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::RoomNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::RoomFull), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorKind::NotPermitted), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorKind::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_for(ErrorKind::Infrastructure),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    async fn body_of(response: Response) -> ApiErrorResponse {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("error body is json")
    }

    #[tokio::test]
    async fn test_infrastructure_detail_is_hidden() {
        let response =
            ApiError::from(AppError::infrastructure("connection refused on 10.0.0.3")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body.error, "INFRASTRUCTURE");
        assert_eq!(body.message, "Internal server error");
    }

    #[tokio::test]
    async fn test_denial_keeps_kind_and_message() {
        let response = ApiError::from(AppError::room_full("Room 4 is at capacity (2)")).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = body_of(response).await;
        assert_eq!(body.error, "ROOM_FULL");
        assert_eq!(body.message, "Room 4 is at capacity (2)");
    }

    #[test]
    fn test_question_mark_wraps_app_error() {
        fn lookup() -> ApiResult<()> {
            let outcome: Result<(), AppError> =
                Err(AppError::not_permitted("Booking 1 does not belong to user 2"));
            outcome?;
            Ok(())
        }
        let err = lookup().unwrap_err();
        assert_eq!(err.0.kind, ErrorKind::NotPermitted);
    }
}
