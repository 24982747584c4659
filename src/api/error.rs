// SPDX-License-Identifier: PMPL-1.0-or-later
//! API error types rendered as failure envelopes.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tokio::task::JoinError;

use crate::api::envelope::Envelope;

/// API-level errors with HTTP status mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No file was uploaded.")]
    MissingFile,
    #[error("The uploaded HTML file is empty.")]
    EmptyFile,
    #[error("The uploaded file is not valid UTF-8 text.")]
    InvalidEncoding,
    #[error("The uploaded HTML file is too large.")]
    PayloadTooLarge,
    #[error("{0}")]
    BadRequest(String),
    #[error("Specified endpoint not found.")]
    NotFound,
    /// Any path outside `/api`
    #[error("The specified resource(s) cannot be found.")]
    ResourceNotFound,
    #[error("Method Not Allowed.")]
    MethodNotAllowed,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFile
            | ApiError::EmptyFile
            | ApiError::InvalidEncoding
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound | ApiError::ResourceNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                "Unable to perform the specified action at the moment.".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(Envelope::failure(status, message))).into_response()
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::BadRequest(err.body_text())
        }
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        ApiError::Internal(format!("analysis task failed: {err}"))
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 4096).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn empty_file_returns_400_envelope() {
        let response = ApiError::EmptyFile.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["statusCode"], 400);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "The uploaded HTML file is empty.");
        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn not_found_returns_404_envelope() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Specified endpoint not found.");
    }

    #[tokio::test]
    async fn internal_hides_details() {
        let response = ApiError::Internal("disk on fire".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Unable to perform the specified action at the moment.");
    }

    #[tokio::test]
    async fn panicked_task_maps_to_internal() {
        let err = tokio::task::spawn_blocking(|| panic!("rule blew up")).await.unwrap_err();
        let api_err = ApiError::from(err);
        assert!(matches!(api_err, ApiError::Internal(_)));

        let response = api_err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Unable to perform the specified action at the moment.");
    }

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(ApiError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::MissingFile.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::ResourceNotFound.status(), StatusCode::NOT_FOUND);
    }
}
