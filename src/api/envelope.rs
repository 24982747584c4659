// SPDX-License-Identifier: PMPL-1.0-or-later
//! JSON response envelope shared by every endpoint:
//! `{statusCode, success, message, data}`.

use axum::http::StatusCode;
use serde::Serialize;

/// Message on successful responses
pub const SUCCESS_MESSAGE: &str = "Ok";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub status_code: u16,
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// 200 envelope around `data`
    pub fn success(data: T) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }
}

impl Envelope<Vec<serde_json::Value>> {
    /// Failure envelope with an empty `data` array
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            success: false,
            message: message.into(),
            data: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let value = serde_json::to_value(Envelope::success(json!({"status": "ok"}))).unwrap();
        assert_eq!(
            value,
            json!({"statusCode": 200, "success": true, "message": "Ok", "data": {"status": "ok"}})
        );
    }

    #[test]
    fn test_failure_shape() {
        let value =
            serde_json::to_value(Envelope::failure(StatusCode::BAD_REQUEST, "nope")).unwrap();
        assert_eq!(
            value,
            json!({"statusCode": 400, "success": false, "message": "nope", "data": []})
        );
    }
}
