use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

/// JSON error payload shared by both HTTP services.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: &'static str, detail: Option<String>) -> Self {
        Self { status, message, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = self.message, detail = ?self.detail, "request failed");
        }
        let body = serde_json::json!({
            "error": self.message,
            "detail": self.detail,
        });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_status_code() {
        let resp = JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", None).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_gateway_for_upstream_failures() {
        let resp = JsonApiError::new(StatusCode::BAD_GATEWAY, "Detail Fetch Failed", Some("connect refused".into()))
            .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
