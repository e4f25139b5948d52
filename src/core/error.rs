//! 核心错误处理模块
//!
//! 所有经由统一格式化器的失败都在这里变成响应:
//! `{ "error": { "message": ..., "status": ... } }`。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, warn};

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),
    #[error("API key is missing")]
    Unauthorized,
    #[error("Invalid API key")]
    Forbidden,
    #[error("{0}")]
    NotFound(String),
    /// 内部诊断信息只写日志，不返回给调用方
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::Unauthorized => StatusCode::UNAUTHORIZED,
            CoreError::Forbidden => StatusCode::FORBIDDEN,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            CoreError::Internal(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }
}

/// 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub status: u16,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("{} - {}", status, self);
        } else {
            warn!("{} - {}", status, self);
        }

        let error_response = ErrorResponse {
            error: ErrorDetail {
                message: self.public_message(),
                status: status.as_u16(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: CoreError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn maps_each_variant_to_its_status() {
        assert_eq!(CoreError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(CoreError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(CoreError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(CoreError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            CoreError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn formats_body_with_message_and_status() {
        let (status, body) = render(CoreError::NotFound("Product not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Product not found");
        assert_eq!(body["error"]["status"], 404);
    }

    #[tokio::test]
    async fn hides_internal_diagnostics() {
        let (status, body) = render(CoreError::Internal("lock poisoned at store.rs".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Internal Server Error");
        assert_eq!(body["error"]["status"], 500);
    }
}
