//! 核心中间件模块

use std::{sync::Arc, time::Instant};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;
use tracing::info;

use super::error::CoreError;

/// 调用方传递 API key 的请求头
pub const API_KEY_HEADER: &str = "x-api-key";

/// 已配置的共享密钥
#[derive(Clone)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    fn matches(&self, provided: &[u8]) -> bool {
        self.0.as_bytes().ct_eq(provided).into()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    info!("[{}] {} {}", chrono::Utc::now().to_rfc3339(), method, path);

    let response = next.run(req).await;

    info!(
        "{} {} - {} - {}ms",
        method,
        path,
        response.status(),
        start.elapsed().as_millis()
    );

    response
}

/// 认证中间件，只挂在修改数据的路由上
pub async fn require_api_key(
    State(api_key): State<ApiKey>,
    req: Request,
    next: Next,
) -> Result<Response, CoreError> {
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .ok_or(CoreError::Unauthorized)?;

    if !api_key.matches(provided.as_bytes()) {
        return Err(CoreError::Forbidden);
    }

    Ok(next.run(req).await)
}
