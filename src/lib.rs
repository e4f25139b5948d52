//! # 产品目录服务
//!
//! 基于 Axum 的内存产品目录 REST API，包括：
//! - 列表查询（分类过滤、名称搜索、分页）
//! - 按 id 获取、创建、更新、删除
//! - 请求日志、API key 认证、请求体校验
//! - 统一错误格式化

pub mod app;
pub mod core;
pub mod infrastructure;

use std::any::Any;

use axum::{
    http::Uri,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
};

use crate::app::product::{self, handler::AppState};
use crate::core::{error::CoreError, middleware::request_logging_middleware};

pub const WELCOME_TEXT: &str =
    "Welcome to the Product API! Go to /api/products to see all products.";

/// 组装完整的路由和中间件
///
/// 请求依次经过：日志 → CORS → panic 捕获 → 路由（修改类路由再经过认证和校验）。
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .merge(product::routes(&state))
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .with_state(state)
}

async fn welcome() -> &'static str {
    WELCOME_TEXT
}

async fn route_not_found(uri: Uri) -> CoreError {
    CoreError::NotFound(format!("Route {} not found", uri.path()))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    CoreError::Internal(detail).into_response()
}
