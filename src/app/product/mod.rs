//! 产品目录：模型、存储、查询、校验和处理器

pub mod handler;
pub mod model;
pub mod query;
pub mod store;
pub mod validation;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::core::middleware::require_api_key;
use handler::AppState;

/// 读接口公开；创建、更新、删除需要 API key
///
/// 认证层挂在各自的方法路由上而不是整个路径上，未注册的方法直接得到 405。
pub fn routes(state: &AppState) -> Router<AppState> {
    let auth = middleware::from_fn_with_state(state.api_key.clone(), require_api_key);

    Router::new()
        .route(
            "/api/products",
            get(handler::list_products)
                .merge(post(handler::create_product).route_layer(auth.clone())),
        )
        .route(
            "/api/products/:id",
            get(handler::get_product).merge(
                put(handler::update_product)
                    .delete(handler::delete_product)
                    .route_layer(auth),
            ),
        )
}
