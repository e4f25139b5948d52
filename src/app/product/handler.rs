//! 产品处理器

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;

use super::{
    model::{Product, ProductQuery},
    store::ProductStore,
    validation::ValidatedProduct,
};
use crate::core::{
    error::CoreError,
    middleware::ApiKey,
    response::{ErrorBody, MessageBody, PageResponse},
};

const NOT_FOUND: &str = "Product not found";

#[derive(Clone)]
pub struct AppState {
    pub store: ProductStore,
    pub api_key: ApiKey,
}

impl AppState {
    pub fn new(store: ProductStore, api_key: ApiKey) -> Self {
        Self { store, api_key }
    }
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<PageResponse<Product>> {
    // 键值对列表不会被拒绝，列表接口没有失败路径
    let query = ProductQuery::from_pairs(pairs);
    let page = state.store.query(&query).await;
    Json(PageResponse::success(
        page.total,
        page.page,
        page.limit,
        page.products,
    ))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, (StatusCode, Json<MessageBody>)> {
    match state.store.get(&id).await {
        Some(product) => Ok(Json(product)),
        None => Err((StatusCode::NOT_FOUND, Json(MessageBody::new(NOT_FOUND)))),
    }
}

pub async fn create_product(
    State(state): State<AppState>,
    ValidatedProduct(draft): ValidatedProduct,
) -> (StatusCode, Json<Product>) {
    let product = state.store.create(draft).await;
    info!("产品已创建: {} ({})", product.name, product.id);
    (StatusCode::CREATED, Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedProduct(draft): ValidatedProduct,
) -> Result<Json<Product>, CoreError> {
    let product = state.store.update(&id, draft).await?;
    info!("产品已更新: {}", product.id);
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorBody>)> {
    if state.store.delete(&id).await {
        info!("产品已删除: {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, Json(ErrorBody::new(NOT_FOUND))))
    }
}
