//! 产品请求体校验
//!
//! `ValidatedProduct` 作为提取器运行在认证中间件之后、处理器之前，
//! 失败时直接返回 `CoreError::BadRequest`。

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use super::model::{ProductDraft, ProductInput};
use crate::core::error::CoreError;

pub struct ValidatedProduct(pub ProductDraft);

#[async_trait]
impl<S> FromRequest<S> for ValidatedProduct
where
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(input) = Json::<ProductInput>::from_request(req, state)
            .await
            .map_err(|rejection| CoreError::BadRequest(rejection.body_text()))?;

        validate(input).map(ValidatedProduct)
    }
}

pub fn validate(input: ProductInput) -> Result<ProductDraft, CoreError> {
    let name = input
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| CoreError::BadRequest("Product name is required".to_string()))?;

    let price = input.price.as_ref().and_then(parse_price).ok_or_else(|| {
        CoreError::BadRequest("Product price is required and must be a number".to_string())
    })?;

    Ok(ProductDraft {
        name,
        description: input.description.map(|d| d.trim().to_string()),
        price,
        category: input.category.map(|c| c.trim().to_string()),
        in_stock: input.in_stock,
    })
}

/// 接受 JSON 数字或可解析为数字的字符串，结果必须是有限值
pub fn parse_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    price.filter(|p| p.is_finite())
}
