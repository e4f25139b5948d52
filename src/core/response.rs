//! 核心响应处理模块

use serde::Serialize;

/// 列表接口的分页响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub success: bool,
    pub total_products: usize,
    pub current_page: usize,
    pub products_per_page: usize,
    pub products: Vec<T>,
}

impl<T> PageResponse<T> {
    pub fn success(total: usize, page: usize, limit: usize, products: Vec<T>) -> Self {
        Self {
            success: true,
            total_products: total,
            current_page: page,
            products_per_page: limit,
            products,
        }
    }
}

/// 处理器直接返回的 `{ "message": ... }` 错误体
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// 处理器直接返回的 `{ "error": ... }` 错误体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
