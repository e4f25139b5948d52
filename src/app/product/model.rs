//! 产品数据模型

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub const DEFAULT_CATEGORY: &str = "uncategorized";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// 用校验后的输入创建新记录，id 由服务端生成
    pub fn from_draft(draft: ProductDraft) -> Self {
        let category = draft
            .category
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description.unwrap_or_default(),
            price: draft.price,
            category,
            in_stock: draft.in_stock.unwrap_or(false),
        }
    }

    /// 启动时载入的示例数据
    pub fn samples() -> Vec<Product> {
        vec![
            Product {
                id: "1".to_string(),
                name: "Laptop".to_string(),
                description: "High-performance laptop with 16GB RAM".to_string(),
                price: 1200.0,
                category: "electronics".to_string(),
                in_stock: true,
            },
            Product {
                id: "2".to_string(),
                name: "Smartphone".to_string(),
                description: "Latest model with 128GB storage".to_string(),
                price: 800.0,
                category: "electronics".to_string(),
                in_stock: true,
            },
            Product {
                id: "3".to_string(),
                name: "Coffee Maker".to_string(),
                description: "Programmable coffee maker with timer".to_string(),
                price: 50.0,
                category: "kitchen".to_string(),
                in_stock: false,
            },
        ]
    }
}

/// 创建/更新请求体，字段在边界处校验
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    /// 数字或数字字符串都接受
    pub price: Option<Value>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// 校验通过的输入，字符串字段已去除首尾空白
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// 列表查询参数，数值参数按字符串接收以便宽松解析
#[derive(Debug, Default)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ProductQuery {
    /// 从原始查询键值对构建；重复的键只取第一次出现的值，未知键忽略
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut query.category,
                "search" => &mut query.search,
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}
